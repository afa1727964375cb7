use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub highlight: AttrValue,
    pub lead: AttrValue,
    #[prop_or(AttrValue::Static("View My Work"))]
    pub primary_label: AttrValue,
    #[prop_or(AttrValue::Static("#portfolio"))]
    pub primary_target: AttrValue,
    #[prop_or(AttrValue::Static("Get In Touch"))]
    pub secondary_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let jump = |target: AttrValue| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&target);
        })
    };

    html! {
        <section id="home" class="hero" aria-label="Hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: var(--light);
                        background-image: radial-gradient(circle, var(--border) 1px, transparent 1px);
                        background-size: 40px 40px;
                    }
                    .hero-inner {
                        max-width: 56rem;
                        padding: 8rem 0 4rem;
                        animation: hero-in 0.7s ease-out both;
                    }
                    .hero-eyebrow {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 2rem;
                        font-size: 0.85rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }
                    .hero-eyebrow::before {
                        content: "";
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: var(--primary);
                        animation: pulse 1.6s ease-in-out infinite;
                    }
                    .hero h1 {
                        font-size: clamp(2.75rem, 7vw, 4.75rem);
                        line-height: 0.95;
                        margin: 0 0 1.5rem;
                    }
                    .hero h1 em { color: var(--primary); }
                    .hero-lead {
                        font-size: 1.15rem;
                        color: var(--muted);
                        max-width: 40rem;
                        line-height: 1.7;
                        margin-bottom: 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    @keyframes hero-in {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes pulse {
                        50% { opacity: 0.3; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="hero-inner">
                    <div class="hero-eyebrow">{&props.eyebrow}</div>
                    <h1>{&props.title}<br /><em>{&props.highlight}</em></h1>
                    <p class="hero-lead">{&props.lead}</p>
                    <div class="hero-actions">
                        <a href={props.primary_target.clone()} class="btn btn-primary" onclick={jump(props.primary_target.clone())}>
                            {&props.primary_label}{" →"}
                        </a>
                        <a href="#contact" class="btn btn-outline" onclick={jump(AttrValue::Static("#contact"))}>
                            {&props.secondary_label}
                        </a>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
