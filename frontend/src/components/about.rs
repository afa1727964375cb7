use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::About as AboutContent;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: &'static AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = props.about;

    html! {
        <section id="about" class="section" aria-label="About">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-text p {
                        color: var(--muted);
                        line-height: 1.7;
                    }
                    .about-highlights {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-top: 2rem;
                        padding: 0;
                        list-style: none;
                    }
                    .about-highlights li::before {
                        content: "✓ ";
                        color: var(--primary);
                    }
                    .skills {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .skill {
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: var(--light);
                        font-size: 0.9rem;
                    }
                    @media (max-width: 900px) {
                        .about-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container about-grid">
                <Reveal class={classes!("about-text")}>
                    <div class="section-label">{"About"}</div>
                    <h2 class="section-title">{about.heading}</h2>
                    { for about.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                    <ul class="about-highlights">
                        { for about.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                    </ul>
                </Reveal>
                <Reveal>
                    <div class="skills">
                        { for about.skills.iter().map(|s| html! { <span class="skill">{*s}</span> }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
