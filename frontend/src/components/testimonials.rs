use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::Testimonial;
use crate::hooks::use_carousel;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: &'static [Testimonial],
    #[prop_or(AttrValue::Static("What clients say"))]
    pub title: AttrValue,
}

/// Rotating quotes. Hovering the card holds the current slide; the arrows
/// and dots navigate without touching the autoplay schedule.
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let items = props.testimonials;
    let carousel = use_carousel(items.len(), CAROUSEL_INTERVAL_MS);
    let Some(current) = items.get(carousel.current()) else {
        return html! {};
    };

    let pause = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set_paused(true))
    };
    let resume = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set_paused(false))
    };
    let previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.previous())
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };

    let dots = (0..carousel.len()).map(|index| {
        let carousel = carousel.clone();
        let active = index == carousel.current();
        let label = format!("Show testimonial {}", index + 1);
        html! {
            <button
                class={classes!("dot", active.then_some("active"))}
                aria-label={label}
                onclick={Callback::from(move |_: MouseEvent| carousel.jump_to(index as i64))}
            />
        }
    });

    html! {
        <section id="testimonials" class="section light" aria-label="Testimonials">
            <style>
                {r#"
                    .testimonial-card {
                        max-width: 48rem;
                        margin: 3rem auto 0;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: var(--background);
                        border: 1px solid var(--border);
                        text-align: center;
                    }
                    .testimonial-card.paused { border-color: var(--primary); }
                    .testimonial-quote {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        animation: fade-in 0.5s ease;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--primary);
                        color: #fff;
                        font-weight: 700;
                    }
                    .testimonial-company {
                        font-size: 0.85rem;
                        color: var(--muted);
                    }
                    .carousel-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .arrow {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: 1px solid var(--border);
                        background: var(--background);
                        cursor: pointer;
                    }
                    .dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        border-radius: 999px;
                        border: none;
                        background: var(--border);
                        cursor: pointer;
                        transition: width 0.3s ease;
                    }
                    .dot.active {
                        width: 1.75rem;
                        background: var(--primary);
                    }
                    @keyframes fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Testimonials"}</div>
                    <h2 class="section-title">{&props.title}</h2>
                </Reveal>
                <div class={classes!("testimonial-card", carousel.is_paused().then_some("paused"))} onmouseenter={pause} onmouseleave={resume}>
                    <p class="testimonial-quote" key={carousel.current()}>{format!("“{}”", current.quote)}</p>
                    <div class="testimonial-author">
                        <div class="avatar">{current.initials}</div>
                        <div>
                            <div class="testimonial-name">{current.name}</div>
                            <div class="testimonial-company">{current.company}</div>
                        </div>
                    </div>
                </div>
                <div class="carousel-controls">
                    <button class="arrow" aria-label="Previous testimonial" onclick={previous}>{"←"}</button>
                    { for dots }
                    <button class="arrow" aria-label="Next testimonial" onclick={next}>{"→"}</button>
                </div>
            </div>
        </section>
    }
}
