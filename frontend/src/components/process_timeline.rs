use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Step;

#[derive(Properties, PartialEq)]
pub struct ProcessTimelineProps {
    pub steps: &'static [Step],
    #[prop_or(AttrValue::Static("How it works"))]
    pub title: AttrValue,
}

#[function_component(ProcessTimeline)]
pub fn process_timeline(props: &ProcessTimelineProps) -> Html {
    html! {
        <section id="process" class="section" aria-label="Process">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        display: grid;
                        gap: 2.5rem;
                        margin-top: 3rem;
                        padding-left: 2.5rem;
                    }
                    .timeline::before {
                        content: "";
                        position: absolute;
                        left: 0.75rem;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: var(--border);
                    }
                    .timeline-step { position: relative; }
                    .timeline-step::before {
                        content: "";
                        position: absolute;
                        left: -2.1rem;
                        top: 0.4rem;
                        width: 0.9rem;
                        height: 0.9rem;
                        border-radius: 50%;
                        background: var(--primary);
                    }
                    .step-number {
                        font-size: 0.8rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .timeline-step h3 { margin: 0.25rem 0 0.5rem; }
                    .timeline-step p { color: var(--muted); margin: 0; }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Process"}</div>
                    <h2 class="section-title">{&props.title}</h2>
                </Reveal>
                <div class="timeline">
                    { for props.steps.iter().map(|step| html! {
                        <Reveal class={classes!("timeline-step")}>
                            <span class="step-number">{step.number}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
