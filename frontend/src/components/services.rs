use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: &'static [Service],
    #[prop_or(AttrValue::Static("Services"))]
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("What I offer"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
    #[prop_or(AttrValue::Static("services"))]
    pub id: AttrValue,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id={props.id.clone()} class="section light" aria-label="Services">
            <style>
                {r#"
                    .service-card {
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-6px);
                        border-color: var(--tone);
                    }
                    .service-icon {
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.75rem;
                        background: color-mix(in srgb, var(--tone) 12%, transparent);
                        font-size: 1.3rem;
                        margin-bottom: 1rem;
                    }
                    .service-card p {
                        color: var(--muted);
                        font-size: 0.9rem;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{&props.label}</div>
                    <h2 class="section-title">{&props.title}</h2>
                    if let Some(lead) = &props.lead {
                        <p class="section-lead">{lead}</p>
                    }
                </Reveal>
                <div class="card-grid">
                    { for props.services.iter().map(|service| html! {
                        <Reveal class={classes!("card", "service-card", service.tone.class())}>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
