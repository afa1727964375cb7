use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::agency::Metric;
use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct HighTicketSaasProps {
    pub features: &'static [Service],
    pub metrics: &'static [Metric],
}

#[function_component(HighTicketSaas)]
pub fn high_ticket_saas(props: &HighTicketSaasProps) -> Html {
    html! {
        <section class="section saas" aria-label="High-ticket and SaaS">
            <style>
                {r#"
                    .saas {
                        background: var(--foreground);
                        color: #fff;
                    }
                    .saas .section-lead { color: rgba(255, 255, 255, 0.7); }
                    .saas .card {
                        background: rgba(255, 255, 255, 0.04);
                        border-color: rgba(255, 255, 255, 0.1);
                    }
                    .saas .card p { color: rgba(255, 255, 255, 0.7); }
                    .metrics {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                        gap: 1.5rem;
                        margin-top: 3rem;
                        text-align: center;
                    }
                    .metric-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"High-ticket & SaaS"}</div>
                    <h2 class="section-title">{"UGC that sells "}<em>{"complex products"}</em></h2>
                    <p class="section-lead">
                        {"Founder stories, demos and testimonials for brands with long sales cycles and big tickets."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    { for props.features.iter().map(|feature| html! {
                        <Reveal class={classes!("card", feature.tone.class())}>
                            <div class="service-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </Reveal>
                    }) }
                </div>
                <div class="metrics">
                    { for props.metrics.iter().map(|metric| html! {
                        <div>
                            <div class="metric-value">{metric.value}</div>
                            <div>{metric.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
