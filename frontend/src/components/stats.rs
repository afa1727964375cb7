use yew::prelude::*;

use crate::config::{COUNT_UP_DURATION_MS, VISIBILITY_THRESHOLD};
use crate::content::Stat;
use crate::hooks::{use_count_up, use_in_view};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: &'static Stat,
}

/// One counter. Each card has its own detector, so cards start counting
/// independently as they scroll in.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let stat = props.stat;
    let (node, in_view) = use_in_view(VISIBILITY_THRESHOLD);
    let value = use_count_up(stat.value, COUNT_UP_DURATION_MS, in_view);

    html! {
        <div ref={node} class={classes!("stat-card", stat.tone.class())}>
            <div class="stat-icon">{stat.icon}</div>
            <div class="stat-value">{format!("{}{}{}", stat.prefix, value, stat.suffix)}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: &'static [Stat],
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    html! {
        <section class="stats" aria-label="Statistics">
            <style>
                {r#"
                    .stats {
                        padding: 4rem 0;
                        background: var(--foreground);
                        color: #fff;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-icon {
                        font-size: 1.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .stat-value {
                        font-size: 2.75rem;
                        font-weight: 700;
                        color: var(--tone);
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        font-size: 0.9rem;
                        opacity: 0.7;
                    }
                "#}
            </style>
            <div class="container stats-grid">
                { for props.stats.iter().map(|stat| html! { <StatCard stat={stat} /> }) }
            </div>
        </section>
    }
}
