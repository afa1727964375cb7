use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::agency::ComparisonRow;

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub rows: &'static [ComparisonRow],
    pub brand: AttrValue,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    html! {
        <section class="section" aria-label="Comparison">
            <style>
                {r#"
                    .comparison {
                        width: 100%;
                        max-width: 48rem;
                        margin: 2rem auto 0;
                        border-collapse: collapse;
                    }
                    .comparison th,
                    .comparison td {
                        padding: 1rem;
                        border-bottom: 1px solid var(--border);
                        text-align: left;
                    }
                    .comparison th.us { color: var(--primary); }
                    .comparison td.yes::before { content: "✓ "; color: var(--accent); }
                    .comparison td.no { color: var(--muted); }
                    .comparison td.no::before { content: "✕ "; }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Why us"}</div>
                    <h2 class="section-title">{"How we compare"}</h2>
                </Reveal>
                <table class="comparison">
                    <thead>
                        <tr>
                            <th>{"Feature"}</th>
                            <th class="us">{&props.brand}</th>
                            <th>{"Others"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(|row| html! {
                            <tr>
                                <td>{row.feature}</td>
                                <td class="yes">{"Yes"}</td>
                                <td class="no">{row.others}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </section>
    }
}
