use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::agency::Snapshot;

#[derive(Properties, PartialEq)]
pub struct BehindTheScenesProps {
    pub snapshots: &'static [Snapshot],
}

#[function_component(BehindTheScenes)]
pub fn behind_the_scenes(props: &BehindTheScenesProps) -> Html {
    html! {
        <section class="section light" aria-label="Behind the scenes">
            <style>
                {r#"
                    .bts-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .bts-tile {
                        aspect-ratio: 1;
                        display: flex;
                        align-items: flex-end;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: linear-gradient(160deg, color-mix(in srgb, var(--tone) 15%, transparent), var(--light));
                        font-weight: 600;
                    }
                    @media (max-width: 700px) {
                        .bts-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Behind the scenes"}</div>
                    <h2 class="section-title">{"Real shoots, real "}<em>{"creators"}</em></h2>
                </Reveal>
                <div class="bts-grid">
                    { for props.snapshots.iter().map(|shot| html! {
                        <Reveal class={classes!("bts-tile", shot.tone.class())}>
                            {shot.label}
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
