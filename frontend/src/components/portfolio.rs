use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{filter_projects, project_categories, Project};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub projects: &'static [Project],
    #[prop_or(AttrValue::Static("Selected work"))]
    pub title: AttrValue,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let projects = props.projects;
    let category = use_state(|| None::<&'static str>);
    let selected = use_state(|| None::<&'static Project>);

    let select_category = |value: Option<&'static str>| {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(value))
    };

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let filters = std::iter::once(None)
        .chain(project_categories(projects).into_iter().map(Some))
        .map(|value| {
            let active = *category == value;
            html! {
                <button
                    class={classes!("filter-btn", active.then_some("active"))}
                    onclick={select_category(value)}
                >
                    {value.unwrap_or("All")}
                </button>
            }
        });

    let cards = filter_projects(projects, *category).into_iter().map(|project| {
        let open = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(project)))
        };
        html! {
            <Reveal class={classes!("card", "project-card", project.tone.class())}>
                <button class="project-open" onclick={open}>
                    <span class="project-category">{project.category}</span>
                    <h3>{project.title}</h3>
                    <p class="project-result">{project.result}</p>
                </button>
            </Reveal>
        }
    });

    html! {
        <section id="portfolio" class="section" aria-label="Portfolio">
            <style>
                {r#"
                    .filters {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin: 2rem 0;
                    }
                    .filter-btn {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: transparent;
                        cursor: pointer;
                    }
                    .filter-btn.active {
                        background: var(--foreground);
                        color: #fff;
                    }
                    .project-open {
                        all: unset;
                        display: block;
                        cursor: pointer;
                        width: 100%;
                    }
                    .project-category {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: var(--tone);
                    }
                    .project-result { font-weight: 600; }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.55);
                    }
                    .modal {
                        position: relative;
                        max-width: 36rem;
                        width: 90%;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--background);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        border: none;
                        background: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: var(--light);
                        font-size: 0.8rem;
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Portfolio"}</div>
                    <h2 class="section-title">{&props.title}</h2>
                </Reveal>
                <div class="filters">{ for filters }</div>
                <div class="card-grid">{ for cards }</div>
            </div>
            if let Some(project) = *selected {
                <div class="modal-backdrop" onclick={close.clone()}>
                    <div class="modal" role="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                        <span class="project-category">{project.category}</span>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <p class="project-result">{project.result}</p>
                        <div class="tags">
                            { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                        </div>
                    </div>
                </div>
            }
        </section>
    }
}
