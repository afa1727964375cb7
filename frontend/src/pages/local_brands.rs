use yew::prelude::*;

use crate::components::{
    behind_the_scenes::BehindTheScenes, category_search::CategorySearch,
    comparison_table::ComparisonTable, contact::Contact, footer::Footer, hero::Hero,
    navbar::Navbar, process_timeline::ProcessTimeline, stats::Stats, testimonials::Testimonials,
};
use crate::components::reveal::Reveal;
use crate::content::agency::{self, Milestone, ShowcaseItem};
use crate::content::Variant;
use crate::scroll::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct BestWorkProps {
    pub items: &'static [ShowcaseItem],
}

#[function_component(BestWork)]
pub fn best_work(props: &BestWorkProps) -> Html {
    html! {
        <section id="work" class="section" aria-label="Best work">
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Our best work"}</div>
                    <h2 class="section-title">{"Content that gets "}<em>{"walk-ins"}</em></h2>
                </Reveal>
                <div class="card-grid">
                    { for props.items.iter().map(|item| html! {
                        <Reveal class={classes!("card")}>
                            <span class="project-category">{item.category}</span>
                            <h3>{item.title}</h3>
                            <p class="section-lead">{format!("{} · {}", item.goal, item.platform)}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpectedResultsProps {
    pub milestones: &'static [Milestone],
}

#[function_component(ExpectedResults)]
pub fn expected_results(props: &ExpectedResultsProps) -> Html {
    html! {
        <section class="section light" aria-label="Expected results">
            <div class="container">
                <Reveal>
                    <div class="section-label">{"What to expect"}</div>
                    <h2 class="section-title">{"Your first month"}</h2>
                </Reveal>
                <div class="card-grid">
                    { for props.milestones.iter().map(|m| html! {
                        <Reveal class={classes!("card")}>
                            <div class="service-icon">{m.icon}</div>
                            <span class="step-number">{m.when}</span>
                            <h3>{m.title}</h3>
                            <p class="section-lead">{m.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(LocalBrands)]
pub fn local_brands() -> Html {
    let content = Variant::Agency.content();

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <>
            <Navbar content={content} />
            <main>
                <Hero
                    eyebrow="For Local Businesses"
                    title="iGC content for your"
                    highlight="local business"
                    lead="Creators visit your café, salon, gym or clinic and film content your neighbourhood actually stops scrolling for."
                    primary_label="See Our Work"
                    primary_target="#work"
                >
                    <CategorySearch
                        items={agency::LOCAL_CATEGORIES}
                        placeholder="Search your business type (café, salon, gym…)"
                    />
                </Hero>
                <Stats stats={content.stats} />
                <BestWork items={agency::BEST_WORK} />
                <ExpectedResults milestones={agency::EXPECTED_RESULTS} />
                <ComparisonTable rows={agency::COMPARISON} brand="CreatorBox" />
                <BehindTheScenes snapshots={agency::BEHIND_THE_SCENES} />
                <ProcessTimeline steps={agency::LOCAL_STEPS} />
                <Testimonials testimonials={content.testimonials} />
                <Contact details={&content.contact} />
            </main>
            <Footer content={content} />
        </>
    }
}
