use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::{
    category_search::CategorySearch, contact::Contact, footer::Footer, hero::Hero,
    high_ticket_saas::HighTicketSaas, navbar::Navbar, pricing::Pricing,
    process_timeline::ProcessTimeline, services::Services, testimonials::Testimonials,
};
use crate::content::agency;
use crate::content::Variant;
use crate::scroll::scroll_to_top;

#[function_component(OnlineBrands)]
pub fn online_brands() -> Html {
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
                    eyebrow="For Online / D2C Brands"
                    title="UGC for your"
                    highlight="online brand"
                    lead="Product demos, voice-over UGC and ad-style reels for organic and paid campaigns, built for D2C brands across India."
                    primary_label="Content Types"
                    primary_target="#work"
                >
                    <CategorySearch
                        items={agency::ONLINE_NICHES}
                        placeholder="Search your niche (skincare, fashion, app…)"
                    />
                </Hero>
                <Services
                    id="work"
                    services={content.services}
                    label="Content types"
                    title="UGC built for performance"
                />
                <section class="section light" aria-label="Why UGC">
                    <div class="container">
                        <Reveal>
                            <div class="section-label">{"Why UGC"}</div>
                            <h2 class="section-title">{"Trust sells better than polish"}</h2>
                        </Reveal>
                        <div class="card-grid">
                            { for agency::UGC_BENEFITS.iter().map(|benefit| html! {
                                <Reveal class={classes!("card")}>
                                    <h3>{benefit.title}</h3>
                                    <p class="section-lead">{benefit.description}</p>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>
                <HighTicketSaas features={agency::SAAS_FEATURES} metrics={agency::SAAS_METRICS} />
                <ProcessTimeline steps={agency::ONLINE_STEPS} />
                <Pricing plans={content.plans} />
                <Testimonials testimonials={content.testimonials} />
                <Contact details={&content.contact} />
            </main>
            <Footer content={content} />
        </>
    }
}
