use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, faq::Faq, footer::Footer, hero::Hero, navbar::Navbar,
    portfolio::Portfolio, pricing::Pricing, process_timeline::ProcessTimeline, services::Services,
    special_offer::SpecialOffer, stats::Stats, testimonials::Testimonials,
};
use crate::content::Variant;
use crate::scroll::scroll_to_top;

#[function_component(Home)]
pub fn home() -> Html {
    let content = Variant::Consultant.content();

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
                    eyebrow="Digital Marketing Consultant"
                    title="I grow brands with"
                    highlight="data-driven marketing"
                    lead={content.brand.tagline}
                />
                <Stats stats={content.stats} />
                <About about={&content.about} />
                <Services services={content.services} />
                <ProcessTimeline steps={content.steps} title="From discovery to results" />
                <Portfolio projects={content.projects} />
                <Testimonials testimonials={content.testimonials} />
                <Pricing plans={content.plans} />
                <SpecialOffer />
                <Faq faqs={content.faqs} />
                <Contact details={&content.contact} />
            </main>
            <Footer content={content} />
        </>
    }
}
