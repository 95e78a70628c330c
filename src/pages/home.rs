use yew::prelude::*;

use crate::sections::{
    about::About,
    contact::Contact,
    hero::Hero,
    partners::Partners,
    portfolio::Portfolio,
    services::Services,
    testimonials::Testimonials,
    why_choose_us::WhyChooseUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    // every visit starts at the hero
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero />
            <Services />
            <WhyChooseUs />
            <Partners />
            <Portfolio />
            <Testimonials />
            <About />
            <Contact />
        </>
    }
}
