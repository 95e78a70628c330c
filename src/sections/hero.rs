use yew::prelude::*;

use crate::config;
use crate::content::COMPANY;
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{grow, rise};

#[function_component(Hero)]
pub fn hero() -> Html {
    let headline = use_node_ref();
    let subheadline = use_node_ref();
    let cta = use_node_ref();

    // subheadline overlaps the headline by 600ms, the button overlaps it by 500ms
    use_reveal(vec![
        RevealGroup::on_mount(vec![headline.clone()], rise(50.0, 1000.0).delay(300.0)),
        RevealGroup::on_mount(vec![subheadline.clone()], rise(30.0, 800.0).delay(700.0)),
        RevealGroup::on_mount(vec![cta.clone()], grow(0.8, 600.0).delay(1000.0)),
    ]);

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #fff;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: #111827;
                    }
                    .hero-background img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.4;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(255, 255, 255, 0.5);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        padding: 1rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 800;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                        text-shadow: 2px 2px 8px rgba(0, 0, 0, 0.7);
                    }
                    .hero p {
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        text-shadow: 1px 1px 4px rgba(0, 0, 0, 0.7);
                    }
                "#}
            </style>
            <div class="hero-background">
                <img src={config::asset("/assets/homepage01.gif")} alt="Roofing work background" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1 ref={headline}>{format!("Transform Your Home with {}", COMPANY)}</h1>
                <p ref={subheadline}>
                    {"Experience the pinnacle of roofing quality and service. Protect your investment with a roof built to last."}
                </p>
                <div ref={cta}>
                    <a href="#contact" class="cta-button">{"Get a Free Quote"}</a>
                </div>
            </div>
        </section>
    }
}
