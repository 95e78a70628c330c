use yew::prelude::*;

use crate::config;
use crate::content::PARTNER_LOGOS;
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{node_refs, rise, slide, TOP_80, TOP_85};

#[function_component(Partners)]
pub fn partners() -> Html {
    let section = use_node_ref();
    let copy = use_node_ref();
    let logo_grid = use_node_ref();
    let logos = use_memo(|_| node_refs(PARTNER_LOGOS.len()), ());

    use_reveal(vec![
        RevealGroup::on_scroll(vec![copy.clone()], &section, TOP_80, slide(-50.0, 800.0)),
        RevealGroup::on_scroll(
            logos.to_vec(),
            &logo_grid,
            TOP_85,
            rise(30.0, 500.0).stagger(100.0),
        ),
    ]);

    html! {
        <section id="global-relationships" class="section" ref={section}>
            <style>
                {r#"
                    .partners {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .partners h3 {
                        color: var(--primary);
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .partner-logos {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        align-items: center;
                    }
                    .partner-logo {
                        aspect-ratio: 16 / 9;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.5rem;
                        border-radius: 6px;
                        background: #fff;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .partner-logo img {
                        max-width: 100%;
                        max-height: 100%;
                        object-fit: contain;
                    }
                    @media (max-width: 1024px) {
                        .partners {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container partners">
                <div ref={copy}>
                    <h2 class="section-title left">{"Global Relationships"}</h2>
                    <h3>{"Company Partners"}</h3>
                    <p class="body-copy">
                        {"We provide removal, installation and thorough clean-up after each project."}
                    </p>
                    <p class="body-copy">
                        {"We promise to guide you every step of your project. A roofing system is a compilation of many parts and materials. Our expert team of professionals will provide you with peace of mind from selecting your roofing materials, from shingles, tiles and beyond."}
                    </p>
                </div>
                <div class="partner-logos" ref={logo_grid}>
                    { for PARTNER_LOGOS.iter().zip(logos.iter()).enumerate().map(|(i, (path, node))| html! {
                        <div class="partner-logo" ref={node.clone()}>
                            <img src={config::asset(path)} alt={format!("Certification Logo {}", i + 1)} />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
