use yew::prelude::*;

use crate::config;
use crate::content::{COMPANY, MILESTONES, VALUES};
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{node_refs, rise, slide, BOTTOM_90, TOP_80};

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let top_image = use_node_ref();
    let left = use_node_ref();
    let right = use_node_ref();
    let milestones = use_memo(|_| node_refs(MILESTONES.len()), ());

    use_reveal(vec![
        RevealGroup::on_scroll(vec![top_image.clone()], &section, TOP_80, rise(50.0, 800.0)),
        RevealGroup::on_scroll(
            vec![left.clone()],
            &top_image,
            BOTTOM_90,
            slide(-50.0, 800.0).delay(200.0),
        ),
        RevealGroup::on_scroll(
            vec![right.clone()],
            &top_image,
            BOTTOM_90,
            slide(50.0, 800.0).delay(300.0),
        ),
        RevealGroup::on_scroll(
            milestones.to_vec(),
            &right,
            TOP_80,
            slide(-30.0, 500.0).stagger(150.0),
        ),
    ]);

    html! {
        <section id="about" class="section section-card layered" ref={section}>
            <style>
                {r#"
                    .about-background img {
                        opacity: 0.15;
                    }
                    html.dark .about-background img {
                        opacity: 0.05;
                    }
                    .about-background .veil {
                        opacity: 0.85;
                    }
                    .about-hero-image {
                        height: clamp(16rem, 40vw, 31rem);
                        margin-bottom: 4rem;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
                    }
                    .about-hero-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: start;
                    }
                    .about-columns h3 {
                        font-size: 1.25rem;
                        margin: 1.5rem 0 0.5rem;
                    }
                    .about-columns ul {
                        margin-left: 1.5rem;
                    }
                    .journey {
                        position: relative;
                        border-left: 2px solid var(--primary-soft);
                        padding-left: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .milestone {
                        position: relative;
                    }
                    .milestone::before {
                        content: "";
                        position: absolute;
                        left: calc(-1.5rem - 9px);
                        top: 50%;
                        transform: translateY(-50%);
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: var(--primary);
                        border: 2px solid var(--bg);
                    }
                    .milestone-year {
                        font-weight: 700;
                        font-size: 1.1rem;
                        color: var(--primary);
                    }
                    .milestone h4 {
                        margin: 0.25rem 0;
                        font-weight: 500;
                    }
                    @media (max-width: 1024px) {
                        .about-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="layer-background about-background">
                <img src={config::asset("/assets/inspection/Best-Roofing-Contractors-In-Your-Area-scaled-1.jpeg")} alt="Roofing background" />
                <div class="veil"></div>
            </div>
            <div class="container">
                <div class="about-hero-image" ref={top_image.clone()}>
                    <img src={config::asset("/assets/homepage09.jpg")} alt="Roofing team working on a roof" />
                </div>

                <div class="about-columns">
                    <div ref={left}>
                        <h2 class="section-title left">{format!("About {}", COMPANY)}</h2>
                        <div class="body-copy">
                            <p>
                                {format!("Founded on the principles of quality, integrity, and reliability, {} has become a trusted leader in the roofing industry. We are dedicated to providing homeowners and businesses with superior roofing solutions that protect their properties and enhance their value.", COMPANY)}
                            </p>
                            <h3>{"Our Mission"}</h3>
                            <p>
                                {"To deliver exceptional roofing services through expert craftsmanship, high-quality materials, and unparalleled customer service, ensuring complete satisfaction and peace of mind for every client."}
                            </p>
                            <h3>{"Our Values"}</h3>
                            <ul>
                                { for VALUES.iter().map(|value| html! { <li>{*value}</li> }) }
                            </ul>
                        </div>
                    </div>

                    <div ref={right.clone()}>
                        <h3 class="journey-title">{"Our Journey"}</h3>
                        <div class="journey">
                            { for MILESTONES.iter().zip(milestones.iter()).map(|(milestone, node)| html! {
                                <div class="milestone" ref={node.clone()}>
                                    <span class="milestone-year">{milestone.year}</span>
                                    <h4>{milestone.title}</h4>
                                    <p class="muted small">{milestone.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
