use yew::prelude::*;

use crate::content::SERVICES;
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{node_refs, rise, TOP_70, TOP_80};

#[function_component(Services)]
pub fn services() -> Html {
    let section = use_node_ref();
    let title = use_node_ref();
    let text = use_node_ref();
    let cards = use_memo(|_| node_refs(SERVICES.len()), ());

    use_reveal(vec![
        RevealGroup::on_scroll(
            vec![title.clone(), text.clone()],
            &section,
            TOP_80,
            rise(50.0, 800.0),
        ),
        RevealGroup::on_scroll(cards.to_vec(), &section, TOP_70, rise(50.0, 600.0).stagger(200.0)),
    ]);

    html! {
        <section id="services" class="section section-card" ref={section}>
            <style>
                {r#"
                    .service-card {
                        width: 100%;
                        max-width: 32rem;
                        min-height: 24rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        overflow: hidden;
                        padding: 0;
                    }
                    .service-icon {
                        width: 100%;
                        height: 10rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 5rem;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(135deg, rgba(0, 122, 255, 0.2), rgba(10, 132, 255, 0.2));
                    }
                    .service-body {
                        padding: 0 1.5rem 2rem;
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title" ref={title}>{"Our Services"}</h2>
                <p class="section-lead" ref={text}>
                    {"We offer comprehensive roofing solutions tailored to your needs, ensuring quality and durability."}
                </p>
                <div class="grid grid-3 centered">
                    { for SERVICES.iter().zip(cards.iter()).map(|(service, card)| html! {
                        <div class="card hover-lift service-card" ref={card.clone()}>
                            <div class="service-icon">{service.icon}</div>
                            <div class="service-body">
                                <h3>{service.title}</h3>
                                <p class="muted">{service.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
