use log::info;
use yew::prelude::*;

use crate::components::portfolio_modal::PortfolioModal;
use crate::config;
use crate::content::{portfolio_item, PORTFOLIO};
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{node_refs, rise, TOP_80};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let selected = use_state(|| None::<u32>);
    let section = use_node_ref();
    let title = use_node_ref();
    let text = use_node_ref();
    let grid = use_node_ref();
    let tiles = use_memo(|_| node_refs(PORTFOLIO.len()), ());

    use_reveal(vec![
        RevealGroup::on_scroll(
            vec![title.clone(), text.clone()],
            &section,
            TOP_80,
            rise(50.0, 800.0),
        ),
        RevealGroup::on_scroll(tiles.to_vec(), &grid, TOP_80, rise(50.0, 600.0).stagger(150.0)),
    ]);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <>
            <section id="portfolio" class="section section-card layered" ref={section}>
                <style>
                    {r#"
                        .layered {
                            position: relative;
                        }
                        .layer-background {
                            position: absolute;
                            inset: 0;
                        }
                        .layer-background img {
                            width: 100%;
                            height: 100%;
                            object-fit: cover;
                            opacity: 0.5;
                        }
                        html.dark .layer-background img {
                            opacity: 0.3;
                        }
                        .layer-background .veil {
                            position: absolute;
                            inset: 0;
                            background: var(--card);
                            opacity: 0.75;
                        }
                        .layered > .container {
                            position: relative;
                            z-index: 10;
                        }
                        .portfolio-tile {
                            position: relative;
                            aspect-ratio: 3 / 2;
                            border-radius: 8px;
                            overflow: hidden;
                            cursor: pointer;
                            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                        }
                        .portfolio-tile img {
                            width: 100%;
                            height: 100%;
                            object-fit: cover;
                            transition: transform 0.5s ease;
                        }
                        .portfolio-tile:hover img {
                            transform: scale(1.1);
                        }
                        .tile-overlay {
                            position: absolute;
                            inset: 0;
                            display: flex;
                            flex-direction: column;
                            justify-content: flex-end;
                            padding: 1.25rem;
                            background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.3), transparent);
                        }
                        .tile-overlay h3, .tile-overlay p {
                            color: #fff;
                            opacity: 0;
                            transform: translateY(1rem);
                            transition: opacity 0.3s, transform 0.3s;
                        }
                        .tile-overlay p {
                            color: #d1d5db;
                            font-size: 0.9rem;
                            transition-delay: 0.1s;
                        }
                        .portfolio-tile:hover .tile-overlay h3,
                        .portfolio-tile:hover .tile-overlay p {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    "#}
                </style>
                <div class="layer-background">
                    <img src={config::asset("/assets/homepage05.gif")} alt="Portfolio background" />
                    <div class="veil"></div>
                </div>
                <div class="container">
                    <h2 class="section-title" ref={title}>{"Featured Projects"}</h2>
                    <p class="section-lead" ref={text}>
                        {"Explore examples of our high-quality craftsmanship and attention to detail."}
                    </p>
                    <div class="grid grid-3" ref={grid}>
                        { for PORTFOLIO.iter().zip(tiles.iter()).map(|(item, node)| {
                            let onclick = {
                                let selected = selected.clone();
                                let id = item.id;
                                Callback::from(move |_: MouseEvent| {
                                    info!("Opening portfolio item {}", id);
                                    selected.set(Some(id));
                                })
                            };
                            html! {
                                <div key={item.id} class="portfolio-tile" ref={node.clone()} {onclick}>
                                    <img src={item.thumbnail_url()} alt={item.title} />
                                    <div class="tile-overlay">
                                        <h3>{item.title}</h3>
                                        <p>{item.category}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <PortfolioModal item={(*selected).and_then(portfolio_item)} {on_close} />
        </>
    }
}
