use yew::prelude::*;

use crate::content::{COMPANY, HIGHLIGHTS};
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{node_refs, rise, TOP_70, TOP_80};

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let section = use_node_ref();
    let title = use_node_ref();
    let items = use_memo(|_| node_refs(HIGHLIGHTS.len()), ());

    use_reveal(vec![
        RevealGroup::on_scroll(vec![title.clone()], &section, TOP_80, rise(50.0, 800.0)),
        RevealGroup::on_scroll(items.to_vec(), &section, TOP_70, rise(50.0, 600.0).stagger(200.0)),
    ]);

    html! {
        <section id="why-choose-us" class="section" ref={section}>
            <style>
                {r#"
                    .highlight {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 2.5rem;
                    }
                    .highlight-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title spaced" ref={title}>{format!("Why Choose {}?", COMPANY)}</h2>
                <div class="grid grid-4">
                    { for HIGHLIGHTS.iter().zip(items.iter()).map(|(item, node)| html! {
                        <div class="card highlight" ref={node.clone()}>
                            <div class="highlight-icon">{item.icon}</div>
                            <h3>{item.title}</h3>
                            <p class="muted small">{item.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
