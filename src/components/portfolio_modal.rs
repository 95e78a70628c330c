use yew::prelude::*;

use crate::content::PortfolioItem;

#[derive(Properties, PartialEq)]
pub struct PortfolioModalProps {
    pub item: Option<&'static PortfolioItem>,
    pub on_close: Callback<()>,
}

#[function_component(PortfolioModal)]
pub fn portfolio_modal(props: &PortfolioModalProps) -> Html {
    let Some(item) = props.item else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // clicks inside the dialog must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.75);
                    }
                    .modal-dialog {
                        position: relative;
                        display: flex;
                        max-width: 48rem;
                        width: 100%;
                        border-radius: 8px;
                        overflow: hidden;
                        background: var(--card);
                        color: var(--text);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    }
                    .modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: var(--muted);
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        color: #ef4444;
                    }
                    .modal-image {
                        width: 50%;
                        object-fit: cover;
                    }
                    .modal-body {
                        width: 50%;
                        padding: 2rem;
                        max-height: 80vh;
                        overflow-y: auto;
                    }
                    .modal-category {
                        color: var(--primary);
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }
                    .modal-body ul {
                        padding-left: 1.2rem;
                        color: var(--muted);
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .modal-dialog {
                            flex-direction: column;
                        }
                        .modal-image, .modal-body {
                            width: 100%;
                        }
                    }
                "#}
            </style>
            <div class="modal-dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" onclick={close} aria-label="Close modal">{"✕"}</button>
                <img class="modal-image" src={item.thumbnail_url()} alt={item.title} />
                <div class="modal-body">
                    <h2>{item.title}</h2>
                    <p class="modal-category">{item.category}</p>
                    if !item.description.is_empty() {
                        <p>{item.description}</p>
                    }
                    if !item.details.is_empty() {
                        <div>
                            <h4>{"Details:"}</h4>
                            <ul>
                                { for item.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                            </ul>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
