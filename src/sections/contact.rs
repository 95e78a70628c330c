use std::rc::Rc;

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::controller::{Begin, SubmissionController, SubmissionStatus};
use crate::contact::inquiry::{FieldError, FieldErrors, InquiryDraft};
use crate::contact::transport::post_opaque;
use crate::reveal::hook::{use_reveal, RevealGroup};
use crate::reveal::presets::{rise, TOP_75, TOP_80};

pub enum DraftAction {
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
    Clear,
}

impl Reducible for InquiryDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DraftAction::Name(value) => next.name = value,
            DraftAction::Email(value) => next.email = value,
            DraftAction::Phone(value) => next.phone = value,
            DraftAction::Message(value) => next.message = value,
            DraftAction::Clear => next = InquiryDraft::default(),
        }
        Rc::new(next)
    }
}

fn field_error(error: Option<FieldError>) -> Html {
    match error {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

fn field_classes(error: Option<FieldError>) -> Classes {
    classes!("field", error.map(|_| "invalid"))
}

fn aria_invalid(error: Option<FieldError>) -> &'static str {
    if error.is_some() { "true" } else { "false" }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let title = use_node_ref();
    let text = use_node_ref();
    let form_box = use_node_ref();

    use_reveal(vec![
        RevealGroup::on_scroll(
            vec![title.clone(), text.clone()],
            &section,
            TOP_80,
            rise(50.0, 800.0),
        ),
        RevealGroup::on_scroll(
            vec![form_box.clone()],
            &section,
            TOP_75,
            rise(50.0, 1000.0).delay(300.0),
        ),
    ]);

    let draft = use_reducer(InquiryDraft::default);
    // errors are shown once the user has tried to submit, then kept live
    let attempted = use_state(|| false);
    let controller = use_mut_ref(|| SubmissionController::new(config::site().success_notice_ms));
    let refresh = use_force_update();

    let errors = if *attempted {
        draft.validate().err().unwrap_or_default()
    } else {
        FieldErrors::default()
    };
    let (status, notice, locked) = {
        let controller = controller.borrow();
        (controller.status(), controller.notice(), controller.is_locked())
    };

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.dispatch(DraftAction::Name(value));
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.dispatch(DraftAction::Email(value));
        })
    };
    let on_phone = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.dispatch(DraftAction::Phone(value));
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.dispatch(DraftAction::Message(value));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let attempted = attempted.clone();
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let site = config::site();
            let begin = controller.borrow_mut().begin(&draft, &site.form);
            let payload = match begin {
                Begin::Ignored => return,
                Begin::Invalid(_) => {
                    attempted.set(true);
                    return;
                }
                Begin::Send(payload) => payload,
            };
            refresh.force_update();

            let draft = draft.clone();
            let attempted = attempted.clone();
            let controller = controller.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let outcome = post_opaque(&site.form.action_url, &payload).await;
                if let Err(e) = &outcome {
                    error!("Form submission error:", e.to_string());
                }
                let ticket = controller.borrow_mut().settle(outcome);
                refresh.force_update();

                if let Some(ticket) = ticket {
                    info!("Contact inquiry sent");
                    draft.dispatch(DraftAction::Clear);
                    attempted.set(false);
                    TimeoutFuture::new(ticket.after_ms).await;
                    if controller.borrow_mut().expire(ticket) {
                        refresh.force_update();
                    }
                }
            });
        })
    };

    let banner_class = match status {
        SubmissionStatus::Success => "banner success",
        SubmissionStatus::Error => "banner error",
        _ => "banner",
    };

    html! {
        <section id="contact" class="section" ref={section}>
            <style>
                {r#"
                    .contact-box {
                        max-width: 32rem;
                        margin: 0 auto;
                        padding: 2rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.25rem;
                        color: var(--muted);
                    }
                    .contact-form label span {
                        font-size: 0.75rem;
                    }
                    .field {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 6px;
                        border: 1px solid var(--border);
                        background: var(--bg);
                        color: var(--text);
                        font: inherit;
                        transition: border-color 0.3s, box-shadow 0.3s;
                    }
                    .field:focus {
                        outline: none;
                        border-color: var(--primary);
                        box-shadow: 0 0 0 2px rgba(0, 122, 255, 0.5);
                    }
                    .field.invalid {
                        border-color: #ef4444;
                    }
                    .field.invalid:focus {
                        box-shadow: 0 0 0 2px rgba(239, 68, 68, 0.5);
                    }
                    .field:disabled {
                        opacity: 0.7;
                    }
                    .field-error {
                        margin-top: 0.25rem;
                        font-size: 0.75rem;
                        color: #dc2626;
                    }
                    .submit-button {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: var(--primary);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                        transition: opacity 0.2s;
                    }
                    .submit-button:hover {
                        opacity: 0.9;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        animation: spin 1s linear infinite;
                    }
                    .banner {
                        margin-top: 1rem;
                        padding: 0.75rem;
                        border-radius: 6px;
                        text-align: center;
                        font-size: 0.875rem;
                    }
                    .banner.success {
                        background: #dcfce7;
                        color: #166534;
                    }
                    .banner.error {
                        background: #fee2e2;
                        color: #991b1b;
                    }
                    html.dark .banner.success {
                        background: #14532d;
                        color: #bbf7d0;
                    }
                    html.dark .banner.error {
                        background: #7f1d1d;
                        color: #fecaca;
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title" ref={title}>{"Get a Free Quote"}</h2>
                <p class="section-lead narrow" ref={text}>
                    {"Ready to transform your roof? Fill out the form below, and we'll get back to you shortly."}
                </p>
                <div class="card contact-box" ref={form_box}>
                    <form class="contact-form" {onsubmit} novalidate=true>
                        <div>
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Your Full Name"
                                class={field_classes(errors.name)}
                                aria-invalid={aria_invalid(errors.name)}
                                value={draft.name.clone()}
                                oninput={on_name}
                                disabled={locked}
                            />
                            { field_error(errors.name) }
                        </div>

                        <div>
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="your.email@example.com"
                                class={field_classes(errors.email)}
                                aria-invalid={aria_invalid(errors.email)}
                                value={draft.email.clone()}
                                oninput={on_email}
                                disabled={locked}
                            />
                            { field_error(errors.email) }
                        </div>

                        <div>
                            <label for="phone">{"Phone "}<span>{"(Optional)"}</span></label>
                            <input
                                id="phone"
                                type="tel"
                                placeholder="(123) 456-7890"
                                class={field_classes(None)}
                                aria-invalid="false"
                                value={draft.phone.clone()}
                                oninput={on_phone}
                                disabled={locked}
                            />
                        </div>

                        <div>
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                rows="5"
                                placeholder="Tell us about your roofing needs..."
                                class={field_classes(errors.message)}
                                aria-invalid={aria_invalid(errors.message)}
                                value={draft.message.clone()}
                                oninput={on_message}
                                disabled={locked}
                            />
                            { field_error(errors.message) }
                        </div>

                        <button type="submit" class="submit-button" disabled={locked}>
                            if status == SubmissionStatus::Submitting {
                                <svg class="spinner" fill="none" viewBox="0 0 24 24">
                                    <circle opacity="0.25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                    <path opacity="0.75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                                </svg>
                                {"Sending..."}
                            } else {
                                {"Send Message"}
                            }
                        </button>

                        if let Some(notice) = notice {
                            <div class={banner_class} role="status">{notice}</div>
                        }
                    </form>
                </div>
            </div>
        </section>
    }
}
