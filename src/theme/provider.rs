use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList};
use yew::prelude::*;

use super::choice::{Appearance, ThemeChoice};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub choice: ThemeChoice,
    pub appearance: Appearance,
    set_choice: Callback<ThemeChoice>,
}

impl ThemeContext {
    pub fn set(&self, choice: ThemeChoice) {
        self.set_choice.emit(choice);
    }

    pub fn toggle(&self) {
        self.set(self.choice.toggled());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Nothing is rendered until the first interactive frame.
    Uninitialised,
    Ready,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn dark_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_QUERY).ok().flatten()
}

fn apply_appearance(appearance: Appearance) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", appearance.is_dark());
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let lifecycle = use_state(|| Lifecycle::Uninitialised);
    let choice = use_state(ThemeChoice::default);
    let prefers_dark = use_state(|| false);

    {
        let lifecycle = lifecycle.clone();
        let prefers_dark = prefers_dark.clone();
        use_effect_with_deps(
            move |_| {
                let query = dark_query();
                let mut listener = None;
                if let Some(query) = query.clone() {
                    prefers_dark.set(query.matches());
                    let watched = query.clone();
                    let prefers_dark = prefers_dark.clone();
                    let on_change = Closure::wrap(Box::new(move || {
                        prefers_dark.set(watched.matches());
                    }) as Box<dyn FnMut()>);
                    let _ = query.add_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    );
                    listener = Some(on_change);
                }
                lifecycle.set(Lifecycle::Ready);

                move || {
                    if let (Some(query), Some(on_change)) = (query, listener) {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let appearance = choice.resolve(*prefers_dark);
    {
        let ready = *lifecycle == Lifecycle::Ready;
        use_effect_with_deps(
            move |(appearance, ready)| {
                if *ready {
                    apply_appearance(*appearance);
                }
                || ()
            },
            (appearance, ready),
        );
    }

    if *lifecycle == Lifecycle::Uninitialised {
        return html! {};
    }

    let set_choice = {
        let choice = choice.clone();
        Callback::from(move |next: ThemeChoice| {
            info!("Theme set to {:?}", next);
            choice.set(next);
        })
    };
    let context = ThemeContext { choice: *choice, appearance, set_choice };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}
