use yew::prelude::*;

use crate::theme::choice::ThemeChoice;
use crate::theme::provider::ThemeContext;

/// Moon while light is explicitly chosen, sun otherwise.
fn toggle_icon(choice: ThemeChoice) -> &'static str {
    if choice == ThemeChoice::Light { "🌙" } else { "☀️" }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_context::<ThemeContext>();
    let Some(theme) = theme else {
        // outside the provider there is nothing to toggle
        return html! { <div class="theme-toggle-placeholder"></div> };
    };

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.toggle())
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label="Toggle theme">
            <span>{toggle_icon(theme.choice)}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_the_next_toggle() {
        assert_eq!(toggle_icon(ThemeChoice::Light), "🌙");
        assert_eq!(toggle_icon(ThemeChoice::Dark), "☀️");
        assert_eq!(toggle_icon(ThemeChoice::System), "☀️");
    }
}
