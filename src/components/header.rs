use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::content::{COMPANY, NAV_LINKS, SOCIAL_LINKS};
use crate::Route;

const SCROLLED_AFTER_PX: f64 = 10.0;

fn social_icons(class: &'static str, onclick: Option<Callback<MouseEvent>>) -> Html {
    html! {
        <div class={class}>
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    href={link.url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                    class="social-link"
                    onclick={onclick.clone()}
                >
                    {link.glyph}
                </a>
            }) }
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        color: var(--text);
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: var(--glass);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
                    }
                    .site-nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem 1rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .site-logo {
                        display: block;
                        height: 3rem;
                        width: 12rem;
                        padding: 0.25rem;
                        border-radius: 6px;
                        background: var(--primary);
                    }
                    .site-logo img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .desktop-nav a, .mobile-menu a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .desktop-nav a:hover, .mobile-menu a:hover {
                        color: var(--primary);
                    }
                    .nav-socials {
                        display: flex;
                        gap: 0.75rem;
                        padding-left: 1rem;
                        border-left: 1px solid var(--border);
                    }
                    .social-link {
                        color: var(--muted) !important;
                        font-weight: 600;
                    }
                    .theme-toggle {
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                        border-radius: 6px;
                    }
                    .theme-toggle:hover {
                        background: var(--border);
                    }
                    .theme-toggle-placeholder {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mobile-controls {
                        display: none;
                        align-items: center;
                    }
                    .burger-menu {
                        margin-left: 1rem;
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: var(--glass);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 1rem;
                        gap: 0.5rem;
                    }
                    .mobile-menu .nav-socials {
                        border-left: none;
                        border-top: 1px solid var(--border);
                        padding: 1rem 0 0;
                        margin-top: 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav {
                            display: none;
                        }
                        .mobile-controls {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <nav class="site-nav">
                <Link<Route> to={Route::Home} classes="site-logo">
                    <img src={config::asset("/assets/logo.png")} alt={format!("{} Logo", COMPANY)} />
                </Link<Route>>

                <div class="desktop-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href}>{link.label}</a>
                    }) }
                    { social_icons("nav-socials", None) }
                    <ThemeToggle />
                </div>

                <div class="mobile-controls">
                    <ThemeToggle />
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label="Toggle mobile menu"
                        aria-expanded={(*menu_open).to_string()}
                    >
                        <svg width="24" height="24" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d={if *menu_open { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16m-7 6h7" }}
                            />
                        </svg>
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                    }) }
                    { social_icons("nav-socials", Some(close_menu.clone())) }
                </div>
            }
        </header>
    }
}
