use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod components {
    pub mod footer;
    pub mod header;
    pub mod portfolio_modal;
    pub mod theme_toggle;
}
mod contact {
    pub mod controller;
    pub mod inquiry;
    pub mod transport;
}
mod pages {
    pub mod home;
}
mod reveal {
    pub mod hook;
    pub mod presets;
    pub mod timeline;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod partners;
    pub mod portfolio;
    pub mod services;
    pub mod testimonials;
    pub mod why_choose_us;
}
mod theme {
    pub mod choice;
    pub mod provider;
}

use components::{footer::Footer, header::Header};
use pages::home::Home;
use theme::provider::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(GlobalStyles)]
fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --bg: #f5f5f7;
                --card: #ffffff;
                --text: #1d1d1f;
                --muted: #4b5563;
                --border: #d2d2d7;
                --primary: #007aff;
                --primary-soft: rgba(0, 122, 255, 0.3);
                --glass: rgba(255, 255, 255, 0.8);
            }
            html.dark {
                --bg: #000000;
                --card: #1c1c1e;
                --text: #f5f5f7;
                --muted: #9ca3af;
                --border: #38383a;
                --primary: #0a84ff;
                --primary-soft: rgba(10, 132, 255, 0.3);
                --glass: rgba(17, 24, 39, 0.8);
            }
            * {
                box-sizing: border-box;
                margin: 0;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                background: var(--bg);
                color: var(--text);
                transition: background-color 0.3s, color 0.3s;
            }
            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1rem;
            }
            .section {
                padding: 6rem 0;
                background: var(--bg);
                overflow: hidden;
            }
            .section-card {
                background: var(--card);
            }
            .section-title {
                font-size: clamp(1.875rem, 4vw, 2.25rem);
                font-weight: 700;
                text-align: center;
                margin-bottom: 1rem;
            }
            .section-title.spaced {
                margin-bottom: 3rem;
            }
            .section-title.left {
                text-align: left;
                margin-bottom: 1.5rem;
            }
            .section-lead {
                text-align: center;
                font-size: 1.125rem;
                color: var(--muted);
                max-width: 42rem;
                margin: 0 auto 3rem;
            }
            .section-lead.narrow {
                max-width: 36rem;
            }
            .body-copy p {
                color: var(--muted);
                margin-bottom: 1rem;
                line-height: 1.6;
            }
            .grid {
                display: grid;
                gap: 2rem;
            }
            .grid-3 {
                grid-template-columns: repeat(3, 1fr);
            }
            .grid-4 {
                grid-template-columns: repeat(4, 1fr);
            }
            .grid.centered {
                justify-items: center;
            }
            .card {
                background: var(--card);
                border: 1px solid var(--border);
                border-radius: 12px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
            }
            .section-card .card {
                background: var(--bg);
            }
            .hover-lift {
                transition: box-shadow 0.3s ease, translate 0.3s ease, scale 0.3s ease;
            }
            .hover-lift:hover {
                scale: 1.03;
                box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
            }
            .muted {
                color: var(--muted);
            }
            .small {
                font-size: 0.875rem;
            }
            .strong {
                font-weight: 600;
            }
            .cta-button {
                display: inline-block;
                background: var(--primary);
                color: #ffffff;
                font-size: 1.125rem;
                font-weight: 600;
                padding: 0.75rem 2rem;
                border-radius: 8px;
                text-decoration: none;
                box-shadow: 0 8px 16px rgba(0, 0, 0, 0.25);
                transition: opacity 0.3s, scale 0.3s;
            }
            .cta-button:hover {
                opacity: 0.9;
                scale: 1.05;
            }
            @media (max-width: 1024px) {
                .grid-3 {
                    grid-template-columns: repeat(2, 1fr);
                }
                .grid-4 {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (max-width: 640px) {
                .grid-3, .grid-4 {
                    grid-template-columns: 1fr;
                }
            }
        "#)} />
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <GlobalStyles />
            <BrowserRouter basename={config::router_basename()}>
                <Header />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
