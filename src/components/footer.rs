use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{COMPANY, NAV_LINKS, SOCIAL_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    // newsletter is UI only
    let on_subscribe = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #0b1a33;
                        color: #e5e7eb;
                        padding: 6rem 0 2rem;
                        margin-top: 4rem;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                    }
                    .footer-logo {
                        display: inline-block;
                        height: 2.5rem;
                        width: 10rem;
                        padding: 0.25rem;
                        margin-bottom: 1rem;
                        border-radius: 6px;
                        background: var(--primary);
                    }
                    .footer-logo img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .site-footer h4 {
                        color: #fff;
                        font-size: 1.1rem;
                        margin-bottom: 1rem;
                    }
                    .site-footer p, .site-footer li a {
                        color: #cbd5e1;
                        font-size: 0.9rem;
                        text-decoration: none;
                    }
                    .site-footer li {
                        list-style: none;
                        margin-bottom: 0.5rem;
                    }
                    .site-footer li a:hover, .footer-socials a:hover {
                        color: var(--primary);
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .footer-socials a {
                        color: #94a3b8;
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                    .newsletter {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .newsletter input {
                        flex-grow: 1;
                        padding: 0.5rem;
                        border-radius: 6px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(31, 41, 55, 0.5);
                        color: #fff;
                    }
                    .newsletter button {
                        background: #0a84ff;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 0.5rem 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .newsletter-note {
                        font-size: 0.75rem !important;
                        color: #6b7280 !important;
                        margin-top: 0.5rem;
                    }
                    .footer-bottom {
                        text-align: center;
                        font-size: 0.85rem;
                        color: #94a3b8;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .footer-socials {
                            justify-content: center;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src={config::asset("/assets/logo.png")} alt={format!("{} Logo", COMPANY)} />
                    </Link<Route>>
                    <p>{"Providing premium roofing solutions with quality and integrity."}</p>
                    <div class="footer-socials">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.url} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                {link.glyph}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li><a href={link.href}>{link.label}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Stay Updated"}</h4>
                    <p>{"Sign up for occasional news and special offers."}</p>
                    <form class="newsletter" onsubmit={on_subscribe}>
                        <input type="email" placeholder="Enter your email" required=true aria-label="Email for newsletter" />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                    <p class="newsletter-note">{"(UI only - no backend integration)"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All Rights Reserved.", year, COMPANY)}
            </div>
        </footer>
    }
}
