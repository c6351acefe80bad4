use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-brand">{config::COMMUNITY_NAME}</p>
                <p class="footer-tagline">{"Learn together. Grow together."}</p>
                <a href={config::messaging_url()} target="_blank" rel="noopener noreferrer" class="footer-whatsapp">
                    <i class="fab fa-whatsapp"></i>{" Chat with us on WhatsApp"}
                </a>
                <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--color-text);
                    color: rgba(255, 255, 255, 0.85);
                    padding: 3rem 1.5rem;
                    text-align: center;
                }
                .footer-brand {
                    font-weight: 700;
                    font-size: 1.2rem;
                    color: white;
                }
                .footer-whatsapp {
                    color: #25d366;
                    text-decoration: none;
                }
                .footer-copy {
                    margin-top: 1.5rem;
                    font-size: 0.85rem;
                    opacity: 0.7;
                }
                "#}
            </style>
        </footer>
    }
}
