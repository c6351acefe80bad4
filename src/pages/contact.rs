use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact"}</h1>
                <p>{"Send a message and it opens straight in WhatsApp. We usually reply within a day."}</p>
            </section>

            <section class="contact-layout">
                <div class="card contact-info">
                    <h3>{"Reach us directly"}</h3>
                    <p>{"Prefer chatting right away? Message "}{config::OWNER_NAME}{" on WhatsApp."}</p>
                    <a href={config::messaging_url()} target="_blank" rel="noopener noreferrer" class="btn btn--outline">
                        <i class="fab fa-whatsapp"></i>{"Open WhatsApp"}
                    </a>
                </div>
                <div class="card">
                    <ContactForm />
                </div>
            </section>

            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 1.5rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem 4rem;
                }
                @media (max-width: 768px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
