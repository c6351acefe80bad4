use yew::prelude::*;
use web_sys::HtmlFormElement;

use crate::browser::{read_submission, BrowserBridge};
use crate::contact::{FormBridge, MessagingTarget};
use crate::schedule::TimeoutScheduler;

/// Contact form that hands the message over to WhatsApp instead of posting
/// it anywhere.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let status = use_state(|| None::<String>);

    let onsubmit = {
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            e.stop_propagation();
            let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
                return;
            };
            let submission = read_submission(&form);
            let bridge = FormBridge::new(MessagingTarget::site(), TimeoutScheduler);
            bridge.submit(BrowserBridge::new(status.clone(), form), &submission);
        })
    };

    html! {
        <div class="contact-form-wrapper">
            {
                if let Some(text) = &*status {
                    html! {
                        <div class="success-message show">
                            <i class="fas fa-check-circle"></i>
                            {" "}{text.clone()}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form id="contact-form" class="contact-form" {onsubmit}>
                <div class="form-group">
                    <label for="contact-name" class="form-label">{"Name"}</label>
                    <input id="contact-name" name="name" type="text" class="form-control" placeholder="Your name" />
                </div>
                <div class="form-group">
                    <label for="contact-email" class="form-label">{"Email"}</label>
                    <input id="contact-email" name="email" type="email" class="form-control" placeholder="you@example.com" />
                </div>
                <div class="form-group">
                    <label for="contact-subject" class="form-label">{"Subject"}</label>
                    <input id="contact-subject" name="subject" type="text" class="form-control" placeholder="What is this about?" />
                </div>
                <div class="form-group">
                    <label for="contact-message" class="form-label">{"Message"}</label>
                    <textarea id="contact-message" name="message" rows="5" class="form-control" placeholder="Tell us a little more"></textarea>
                </div>
                <button type="submit" class="btn btn--primary btn--full-width">
                    <i class="fab fa-whatsapp"></i>
                    {"Send via WhatsApp"}
                </button>
            </form>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }
                .form-label {
                    font-weight: 500;
                    font-size: 0.9rem;
                }
                .form-control {
                    padding: 0.7rem 0.9rem;
                    border: 1px solid rgba(19, 52, 59, 0.2);
                    border-radius: 8px;
                    font: inherit;
                }
                .form-control:focus {
                    outline: none;
                    border-color: var(--color-primary);
                }
                .btn--full-width {
                    width: 100%;
                    justify-content: center;
                }
                .success-message {
                    display: none;
                    padding: 0.8rem 1rem;
                    margin-bottom: 1rem;
                    border-radius: 8px;
                    background: rgba(33, 128, 141, 0.12);
                    color: var(--color-primary);
                    font-weight: 500;
                }
                .success-message.show {
                    display: block;
                }
                "#}
            </style>
        </div>
    }
}
