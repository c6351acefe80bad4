use yew::prelude::*;

use crate::config;

#[function_component(Community)]
pub fn community() -> Html {
    html! {
        <div class="community-page">
            <section class="page-hero">
                <h1>{"Community"}</h1>
                <p>{"Most of the learning happens between sessions. This is where."}</p>
            </section>

            <section class="focus-grid">
                <div class="card">
                    <h3>{"📅 Weekly Meetups"}</h3>
                    <p>{"Live walkthroughs, Q&A with mentors and demo days for finished projects."}</p>
                </div>
                <div class="card">
                    <h3>{"👥 Study Circles"}</h3>
                    <p>{"Small groups working through the same track keep each other accountable."}</p>
                </div>
                <div class="card">
                    <h3>{"💬 WhatsApp Group"}</h3>
                    <p>{"Daily questions, job leads and the occasional meme."}</p>
                </div>
            </section>

            <section class="page-cta">
                <a href={config::messaging_url()} target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                    <i class="fab fa-whatsapp"></i>{"Join the Community"}
                </a>
            </section>
        </div>
    }
}
