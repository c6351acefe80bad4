use yew::prelude::*;

use crate::components::logo::Logo;
use crate::components::nav::NavButton;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-logo">
                    <Logo class="logo-img-large" />
                </div>
                <h1>{"Welcome to "}{config::COMMUNITY_NAME}</h1>
                <p class="hero-subtitle">
                    {"A peer-driven community where learners and mentors meet to build real skills, ship real projects and grow real careers."}
                </p>
                <div class="hero-actions">
                    <NavButton target="programs">{"Explore Programs"}</NavButton>
                    <a href={config::messaging_url()} target="_blank" rel="noopener noreferrer" class="btn btn--outline">
                        <i class="fab fa-whatsapp"></i>{"Join on WhatsApp"}
                    </a>
                </div>
            </header>

            <section class="highlights">
                <div class="highlight-card">
                    <h3>{"🎯 Guided Mentorship"}</h3>
                    <p>{"One-on-one sessions with mentors who have done the work you want to do."}</p>
                </div>
                <div class="highlight-card">
                    <h3>{"🛠️ Project-First Learning"}</h3>
                    <p>{"Every track ends with something you built and can show."}</p>
                </div>
                <div class="highlight-card">
                    <h3>{"🤝 Active Community"}</h3>
                    <p>{"Weekly meetups, code reviews and study circles with people on the same path."}</p>
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Ready to start?"}</h2>
                <p>{"Tell us where you are and where you want to go. We will point you to the right track."}</p>
                <NavButton target="contact">{"Get in Touch"}</NavButton>
            </section>

            <style>
                {r#"
                .hero {
                    text-align: center;
                    padding: 5rem 1.5rem 3rem;
                    max-width: 800px;
                    margin: 0 auto;
                }
                .hero-logo {
                    width: 120px;
                    height: 120px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    overflow: hidden;
                    font-size: 3rem;
                }
                .logo-img-large {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero h1 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    color: var(--color-muted);
                    font-size: 1.15rem;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }
                .highlights {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                }
                .home-cta {
                    text-align: center;
                    padding: 4rem 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
