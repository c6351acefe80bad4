use yew::prelude::*;

use crate::components::nav::NavButton;
use crate::config;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About "}{config::SITE_NAME}</h1>
                <p>
                    {"SkillMentorX started as a small study group and grew into a community of students, career switchers and working engineers helping each other level up."}
                </p>
            </section>

            <section class="focus-grid">
                <div class="focus-item">
                    <h3>{"Our Mission"}</h3>
                    <p>{"Make quality mentorship accessible to anyone willing to put in the work."}</p>
                </div>
                <div class="focus-item">
                    <h3>{"How We Teach"}</h3>
                    <p>{"Short lessons, long practice. Mentors review your work and push you to the next step."}</p>
                </div>
                <div class="focus-item">
                    <h3>{"Who It's For"}</h3>
                    <p>{"Beginners finding their footing and professionals sharpening a new skill."}</p>
                </div>
                <div class="focus-item">
                    <h3>{"Founder"}</h3>
                    <p>{"Led by "}{config::OWNER_NAME}{", who has mentored hundreds of learners into their first tech roles."}</p>
                </div>
            </section>

            <section class="page-cta">
                <NavButton target="community" class="btn btn--outline">{"Meet the Community"}</NavButton>
            </section>

            <style>
                {r#"
                .page-hero {
                    text-align: center;
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 2rem;
                }
                .page-hero p {
                    color: var(--color-muted);
                    line-height: 1.6;
                }
                .focus-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .page-cta {
                    text-align: center;
                    padding: 3rem 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
