use yew::prelude::*;

use crate::components::nav::NavButton;

struct Program {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    duration: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        icon: "💻",
        title: "Web Development",
        summary: "HTML, CSS and JavaScript up to a deployed full-stack project.",
        duration: "12 weeks",
    },
    Program {
        icon: "📊",
        title: "Data Analytics",
        summary: "SQL, spreadsheets and dashboards built on real datasets.",
        duration: "10 weeks",
    },
    Program {
        icon: "🧠",
        title: "Interview Prep",
        summary: "Problem solving drills, mock interviews and resume reviews.",
        duration: "6 weeks",
    },
    Program {
        icon: "🚀",
        title: "Career Launch",
        summary: "Portfolio polish, networking and a mentor in your corner during the job hunt.",
        duration: "Ongoing",
    },
];

#[function_component(Programs)]
pub fn programs() -> Html {
    html! {
        <div class="programs-page">
            <section class="page-hero">
                <h1>{"Programs"}</h1>
                <p>{"Structured tracks with a mentor assigned from day one."}</p>
            </section>

            <section class="program-grid">
                {
                    PROGRAMS.iter().map(|program| html! {
                        <div class="card program-card">
                            <div class="program-icon">{program.icon}</div>
                            <h3>{program.title}</h3>
                            <p>{program.summary}</p>
                            <span class="program-duration">{program.duration}</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="page-cta">
                <NavButton target="pricing">{"See Pricing"}</NavButton>
            </section>

            <style>
                {r#"
                .program-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .program-icon {
                    font-size: 2rem;
                }
                .program-duration {
                    display: inline-block;
                    margin-top: 0.5rem;
                    font-size: 0.85rem;
                    color: var(--color-primary);
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
