use yew::prelude::*;

use crate::components::nav::NavButton;

#[derive(Properties, PartialEq)]
struct PlanProps {
    name: &'static str,
    price: &'static str,
    #[prop_or_default]
    featured: bool,
    features: Vec<&'static str>,
}

#[function_component(Plan)]
fn plan(props: &PlanProps) -> Html {
    html! {
        <div class={classes!("card", "plan-card", props.featured.then(|| "featured"))}>
            <h3>{props.name}</h3>
            <p class="plan-price">{props.price}</p>
            <ul class="plan-features">
                { for props.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <NavButton target="contact" class={if props.featured { "btn btn--primary" } else { "btn btn--outline" }}>
                {"Choose "}{props.name}
            </NavButton>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1>{"Pricing"}</h1>
                <p>{"Start free. Upgrade when you want a mentor working with you directly."}</p>
            </section>

            <section class="plan-grid">
                <Plan
                    name="Community"
                    price="Free"
                    features={vec!["WhatsApp community access", "Weekly group sessions", "Shared resource library"]}
                />
                <Plan
                    name="Mentored"
                    price="₹1,999 / month"
                    featured={true}
                    features={vec!["Everything in Community", "Bi-weekly 1:1 mentor calls", "Project code reviews"]}
                />
                <Plan
                    name="Career"
                    price="₹4,999 / month"
                    features={vec!["Everything in Mentored", "Mock interviews", "Resume and portfolio review"]}
                />
            </section>

            <style>
                {r#"
                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem 4rem;
                }
                .plan-card.featured {
                    border: 2px solid var(--color-primary);
                }
                .plan-price {
                    font-size: 1.6rem;
                    font-weight: 700;
                    color: var(--color-primary);
                }
                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 1.5rem;
                    line-height: 1.9;
                }
                "#}
            </style>
        </div>
    }
}
