use yew::prelude::*;
use yew_hooks::prelude::{use_event_with_window, use_mount};
use log::{debug, info};
use web_sys::Event;

mod browser;
mod config;
mod contact;
mod effects;
mod router;
mod schedule;
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod logo;
    pub mod nav;
    pub mod page_section;
}
mod pages {
    pub mod about;
    pub mod community;
    pub mod contact;
    pub mod home;
    pub mod pricing;
    pub mod programs;
}

use components::{footer::Footer, nav::Nav, page_section::PageSection};
use effects::{use_button_feedback, use_fade_in, FADE_IN_TARGETS};
use pages::{
    about::About,
    community::Community,
    contact::Contact,
    home::Home,
    pricing::Pricing,
    programs::Programs,
};
use router::{RouteState, SITE_SECTIONS};
use schedule::TimeoutScheduler;

/// Shared with every component that shows or changes the active section.
#[derive(Clone, PartialEq)]
pub struct SiteRoute {
    pub state: RouteState,
    pub navigate: Callback<String>,
}

impl SiteRoute {
    pub fn is_active(&self, key: &str) -> bool {
        self.state.is_active(key)
    }
}

#[function_component]
fn App() -> Html {
    let route = use_state_eq(|| RouteState::new(SITE_SECTIONS.default_section()));
    let menu_open = use_state_eq(|| false);

    let navigate = {
        let route = route.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |key: String| {
            let router = browser::site_router(&menu_open);
            let mut state = *route;
            if router.navigate(&mut state, &key) {
                route.set(state);
            }
        })
    };

    // Startup and back/forward both land on whatever the fragment names
    let restore = {
        let route = route.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            let router = browser::site_router(&menu_open);
            let mut state = *route;
            router.restore(&mut state);
            route.set(state);
        })
    };

    {
        let route = route.clone();
        let menu_open = menu_open.clone();
        use_mount(move || {
            let router = browser::site_router(&menu_open);
            debug!("{}", router.summary(&route));
            // Give the page a moment to settle before reading the fragment
            router.schedule_restore(&TimeoutScheduler, move |state| route.set(state));
        });
    }

    {
        let restore = restore.clone();
        use_event_with_window("popstate", move |_: Event| {
            restore.emit(());
        });
    }

    use_fade_in(FADE_IN_TARGETS);
    use_button_feedback();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
            debug!("Mobile menu toggled");
        })
    };

    let site_route = SiteRoute {
        state: *route,
        navigate,
    };

    html! {
        <ContextProvider<SiteRoute> context={site_route}>
            <Nav menu_open={*menu_open} on_toggle_menu={toggle_menu} />
            <main class="site-main">
                <PageSection id="home"><Home /></PageSection>
                <PageSection id="about"><About /></PageSection>
                <PageSection id="programs"><Programs /></PageSection>
                <PageSection id="pricing"><Pricing /></PageSection>
                <PageSection id="community"><Community /></PageSection>
                <PageSection id="contact"><Contact /></PageSection>
            </main>
            <Footer />
            <style>
                {r#"
                :root {
                    --color-primary: #21808d;
                    --color-primary-hover: #1d7480;
                    --color-surface: #fcfcf9;
                    --color-text: #13343b;
                    --color-muted: #626c71;
                    --radius-lg: 12px;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: var(--color-surface);
                    color: var(--color-text);
                }
                .site-main {
                    padding-top: 72px;
                    min-height: 100vh;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    border: none;
                    font-size: 1rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: background 0.2s ease, opacity 0.2s ease;
                }
                .btn--primary {
                    background: var(--color-primary);
                    color: white;
                }
                .btn--primary:hover {
                    background: var(--color-primary-hover);
                }
                .btn--outline {
                    background: transparent;
                    color: var(--color-primary);
                    border: 1px solid var(--color-primary);
                }
                .btn.loading {
                    opacity: 0.7;
                    pointer-events: none;
                }
                .ripple {
                    position: absolute;
                    background: rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    transform: scale(0);
                    animation: ripple 0.6s ease-out;
                    pointer-events: none;
                }
                @keyframes ripple {
                    to {
                        transform: scale(2);
                        opacity: 0;
                    }
                }
                .card, .highlight-card, .focus-item {
                    background: white;
                    border-radius: var(--radius-lg);
                    padding: 1.5rem;
                    box-shadow: 0 4px 16px rgba(19, 52, 59, 0.08);
                }
                "#}
            </style>
        </ContextProvider<SiteRoute>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Initializing {} app...", config::COMMUNITY_NAME);
    yew::Renderer::<App>::new().render();
}
