use yew::prelude::*;
use log::info;

use crate::components::logo::Logo;
use crate::config;
use crate::router::SITE_SECTIONS;
use crate::SiteRoute;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu } = props;
    let route = use_context::<SiteRoute>();
    let Some(route) = route else {
        return html! {};
    };

    let go_home = {
        let navigate = route.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit("home".to_string());
        })
    };

    let sections = SITE_SECTIONS;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_toggle_menu.emit(e);
        })
    };

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-brand" onclick={go_home}>
                    <div class="logo-frame">
                        <Logo />
                    </div>
                    <span class="brand-name">{config::SITE_NAME}</span>
                </a>

                <ul id="nav-menu" class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    {
                        sections.indicators(&route.state).map(|(section, selected)| {
                            let navigate = route.navigate.clone();
                            let key = section.key;
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                e.stop_propagation();
                                info!("Nav link clicked: {}", key);
                                navigate.emit(key.to_string());
                            });
                            html! {
                                <li class="nav-item">
                                    <a
                                        href={format!("#{}", key)}
                                        class={classes!("nav-link", selected.then(|| "active"))}
                                        data-page={key}
                                        {onclick}
                                    >
                                        {section.label}
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>

                <button
                    id="mobile-menu"
                    class={classes!("nav-toggle", menu_open.then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(252, 252, 249, 0.95);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(19, 52, 59, 0.08);
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 72px;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: var(--color-text);
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .logo-frame {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    overflow: hidden;
                }
                .logo-img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: var(--color-muted);
                    text-decoration: none;
                    font-weight: 500;
                    padding: 0.25rem 0;
                    border-bottom: 2px solid transparent;
                }
                .nav-link:hover, .nav-link.active {
                    color: var(--color-primary);
                    border-bottom-color: var(--color-primary);
                }
                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-toggle .bar {
                    width: 24px;
                    height: 2px;
                    background: var(--color-text);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .nav-toggle.active .bar:nth-child(1) {
                    transform: translateY(6px) rotate(45deg);
                }
                .nav-toggle.active .bar:nth-child(2) {
                    opacity: 0;
                }
                .nav-toggle.active .bar:nth-child(3) {
                    transform: translateY(-6px) rotate(-45deg);
                }
                @media (max-width: 768px) {
                    .nav-toggle {
                        display: flex;
                    }
                    .nav-menu {
                        position: fixed;
                        top: 72px;
                        left: -100%;
                        width: 100%;
                        flex-direction: column;
                        align-items: center;
                        padding: 2rem 0;
                        background: var(--color-surface);
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active {
                        left: 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavButtonProps {
    pub target: &'static str,
    #[prop_or("btn btn--primary")]
    pub class: &'static str,
    pub children: Children,
}

/// Call-to-action button that switches to another section of the page.
#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    let route = use_context::<SiteRoute>();
    let target = props.target;

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(route) = &route {
            info!("Navigation button clicked: {}", target);
            route.navigate.emit(target.to_string());
        }
    });

    html! {
        <button class={props.class} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
