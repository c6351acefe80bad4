use yew::prelude::*;
use crate::SiteRoute;

#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    pub id: &'static str,
    pub children: Children,
}

/// One exclusive region of the page. Only the active section is displayed.
#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    let active = use_context::<SiteRoute>()
        .map(|route| route.is_active(props.id))
        .unwrap_or(false);

    html! {
        <section id={props.id} class={classes!("page", active.then(|| "active"))}>
            { for props.children.iter() }
            <style>
                {r#"
                .page.active {
                    display: block !important;
                    opacity: 1 !important;
                    visibility: visible !important;
                }
                .page:not(.active) {
                    display: none !important;
                }
                "#}
            </style>
        </section>
    }
}
