use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::config;

pub const FADE_IN_TARGETS: &str = ".highlight-card, .focus-item, .card";
const MESSAGING_LINK: &str = "a[href*=\"wa.me\"]";

/// Placement of a click ripple inside its button, in pixels relative to the
/// button's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// A square covering the button's longer side, centered on the click.
    pub fn centered_on(
        width: f64,
        height: f64,
        rect_left: f64,
        rect_top: f64,
        click_x: f64,
        click_y: f64,
    ) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: click_x - rect_left - size / 2.0,
            top: click_y - rect_top - size / 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "width: {}px; height: {}px; left: {}px; top: {}px;",
            self.size, self.size, self.left, self.top
        )
    }
}

/// Fades matching elements in the first time they scroll into view.
#[hook]
pub fn use_fade_in(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            let installed = observe_fade_in(selector);
            move || {
                if let Some((observer, _callback)) = installed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_fade_in(selector: &str) -> Option<(IntersectionObserver, EntriesCallback)> {
    let document = window()?.document()?;

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    let style = target.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let targets = document.query_selector_all(selector).ok()?;
    for i in 0..targets.length() {
        let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = el.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(&el);
    }
    debug!("Fade-in observing {} elements", targets.length());

    Some((observer, callback))
}

/// Ripple and short loading state for every `.btn` on the page. WhatsApp
/// links are left alone so the browser can open them.
#[hook]
pub fn use_button_feedback() {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(button)) = target.closest(".btn") else {
            return;
        };
        // closest() also matches the button itself
        if matches!(button.closest(MESSAGING_LINK), Ok(Some(_))) {
            return;
        }

        spawn_ripple(&button, &e);
        if !button.has_attribute("href") {
            show_loading(&button);
        }
    });
}

fn spawn_ripple(button: &Element, e: &MouseEvent) {
    let Some(document) = button.owner_document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };

    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::centered_on(
        rect.width(),
        rect.height(),
        rect.left(),
        rect.top(),
        e.client_x() as f64,
        e.client_y() as f64,
    );
    ripple.set_class_name("ripple");
    let _ = ripple.set_attribute("style", &geometry.css());

    if let Some(button) = button.dyn_ref::<HtmlElement>() {
        let style = button.style();
        let _ = style.set_property("position", "relative");
        let _ = style.set_property("overflow", "hidden");
    }
    if button.append_child(&ripple).is_err() {
        return;
    }

    Timeout::new(config::RIPPLE_DURATION_MS, move || ripple.remove()).forget();
}

fn show_loading(button: &Element) {
    let classes = button.class_list();
    if classes.add_1("loading").is_err() {
        return;
    }
    Timeout::new(config::BUTTON_LOADING_MS, move || {
        let _ = classes.remove_1("loading");
    })
    .forget();
}
