use wasm_bindgen::JsValue;
use web_sys::js_sys::Object;
use web_sys::{window, FormData, HtmlFormElement};
use yew::UseStateHandle;

use crate::contact::{BridgeHost, ContactSubmission};
use crate::router::{RouteHost, SectionRouter, SITE_SECTIONS};

/// Route side effects against the live window. Closing the overlay means
/// collapsing the mobile menu, which is component state.
#[derive(Clone)]
pub struct BrowserRouteHost {
    menu_open: UseStateHandle<bool>,
}

impl BrowserRouteHost {
    pub fn new(menu_open: UseStateHandle<bool>) -> Self {
        Self { menu_open }
    }
}

impl RouteHost for BrowserRouteHost {
    fn fragment(&self) -> Option<String> {
        window()?.location().hash().ok()
    }

    fn replace_fragment(&self, key: &str) {
        if let Some(window) = window() {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(
                    &JsValue::NULL,
                    "",
                    Some(&format!("#{}", key)),
                );
            }
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn close_overlay(&self) {
        self.menu_open.set(false);
    }
}

pub fn site_router(menu_open: &UseStateHandle<bool>) -> SectionRouter<BrowserRouteHost> {
    SectionRouter::new(SITE_SECTIONS, BrowserRouteHost::new(menu_open.clone()))
}

/// Contact form side effects. The status message is rendered by the form
/// component from `status`.
#[derive(Clone)]
pub struct BrowserBridge {
    status: UseStateHandle<Option<String>>,
    form: HtmlFormElement,
}

impl BrowserBridge {
    pub fn new(status: UseStateHandle<Option<String>>, form: HtmlFormElement) -> Self {
        Self { status, form }
    }
}

impl BridgeHost for BrowserBridge {
    fn show_status(&self, text: &str) {
        self.status.set(Some(text.to_string()));
    }

    fn clear_status(&self) {
        self.status.set(None);
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn open_external(&self, url: &str) {
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
}

/// Reads the form's current field values. Missing or unreadable fields come
/// back as empty strings.
pub fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    match Object::from_entries(&data) {
        Ok(entries) => serde_wasm_bindgen::from_value(entries.into()).unwrap_or_default(),
        Err(_) => ContactSubmission::default(),
    }
}
