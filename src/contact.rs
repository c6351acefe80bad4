use log::info;
use serde::Deserialize;

use crate::config;
use crate::schedule::Scheduler;

/// One contact form submission. Built fresh per submit and dropped once the
/// outbound link is built. Field names follow the rendered form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    #[serde(rename = "email")]
    pub contact: String,
    pub subject: String,
    #[serde(rename = "message")]
    pub body: String,
}

/// Where submissions are handed off to: a messaging deep link plus the
/// names baked into the greeting.
#[derive(Clone, Debug, PartialEq)]
pub struct MessagingTarget {
    pub url: String,
    pub owner: String,
    pub product: String,
}

impl MessagingTarget {
    pub fn site() -> Self {
        Self {
            url: config::messaging_url(),
            owner: config::OWNER_NAME.to_string(),
            product: config::COMMUNITY_NAME.to_string(),
        }
    }

    pub fn compose(&self, submission: &ContactSubmission) -> String {
        format!(
            "Hi {}, I'm {} ({}).\n\nSubject: {}\n\nMessage: {}\n\nI'd like to connect with you regarding {}.",
            self.owner,
            submission.name,
            submission.contact,
            submission.subject,
            submission.body,
            self.product,
        )
    }

    pub fn deep_link(&self, submission: &ContactSubmission) -> String {
        let text = self.compose(submission);
        format!("{}?text={}", self.url, urlencoding::encode(&text))
    }
}

/// The page-side half of a submission: status message, form, new window.
pub trait BridgeHost: Clone + 'static {
    /// Shows `text` right before the form.
    fn show_status(&self, text: &str);
    fn clear_status(&self);
    fn reset_form(&self);
    /// Opens `url` in a new browsing context. A blocked popup is not retried.
    fn open_external(&self, url: &str);
}

pub struct FormBridge<S> {
    target: MessagingTarget,
    scheduler: S,
    delay_ms: u32,
}

impl<S: Scheduler> FormBridge<S> {
    pub fn new(target: MessagingTarget, scheduler: S) -> Self {
        Self {
            target,
            scheduler,
            delay_ms: config::REDIRECT_DELAY_MS,
        }
    }

    #[cfg(test)]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Shows the redirect notice now and opens the deep link once the delay
    /// passes. Every call schedules its own redirect; nothing is queued or
    /// deduplicated. Returns the link that will be opened.
    pub fn submit<H: BridgeHost>(&self, host: H, submission: &ContactSubmission) -> String {
        info!("Contact form submitted");
        let link = self.target.deep_link(submission);
        host.show_status(config::REDIRECT_STATUS);

        let url = link.clone();
        self.scheduler.defer(
            self.delay_ms,
            Box::new(move || {
                host.open_external(&url);
                host.reset_form();
                host.clear_status();
            }),
        );
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::manual::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum PageCall {
        ShowStatus(String),
        ClearStatus,
        ResetForm,
        Open(String),
    }

    #[derive(Clone, Default)]
    struct FakePage {
        calls: Rc<RefCell<Vec<PageCall>>>,
    }

    impl FakePage {
        fn take(&self) -> Vec<PageCall> {
            self.calls.borrow_mut().drain(..).collect()
        }
    }

    impl BridgeHost for FakePage {
        fn show_status(&self, text: &str) {
            self.calls.borrow_mut().push(PageCall::ShowStatus(text.to_string()));
        }

        fn clear_status(&self) {
            self.calls.borrow_mut().push(PageCall::ClearStatus);
        }

        fn reset_form(&self) {
            self.calls.borrow_mut().push(PageCall::ResetForm);
        }

        fn open_external(&self, url: &str) {
            self.calls.borrow_mut().push(PageCall::Open(url.to_string()));
        }
    }

    fn ana() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            contact: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            body: "Test".to_string(),
        }
    }

    fn decoded_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").expect("link has a text parameter");
        urlencoding::decode(encoded).expect("valid percent encoding").into_owned()
    }

    #[test]
    fn deep_link_carries_every_field_in_the_template() {
        let link = MessagingTarget::site().deep_link(&ana());
        assert!(link.starts_with("https://wa.me/917838177359?text="));
        assert_eq!(
            decoded_text(&link),
            "Hi Chetan, I'm Ana (a@x.com).\n\nSubject: Hi\n\nMessage: Test\n\nI'd like to connect with you regarding SkillMentorX Community."
        );
    }

    #[test]
    fn encoded_text_is_url_safe() {
        let submission = ContactSubmission {
            name: "Zoë & co".to_string(),
            contact: "+91 98 ?".to_string(),
            subject: "50% off #1".to_string(),
            body: "line one\nline two".to_string(),
        };
        let link = MessagingTarget::site().deep_link(&submission);
        let (_, encoded) = link.split_once("?text=").unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
        assert!(decoded_text(&link).contains("Message: line one\nline two"));
        assert!(decoded_text(&link).contains("I'm Zoë & co (+91 98 ?)"));
    }

    #[test]
    fn empty_fields_are_accepted_as_is() {
        let text = MessagingTarget::site().compose(&ContactSubmission::default());
        assert!(text.starts_with("Hi Chetan, I'm  ().\n\nSubject: \n\nMessage: \n\n"));
    }

    #[test]
    fn submit_shows_status_then_redirects_after_delay() {
        let scheduler = ManualScheduler::default();
        let bridge = FormBridge::new(MessagingTarget::site(), scheduler.clone());
        let page = FakePage::default();

        let link = bridge.submit(page.clone(), &ana());

        assert_eq!(page.take(), vec![PageCall::ShowStatus("Redirecting to WhatsApp...".to_string())]);
        assert_eq!(scheduler.delays(), vec![1500]);

        scheduler.run_all();
        assert_eq!(
            page.take(),
            vec![PageCall::Open(link), PageCall::ResetForm, PageCall::ClearStatus]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn overlapping_submissions_each_redirect() {
        let scheduler = ManualScheduler::default();
        let bridge = FormBridge::new(MessagingTarget::site(), scheduler.clone()).with_delay(10);
        let page = FakePage::default();

        bridge.submit(page.clone(), &ana());
        bridge.submit(page.clone(), &ContactSubmission::default());
        assert_eq!(scheduler.delays(), vec![10, 10]);
        page.take();

        scheduler.run_all();
        let opens = page
            .take()
            .into_iter()
            .filter(|call| matches!(call, PageCall::Open(_)))
            .count();
        assert_eq!(opens, 2);
    }

    #[test]
    fn form_fields_map_onto_submission() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"name":"Ana","email":"a@x.com","subject":"Hi","message":"Test"}"#,
        )
        .unwrap();
        assert_eq!(submission, ana());

        let partial: ContactSubmission = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(partial.contact, "");
        assert_eq!(partial.body, "");
    }
}
