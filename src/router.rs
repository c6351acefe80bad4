//! Section routing for the single page site.
//!
//! Exactly one section of the page is shown at a time. The active key lives
//! in [`RouteState`] and is mirrored into the address-bar fragment so links
//! can be shared and back/forward navigation lands on the right section.
//! Everything the browser has to do on a navigation goes through
//! [`RouteHost`], which keeps the routing rules runnable outside a browser.

use std::fmt;

use log::{error, info};
use thiserror::Error;

use crate::config;
use crate::schedule::Scheduler;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("page not found: {0}")]
    UnknownSection(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { key: "home", label: "Home" },
    Section { key: "about", label: "About" },
    Section { key: "programs", label: "Programs" },
    Section { key: "pricing", label: "Pricing" },
    Section { key: "community", label: "Community" },
    Section { key: "contact", label: "Contact" },
];

pub const SITE_SECTIONS: SectionMap = SectionMap {
    sections: SECTIONS,
    default: SectionId("home"),
};

/// Key of a section known to a [`SectionMap`]. Only the map hands these out,
/// so holding one means the section exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(&'static str);

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMap {
    sections: &'static [Section],
    default: SectionId,
}

impl SectionMap {
    pub fn resolve(&self, key: &str) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|section| section.key == key)
            .map(|section| SectionId(section.key))
    }

    pub fn default_section(&self) -> SectionId {
        self.default
    }

    /// Maps an address-bar fragment (with or without the leading `#`) to a
    /// section, falling back to the default for empty or unknown keys.
    pub fn resolve_fragment(&self, fragment: &str) -> SectionId {
        let key = fragment.strip_prefix('#').unwrap_or(fragment);
        self.resolve(key).unwrap_or(self.default)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Section> {
        self.sections.iter()
    }

    /// Every navigation indicator paired with whether it is selected.
    pub fn indicators<'a>(
        &'a self,
        state: &'a RouteState,
    ) -> impl Iterator<Item = (&'static Section, bool)> + 'a {
        self.sections
            .iter()
            .map(move |section| (section, state.is_active(section.key)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteState {
    active: SectionId,
}

impl RouteState {
    pub fn new(initial: SectionId) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_str() == key
    }

    // Replacing the single key is what keeps at most one section active.
    fn activate(&mut self, id: SectionId) {
        self.active = id;
    }
}

/// Browser side effects of a navigation.
pub trait RouteHost {
    /// Current address-bar fragment, `None` when the location is unavailable.
    fn fragment(&self) -> Option<String>;
    /// Rewrites the fragment without adding a history entry.
    fn replace_fragment(&self, key: &str);
    fn scroll_to_top(&self);
    /// Closes transient overlays such as the mobile navigation panel.
    fn close_overlay(&self);
}

pub struct SectionRouter<H> {
    sections: SectionMap,
    host: H,
}

impl<H: RouteHost> SectionRouter<H> {
    pub fn new(sections: SectionMap, host: H) -> Self {
        Self { sections, host }
    }

    #[cfg(test)]
    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn try_navigate(&self, state: &mut RouteState, key: &str) -> Result<SectionId, RouteError> {
        let target = self
            .sections
            .resolve(key)
            .ok_or_else(|| RouteError::UnknownSection(key.to_string()))?;
        self.show(state, target);
        Ok(target)
    }

    /// Shows the section named `key`. Unknown keys leave `state` untouched,
    /// get logged, and return false.
    pub fn navigate(&self, state: &mut RouteState, key: &str) -> bool {
        info!("Navigating to: {}", key);
        match self.try_navigate(state, key) {
            Ok(_) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// Re-resolves the address-bar fragment, used on startup and on
    /// back/forward navigation. Always lands on a known section.
    pub fn restore(&self, state: &mut RouteState) -> SectionId {
        let target = self
            .host
            .fragment()
            .map(|fragment| self.sections.resolve_fragment(&fragment))
            .unwrap_or(self.sections.default);
        info!("Restoring page from fragment: {}", target);
        self.show(state, target);
        target
    }

    /// Restores from the fragment once the startup delay has passed and
    /// hands the resulting state to `commit`.
    pub fn schedule_restore<S, F>(self, scheduler: &S, commit: F)
    where
        H: 'static,
        S: Scheduler,
        F: FnOnce(RouteState) + 'static,
    {
        scheduler.defer(
            config::STARTUP_NAVIGATION_DELAY_MS,
            Box::new(move || {
                let mut state = RouteState::new(self.sections.default);
                self.restore(&mut state);
                commit(state);
            }),
        );
    }

    pub fn summary(&self, state: &RouteState) -> String {
        let keys: Vec<&str> = self.sections.iter().map(|section| section.key).collect();
        format!("Available pages: {} | current: {}", keys.join(", "), state.active())
    }

    fn show(&self, state: &mut RouteState, target: SectionId) {
        state.activate(target);
        self.host.close_overlay();
        self.host.scroll_to_top();
        self.host.replace_fragment(target.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::manual::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum HostCall {
        Replace(String),
        Scroll,
        CloseOverlay,
    }

    #[derive(Default)]
    struct FakeHost {
        fragment: RefCell<Option<String>>,
        calls: RefCell<Vec<HostCall>>,
    }

    impl FakeHost {
        fn with_fragment(fragment: &str) -> Self {
            let host = Self::default();
            *host.fragment.borrow_mut() = Some(fragment.to_string());
            host
        }

        fn take_calls(&self) -> Vec<HostCall> {
            self.calls.borrow_mut().drain(..).collect()
        }
    }

    impl RouteHost for FakeHost {
        fn fragment(&self) -> Option<String> {
            self.fragment.borrow().clone()
        }

        fn replace_fragment(&self, key: &str) {
            *self.fragment.borrow_mut() = Some(format!("#{}", key));
            self.calls.borrow_mut().push(HostCall::Replace(key.to_string()));
        }

        fn scroll_to_top(&self) {
            self.calls.borrow_mut().push(HostCall::Scroll);
        }

        fn close_overlay(&self) {
            self.calls.borrow_mut().push(HostCall::CloseOverlay);
        }
    }

    fn router(host: FakeHost) -> (SectionRouter<FakeHost>, RouteState) {
        let state = RouteState::new(SITE_SECTIONS.default_section());
        (SectionRouter::new(SITE_SECTIONS, host), state)
    }

    fn selected(router: &SectionRouter<FakeHost>, state: &RouteState) -> Vec<&'static str> {
        router
            .sections()
            .indicators(state)
            .filter(|(_, on)| *on)
            .map(|(section, _)| section.key)
            .collect()
    }

    #[test]
    fn every_known_key_becomes_the_only_active_section() {
        let (router, mut state) = router(FakeHost::default());
        for section in SECTIONS {
            assert!(router.navigate(&mut state, section.key));
            assert_eq!(state.active().as_str(), section.key);
            assert_eq!(selected(&router, &state), vec![section.key]);
            assert_eq!(router.host().fragment().as_deref(), Some(format!("#{}", section.key).as_str()));
        }
    }

    #[test]
    fn navigation_applies_side_effects() {
        let (router, mut state) = router(FakeHost::default());
        assert!(router.navigate(&mut state, "pricing"));
        assert_eq!(
            router.host().take_calls(),
            vec![
                HostCall::CloseOverlay,
                HostCall::Scroll,
                HostCall::Replace("pricing".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_key_is_rejected_and_keeps_current_section() {
        let (router, mut state) = router(FakeHost::default());
        assert!(router.navigate(&mut state, "about"));
        router.host().take_calls();

        for key in ["unknown-xyz", "", "#about", "About", " about"] {
            assert!(!router.navigate(&mut state, key));
            assert_eq!(state.active().as_str(), "about");
            assert_eq!(selected(&router, &state), vec!["about"]);
        }
        assert!(router.host().take_calls().is_empty());
        assert_eq!(router.host().fragment().as_deref(), Some("#about"));
    }

    #[test]
    fn try_navigate_reports_the_missing_key() {
        let (router, mut state) = router(FakeHost::default());
        assert_eq!(
            router.try_navigate(&mut state, "blog"),
            Err(RouteError::UnknownSection("blog".to_string()))
        );
        assert_eq!(RouteError::UnknownSection("blog".to_string()).to_string(), "page not found: blog");
    }

    #[test]
    fn navigating_twice_matches_navigating_once() {
        let (router, mut once) = router(FakeHost::default());
        router.navigate(&mut once, "community");

        let mut twice = RouteState::new(SITE_SECTIONS.default_section());
        router.navigate(&mut twice, "community");
        router.host().take_calls();
        router.navigate(&mut twice, "community");

        assert_eq!(once, twice);
        // Side effects are re-applied even when nothing visible changes.
        assert_eq!(router.host().take_calls().len(), 3);
    }

    #[test]
    fn startup_without_fragment_shows_home() {
        let (router, mut state) = router(FakeHost::default());
        assert_eq!(router.restore(&mut state).as_str(), "home");
        assert!(state.is_active("home"));
        assert_eq!(router.host().fragment().as_deref(), Some("#home"));
    }

    #[test]
    fn startup_with_known_fragment_shows_that_section() {
        let (router, mut state) = router(FakeHost::with_fragment("#pricing"));
        router.restore(&mut state);
        assert!(state.is_active("pricing"));
        assert!(!state.is_active("home"));
        assert_eq!(selected(&router, &state), vec!["pricing"]);
    }

    #[test]
    fn startup_restore_waits_for_the_delay() {
        let (router, state) = router(FakeHost::with_fragment("#pricing"));
        let shown = Rc::new(RefCell::new(state));
        let scheduler = ManualScheduler::default();

        let commit = shown.clone();
        router.schedule_restore(&scheduler, move |state| *commit.borrow_mut() = state);

        assert!(shown.borrow().is_active("home"));
        assert_eq!(scheduler.delays(), vec![100]);

        scheduler.run_all();
        assert!(shown.borrow().is_active("pricing"));
        assert!(!shown.borrow().is_active("home"));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn history_change_to_unknown_fragment_falls_back_to_home() {
        let (router, mut state) = router(FakeHost::default());
        router.navigate(&mut state, "contact");

        *router.host().fragment.borrow_mut() = Some("#unknown-xyz".to_string());
        assert_eq!(router.restore(&mut state).as_str(), "home");
        assert!(state.is_active("home"));
        assert_eq!(router.host().fragment().as_deref(), Some("#home"));
    }

    #[test]
    fn empty_fragment_resolves_to_default() {
        assert_eq!(SITE_SECTIONS.resolve_fragment("").as_str(), "home");
        assert_eq!(SITE_SECTIONS.resolve_fragment("#").as_str(), "home");
        assert_eq!(SITE_SECTIONS.resolve_fragment("about").as_str(), "about");
    }

    #[test]
    fn no_sequence_selects_two_indicators() {
        let (router, mut state) = router(FakeHost::default());
        let script = ["about", "nope", "pricing", "pricing", "", "home", "contact", "x", "programs"];
        for key in script {
            router.navigate(&mut state, key);
            assert_eq!(selected(&router, &state).len(), 1, "after navigating to {:?}", key);
        }
        assert!(state.is_active("programs"));
    }

    #[test]
    fn default_section_is_known() {
        let default = SITE_SECTIONS.default_section();
        assert_eq!(SITE_SECTIONS.resolve(default.as_str()), Some(default));
    }

    #[test]
    fn summary_lists_pages_and_current() {
        let (router, state) = router(FakeHost::default());
        assert_eq!(
            router.summary(&state),
            "Available pages: home, about, programs, pricing, community, contact | current: home"
        );
    }
}
