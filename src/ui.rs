//! DOM binding (WASM only)
//!
//! Mirrors session state into the page. Missing elements are skipped.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::Strings;
use crate::sim::{SessionState, WheelEvent};

/// Label element ids paired with their text
fn labels(s: &Strings) -> [(&'static str, &str); 8] {
    [
        ("langText", s.lang_code.as_str()),
        ("spinText", s.spin.as_str()),
        ("walletText", s.wallet.as_str()),
        ("referralText", s.referral.as_str()),
        ("leaderboardText", s.leaderboard.as_str()),
        ("gameText", s.game.as_str()),
        ("adsText", s.ads.as_str()),
        ("balanceText", s.balance.as_str()),
    ]
}

pub struct Dom {
    document: Document,
}

impl Dom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(el: &Element, class: &str, on: bool) {
        let list = el.class_list();
        let _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }

    /// Relabel every localized element and set the document direction
    pub fn apply_locale(&self, state: &SessionState) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("dir", state.direction().as_str());
        }
        for (id, text) in labels(state.strings()) {
            self.set_text(id, text);
        }
        self.set_text("statusText", state.status_text());
        self.set_text("balanceValue", &state.balance_text());
        self.set_text("loaderText", state.loader_text());
    }

    /// Bring the page in line with one tick's worth of events
    pub fn apply_events(&self, state: &SessionState, events: &[WheelEvent]) {
        for event in events {
            match event {
                WheelEvent::SpinStarted { .. } | WheelEvent::SpinFinished { .. } => {
                    self.apply_spinning(state.spinning)
                }
                WheelEvent::StatusChanged(_) => self.set_text("statusText", state.status_text()),
                WheelEvent::LocaleChanged(_) => self.apply_locale(state),
                WheelEvent::BalanceAnimationStarted { .. } => {
                    if let Some(el) = self.element("balanceValue") {
                        Self::set_class(&el, "updating", true);
                    }
                }
                WheelEvent::BalanceDisplayed(_) => {
                    self.set_text("balanceValue", &state.balance_text())
                }
                WheelEvent::BalanceCommitted(_) => {
                    if let Some(el) = self.element("balanceValue") {
                        el.set_text_content(Some(&state.balance_text()));
                        Self::set_class(&el, "updating", state.is_balance_animating());
                    }
                }
                WheelEvent::LoaderMessage(_) => self.set_text("loaderText", state.loader_text()),
                WheelEvent::LoaderHidden => {
                    if let Some(el) = self.element("loadingScreen") {
                        Self::set_class(&el, "hidden", true);
                    }
                }
                WheelEvent::LoaderRemoved => {
                    if let Some(el) = self
                        .element("loadingScreen")
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        let _ = el.style().set_property("display", "none");
                    }
                }
                WheelEvent::SpinIgnored | WheelEvent::AdRewardGranted(_) => {}
            }
        }
    }

    fn apply_spinning(&self, spinning: bool) {
        if let Some(btn) = self.element("spinBtn") {
            Self::set_class(&btn, "spinning", spinning);
        }
        if let Ok(Some(spinner)) = self.document.query_selector(".spinner") {
            Self::set_class(&spinner, "active", spinning);
        }
    }
}
