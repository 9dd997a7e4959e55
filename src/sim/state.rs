//! Session state and core simulation types
//!
//! One `SessionState` is owned by the frame loop; UI callbacks never touch
//! it directly but enqueue commands that `tick` applies.

use std::f32::consts::TAU;

use super::balance::BalanceAnimator;
use super::loading::LoadingSequence;
use super::outcome::{OutcomeSource, SeededOutcomes};
use super::timers::{TimerId, Timers};
use super::tween::Tween;
use crate::consts::*;
use crate::error::WheelError;
use crate::locale::{Direction, Locale, LocaleTable, Notice, Strings};
use crate::settings::WheelConfig;

/// What the status line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Spinning,
    Winner,
    Notice(Notice),
}

impl Status {
    pub fn text<'a>(&self, strings: &'a Strings) -> &'a str {
        match self {
            Status::Ready => &strings.ready,
            Status::Spinning => &strings.spinning,
            Status::Winner => &strings.winner,
            Status::Notice(notice) => strings.notice(*notice),
        }
    }
}

/// Things that happened during a tick, drained by the UI layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent {
    SpinStarted { from: f32, to: f32 },
    /// Spin request dropped because a spin is already running
    SpinIgnored,
    SpinFinished { reward: u64, new_balance: u64 },
    BalanceAnimationStarted { from: u64, to: u64 },
    BalanceDisplayed(u64),
    BalanceCommitted(u64),
    StatusChanged(Status),
    LocaleChanged(Locale),
    AdRewardGranted(u64),
    LoaderMessage(usize),
    LoaderHidden,
    LoaderRemoved,
}

/// Delayed actions on the session clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Return the status line to Ready
    ResetStatus,
    /// Restore the status a notice replaced
    RestoreStatus(Status),
    /// Credit the ad reward
    GrantAdReward,
}

/// Complete widget session (never persisted)
#[derive(Debug)]
pub struct SessionState {
    pub locale: Locale,
    /// Committed balance
    pub balance: u64,
    /// Balance currently shown (differs from `balance` mid-animation)
    pub displayed_balance: u64,
    /// Re-entrancy guard for spins
    pub spinning: bool,
    pub status: Status,
    /// Wheel rotation about its axis (radians)
    pub orientation: f32,
    /// Skip the idle rotation
    pub reduced_motion: bool,
    /// Session clock (seconds)
    pub time: f64,
    pub loader: LoadingSequence,
    /// Pending events for the UI
    pub events: Vec<WheelEvent>,
    pub(crate) spin_tween: Option<Tween>,
    pub(crate) balance_anim: BalanceAnimator,
    pub(crate) timers: Timers<TimerAction>,
    pub(crate) status_timer: Option<TimerId>,
    pub(crate) outcomes: Box<dyn OutcomeSource>,
    strings: LocaleTable,
}

impl SessionState {
    /// Default session seeded with `seed`
    pub fn new(seed: u64) -> Result<Self, WheelError> {
        Self::from_config(&WheelConfig::default(), Box::new(SeededOutcomes::new(seed)))
    }

    pub fn from_config(
        config: &WheelConfig,
        outcomes: Box<dyn OutcomeSource>,
    ) -> Result<Self, WheelError> {
        let strings = LocaleTable::load()?;
        let balance = config.starting_balance()?;
        let locale = config.initial_locale()?;

        Ok(Self {
            locale,
            balance,
            displayed_balance: balance,
            spinning: false,
            status: Status::Ready,
            orientation: 0.0,
            reduced_motion: config.reduced_motion,
            time: 0.0,
            loader: if config.skip_loader {
                LoadingSequence::finished()
            } else {
                LoadingSequence::new()
            },
            events: Vec::new(),
            spin_tween: None,
            balance_anim: BalanceAnimator::new(),
            timers: Timers::new(),
            status_timer: None,
            outcomes,
            strings,
        })
    }

    /// Strings for the active locale
    pub fn strings(&self) -> &Strings {
        self.strings.get(self.locale)
    }

    pub fn direction(&self) -> Direction {
        self.strings().dir
    }

    pub fn status_text(&self) -> &str {
        self.status.text(self.strings())
    }

    /// Displayed balance with locale grouping
    pub fn balance_text(&self) -> String {
        self.strings().format_amount(self.displayed_balance)
    }

    /// Current loader message
    pub fn loader_text(&self) -> &str {
        self.strings().loading_message(self.loader.message_index)
    }

    /// Balance once every in-flight animation has committed
    pub fn effective_balance(&self) -> u64 {
        self.balance_anim.target().unwrap_or(self.balance)
    }

    pub fn is_balance_animating(&self) -> bool {
        self.balance_anim.is_running()
    }

    /// Orientation folded into [0, 2π)
    pub fn wrapped_orientation(&self) -> f32 {
        self.orientation.rem_euclid(TAU)
    }

    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flip between the two locales
    pub fn toggle_locale(&mut self) {
        self.apply_locale(self.locale.toggled());
    }

    /// Select a locale by code
    pub fn set_locale(&mut self, code: &str) -> Result<(), WheelError> {
        let locale = Locale::from_code(code)?;
        self.apply_locale(locale);
        Ok(())
    }

    fn apply_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.events.push(WheelEvent::LocaleChanged(locale));
        log::info!("Locale set to {}", locale.code());

        // Relabeling resets the status line unless a spin is in flight
        let status = if self.spinning {
            Status::Spinning
        } else {
            Status::Ready
        };
        self.set_status(status);
    }

    /// Show a stub notification, reverting after a delay
    pub fn notify(&mut self, notice: Notice) {
        // A pending winner reset is superseded, so restore Ready in its place
        let previous = match self.status {
            Status::Winner | Status::Notice(_) => {
                if self.spinning {
                    Status::Spinning
                } else {
                    Status::Ready
                }
            }
            other => other,
        };
        self.set_status(Status::Notice(notice));
        self.schedule_status(TimerAction::RestoreStatus(previous), STATUS_RESET_DELAY);
        log::debug!("Notice: {:?}", notice);
    }

    /// Ad stub: notice now, fixed grant after a delay
    pub fn watch_ad(&mut self) {
        self.notify(Notice::Ad);
        self.timers
            .schedule(AD_REWARD_DELAY, TimerAction::GrantAdReward);
    }

    /// Replace the status line, cancelling any pending status revert
    pub(crate) fn set_status(&mut self, status: Status) {
        if let Some(id) = self.status_timer.take() {
            self.timers.cancel(id);
        }
        if self.status != status {
            self.status = status;
            self.events.push(WheelEvent::StatusChanged(status));
        }
    }

    pub(crate) fn schedule_status(&mut self, action: TimerAction, delay: f32) {
        self.status_timer = Some(self.timers.schedule(delay, action));
    }

    pub(crate) fn run_timer(&mut self, action: TimerAction) {
        match action {
            TimerAction::ResetStatus => {
                self.status_timer = None;
                self.set_status(Status::Ready);
            }
            TimerAction::RestoreStatus(status) => {
                self.status_timer = None;
                // The spin may have started or finished while the notice showed
                let status = match status {
                    Status::Spinning if !self.spinning => Status::Ready,
                    Status::Ready if self.spinning => Status::Spinning,
                    other => other,
                };
                self.set_status(status);
            }
            TimerAction::GrantAdReward => {
                let target = self.effective_balance().saturating_add(AD_REWARD);
                self.start_balance_animation(target);
                self.events.push(WheelEvent::AdRewardGranted(AD_REWARD));
                log::info!("Ad reward granted: {}", AD_REWARD);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        let config = WheelConfig {
            skip_loader: true,
            ..Default::default()
        };
        SessionState::from_config(&config, Box::new(SeededOutcomes::new(1))).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new(1).unwrap();
        assert_eq!(state.balance, DEFAULT_BALANCE);
        assert_eq!(state.displayed_balance, DEFAULT_BALANCE);
        assert_eq!(state.locale, Locale::En);
        assert_eq!(state.status, Status::Ready);
        assert!(!state.spinning);
        assert_eq!(state.balance_text(), "1,250");
        assert_eq!(state.loader_text(), "Loading...");
    }

    #[test]
    fn test_toggle_locale_sets_direction_and_code() {
        let mut state = session();
        state.toggle_locale();
        assert_eq!(state.locale, Locale::Ar);
        assert_eq!(state.direction(), Direction::Rtl);
        assert_eq!(state.strings().lang_code, "AR");

        state.toggle_locale();
        assert_eq!(state.locale, Locale::En);
        assert_eq!(state.direction(), Direction::Ltr);
        assert_eq!(state.strings().lang_code, "EN");
    }

    #[test]
    fn test_set_locale_rejects_unknown() {
        let mut state = session();
        assert!(matches!(
            state.set_locale("fr"),
            Err(WheelError::Configuration(_))
        ));
        assert_eq!(state.locale, Locale::En);
        state.set_locale("ar").unwrap();
        assert_eq!(state.locale, Locale::Ar);
    }

    #[test]
    fn test_notice_text_is_localized() {
        let mut state = session();
        state.notify(Notice::Wallet);
        assert_eq!(state.status_text(), "Wallet feature coming soon!");
        state.toggle_locale();
        // Relabeling resets the status line
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.status_text(), "جاهز");
    }

    #[test]
    fn test_config_starting_state() {
        let config = WheelConfig {
            starting_balance: 0,
            locale: "ar".into(),
            ..Default::default()
        };
        let state =
            SessionState::from_config(&config, Box::new(SeededOutcomes::new(3))).unwrap();
        assert_eq!(state.balance, 0);
        assert_eq!(state.locale, Locale::Ar);
        assert_eq!(state.loader_text(), "جاري التحميل...");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WheelConfig {
            starting_balance: -1,
            ..Default::default()
        };
        let err =
            SessionState::from_config(&config, Box::new(SeededOutcomes::new(3))).unwrap_err();
        assert!(matches!(err, WheelError::InvalidArgument(_)));
    }
}
