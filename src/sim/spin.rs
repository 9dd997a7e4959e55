//! Spin controller and balance entry points

use std::f32::consts::TAU;

use super::state::{SessionState, Status, TimerAction, WheelEvent};
use super::tween::{Easing, Tween};
use crate::consts::{SPIN_DURATION, STATUS_RESET_DELAY};
use crate::error::WheelError;

impl SessionState {
    /// Start a spin. Returns false (and changes nothing) if one is running.
    pub fn spin(&mut self) -> bool {
        if self.spinning {
            self.events.push(WheelEvent::SpinIgnored);
            return false;
        }

        self.spinning = true;
        self.set_status(Status::Spinning);

        // Fold accumulated idle rotation so the tween keeps f32 precision
        let from = self.wrapped_orientation();
        let turns = self.outcomes.spin_turns();
        let to = from + TAU * turns;
        self.orientation = from;
        self.spin_tween = Some(Tween::new(from, to, SPIN_DURATION, Easing::Power3Out));

        self.events.push(WheelEvent::SpinStarted { from, to });
        log::info!("Spin started ({:.2} turns)", turns);
        true
    }

    /// Animate the displayed balance to `new_balance` and commit it
    pub fn animate_balance(&mut self, new_balance: i64) -> Result<(), WheelError> {
        let target = u64::try_from(new_balance).map_err(|_| {
            WheelError::InvalidArgument(format!(
                "balance must be non-negative, got {}",
                new_balance
            ))
        })?;
        self.start_balance_animation(target);
        Ok(())
    }

    /// Add `amount` on top of the effective balance. Returns the new target.
    pub fn grant(&mut self, amount: i64) -> Result<u64, WheelError> {
        let amount = u64::try_from(amount).map_err(|_| {
            WheelError::InvalidArgument(format!("reward must be non-negative, got {}", amount))
        })?;
        let target = self
            .effective_balance()
            .checked_add(amount)
            .ok_or_else(|| WheelError::InvalidArgument("balance overflow".to_string()))?;
        self.start_balance_animation(target);
        Ok(target)
    }

    pub(crate) fn start_balance_animation(&mut self, target: u64) {
        let from = self.displayed_balance;
        if let Some(previous) = self.balance_anim.start(from, target) {
            log::debug!("Balance animation to {} superseded", previous);
        }
        self.events
            .push(WheelEvent::BalanceAnimationStarted { from, to: target });
    }

    pub(crate) fn advance_spin(&mut self, dt: f32) {
        let Some(tween) = self.spin_tween.as_mut() else {
            return;
        };
        let step = tween.advance(dt);
        self.orientation = step.value;

        if step.finished {
            self.spin_tween = None;
            self.finish_spin();
        }
    }

    fn finish_spin(&mut self) {
        self.spinning = false;
        self.set_status(Status::Winner);
        self.schedule_status(TimerAction::ResetStatus, STATUS_RESET_DELAY);

        let reward = self.outcomes.reward();
        let new_balance = self.effective_balance().saturating_add(reward);
        self.start_balance_animation(new_balance);

        self.events
            .push(WheelEvent::SpinFinished { reward, new_balance });
        log::info!("Spin finished: +{} -> {}", reward, new_balance);
    }

    pub(crate) fn advance_balance(&mut self, dt: f32) {
        let Some(update) = self.balance_anim.advance(dt) else {
            return;
        };
        if update.displayed != self.displayed_balance {
            self.displayed_balance = update.displayed;
            self.events.push(WheelEvent::BalanceDisplayed(update.displayed));
        }
        if let Some(committed) = update.committed {
            self.balance = committed;
            self.displayed_balance = committed;
            self.events.push(WheelEvent::BalanceCommitted(committed));
            log::debug!("Balance committed: {}", committed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::WheelConfig;
    use crate::sim::outcome::FixedOutcomes;

    fn session(reward: u64) -> SessionState {
        let config = WheelConfig {
            skip_loader: true,
            ..Default::default()
        };
        SessionState::from_config(&config, Box::new(FixedOutcomes { turns: 6.0, reward }))
            .unwrap()
    }

    #[test]
    fn test_spin_sets_flag_and_status() {
        let mut state = session(300);
        assert!(state.spin());
        assert!(state.spinning);
        assert_eq!(state.status, Status::Spinning);
        let tween = state.spin_tween.as_ref().unwrap();
        assert!((tween.to - tween.from - 6.0 * TAU).abs() < 1e-3);
        assert_eq!(tween.duration, SPIN_DURATION);
    }

    #[test]
    fn test_reentrant_spin_ignored() {
        let mut state = session(300);
        assert!(state.spin());
        let target = state.spin_tween.as_ref().unwrap().to;
        state.drain_events();

        assert!(!state.spin());
        assert!(state.spinning);
        assert_eq!(state.balance, DEFAULT_BALANCE);
        assert_eq!(state.spin_tween.as_ref().unwrap().to, target);
        assert_eq!(state.drain_events(), vec![WheelEvent::SpinIgnored]);
    }

    #[test]
    fn test_spin_start_folds_orientation() {
        let mut state = session(300);
        state.orientation = 3.0 * TAU + 1.0;
        state.spin();
        assert!((state.orientation - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_animate_balance_rejects_negative() {
        let mut state = session(300);
        assert!(matches!(
            state.animate_balance(-1),
            Err(WheelError::InvalidArgument(_))
        ));
        assert!(!state.is_balance_animating());
    }

    #[test]
    fn test_grant_rejects_negative() {
        let mut state = session(300);
        assert!(matches!(state.grant(-50), Err(WheelError::InvalidArgument(_))));
    }

    #[test]
    fn test_grant_stacks_on_in_flight_target() {
        let mut state = session(300);
        assert_eq!(state.grant(100).unwrap(), 1350);
        assert_eq!(state.grant(100).unwrap(), 1450);
        assert_eq!(state.effective_balance(), 1450);
    }
}
