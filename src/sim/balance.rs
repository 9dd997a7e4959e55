//! Balance counter animation
//!
//! Linearly steps the displayed balance toward a target on a fixed cadence,
//! snapping to the exact target on the final step.

use crate::consts::{BALANCE_DURATION, BALANCE_STEPS};

/// Output of one `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceUpdate {
    /// Latest value to display
    pub displayed: u64,
    /// Set on the final step: the value to commit
    pub committed: Option<u64>,
}

#[derive(Debug, Clone)]
struct BalanceRun {
    target: u64,
    increment: f64,
    current: f64,
    step: u32,
    since_step: f64,
}

/// At most one run in flight; starting a new run cancels the old one
#[derive(Debug, Clone, Default)]
pub struct BalanceAnimator {
    run: Option<BalanceRun>,
}

impl BalanceAnimator {
    pub fn new() -> Self {
        Self { run: None }
    }

    /// Seconds between steps
    pub fn step_interval() -> f64 {
        BALANCE_DURATION as f64 / BALANCE_STEPS as f64
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Target of the in-flight run
    pub fn target(&self) -> Option<u64> {
        self.run.as_ref().map(|r| r.target)
    }

    /// Start animating from `displayed` to `target`.
    /// Returns the target of a run this superseded, if any.
    pub fn start(&mut self, displayed: u64, target: u64) -> Option<u64> {
        let superseded = self.cancel();
        let increment = (target as f64 - displayed as f64) / BALANCE_STEPS as f64;
        self.run = Some(BalanceRun {
            target,
            increment,
            current: displayed as f64,
            step: 0,
            since_step: 0.0,
        });
        superseded
    }

    /// Drop the in-flight run, returning its target
    pub fn cancel(&mut self) -> Option<u64> {
        self.run.take().map(|r| r.target)
    }

    pub fn advance(&mut self, dt: f32) -> Option<BalanceUpdate> {
        let run = self.run.as_mut()?;
        let interval = Self::step_interval();
        run.since_step += dt as f64;

        let mut update = None;
        while run.since_step + 1e-6 >= interval {
            run.since_step -= interval;
            run.step += 1;
            run.current += run.increment;

            if run.step >= BALANCE_STEPS {
                let target = run.target;
                self.run = None;
                return Some(BalanceUpdate {
                    displayed: target,
                    committed: Some(target),
                });
            }

            update = Some(BalanceUpdate {
                displayed: run.current.floor().max(0.0) as u64,
                committed: None,
            });
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn run_to_end(anim: &mut BalanceAnimator) -> Vec<BalanceUpdate> {
        let mut updates = Vec::new();
        for _ in 0..1000 {
            if let Some(u) = anim.advance(SIM_DT) {
                updates.push(u);
                if u.committed.is_some() {
                    break;
                }
            }
        }
        updates
    }

    #[test]
    fn test_thirty_steps_ending_exactly() {
        let mut anim = BalanceAnimator::new();
        anim.start(1250, 1550);
        let updates = run_to_end(&mut anim);
        assert_eq!(updates.len(), BALANCE_STEPS as usize);
        assert_eq!(updates.last().unwrap().displayed, 1550);
        assert_eq!(updates.last().unwrap().committed, Some(1550));
        assert!(!anim.is_running());
    }

    #[test]
    fn test_monotonic_for_positive_delta() {
        let mut anim = BalanceAnimator::new();
        anim.start(1000, 1337);
        let updates = run_to_end(&mut anim);
        let mut last = 1000;
        for u in &updates {
            assert!(u.displayed >= last);
            assert!(u.displayed <= 1337);
            last = u.displayed;
        }
        assert_eq!(last, 1337);
    }

    #[test]
    fn test_finishes_in_about_one_second() {
        let mut anim = BalanceAnimator::new();
        anim.start(0, 100);
        let mut ticks = 0;
        loop {
            ticks += 1;
            if let Some(BalanceUpdate { committed: Some(_), .. }) = anim.advance(SIM_DT) {
                break;
            }
            assert!(ticks < 200);
        }
        // 1 second at 120 Hz
        assert!((118..=122).contains(&ticks));
    }

    #[test]
    fn test_restart_supersedes() {
        let mut anim = BalanceAnimator::new();
        assert_eq!(anim.start(0, 100), None);
        for _ in 0..10 {
            anim.advance(SIM_DT);
        }
        assert_eq!(anim.start(20, 300), Some(100));
        assert_eq!(anim.target(), Some(300));
        let updates = run_to_end(&mut anim);
        assert_eq!(updates.last().unwrap().committed, Some(300));
    }

    #[test]
    fn test_large_step_commits() {
        let mut anim = BalanceAnimator::new();
        anim.start(5, 6);
        let update = anim.advance(5.0).unwrap();
        assert_eq!(update.committed, Some(6));
    }

    #[test]
    fn test_idle_advance_is_none() {
        let mut anim = BalanceAnimator::new();
        assert!(anim.advance(SIM_DT).is_none());
    }
}
