//! Deterministic session simulation
//!
//! All widget behavior lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded outcome source only
//! - No rendering or platform dependencies

pub mod balance;
pub mod loading;
pub mod outcome;
pub mod spin;
pub mod state;
pub mod tick;
pub mod timers;
pub mod tween;

pub use balance::{BalanceAnimator, BalanceUpdate};
pub use loading::{LoaderPhase, LoaderStep, LoadingSequence};
pub use outcome::{FixedOutcomes, OutcomeSource, SeededOutcomes};
pub use state::{SessionState, Status, TimerAction, WheelEvent};
pub use tick::{Command, TickInput, tick};
pub use timers::{TimerId, Timers};
pub use tween::{Easing, Tween, TweenStep};
