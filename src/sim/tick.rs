//! Fixed timestep session tick
//!
//! Applies queued UI commands, then advances the loader, spin tween,
//! balance counter, timers and idle rotation.

use super::loading::LoaderStep;
use super::state::{SessionState, WheelEvent};
use crate::consts::*;
use crate::locale::Notice;

/// UI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spin button and its "game" alias
    Spin,
    ToggleLocale,
    Notify(Notice),
    WatchAd,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn single(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput, dt: f32) {
    state.time += dt as f64;

    for step in state.loader.advance(dt) {
        state.events.push(match step {
            LoaderStep::Message(index) => WheelEvent::LoaderMessage(index),
            LoaderStep::Hidden => WheelEvent::LoaderHidden,
            LoaderStep::Removed => WheelEvent::LoaderRemoved,
        });
    }

    // Nothing is wired up until the loader hands over to the wheel
    if !state.loader.is_surface_ready() {
        if !input.commands.is_empty() {
            log::debug!("Dropping {} commands during loading", input.commands.len());
        }
        return;
    }

    for command in &input.commands {
        apply_command(state, *command);
    }

    state.advance_spin(dt);
    state.advance_balance(dt);

    for action in state.timers.advance(dt) {
        state.run_timer(action);
    }

    if !state.spinning && !state.reduced_motion {
        state.orientation += IDLE_ROTATION_SPEED * dt;
    }
}

fn apply_command(state: &mut SessionState, command: Command) {
    match command {
        Command::Spin => {
            state.spin();
        }
        Command::ToggleLocale => state.toggle_locale(),
        Command::Notify(notice) => state.notify(notice),
        Command::WatchAd => state.watch_ad(),
    }
}
