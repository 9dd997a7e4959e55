//! Startup loader overlay sequence

use crate::consts::{LOADER_FADE_DURATION, LOADING_DURATION, LOADING_MESSAGE_INTERVAL};

/// Loader overlay phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Overlay visible, messages cycling
    Loading,
    /// Overlay hidden (fading out), wheel live
    Fading,
    /// Overlay removed
    Done,
}

/// Loader transitions produced by `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStep {
    /// Show loading message at this cycle index
    Message(usize),
    Hidden,
    Removed,
}

#[derive(Debug, Clone)]
pub struct LoadingSequence {
    pub phase: LoaderPhase,
    pub message_index: usize,
    elapsed: f64,
    next_message_at: f64,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSequence {
    pub fn new() -> Self {
        Self {
            phase: LoaderPhase::Loading,
            message_index: 0,
            elapsed: 0.0,
            next_message_at: LOADING_MESSAGE_INTERVAL as f64,
        }
    }

    /// A sequence that has already run (loader disabled)
    pub fn finished() -> Self {
        Self {
            phase: LoaderPhase::Done,
            ..Self::new()
        }
    }

    /// Whether the wheel is live (overlay hidden or gone)
    pub fn is_surface_ready(&self) -> bool {
        self.phase != LoaderPhase::Loading
    }

    pub fn advance(&mut self, dt: f32) -> Vec<LoaderStep> {
        let mut steps = Vec::new();
        if self.phase == LoaderPhase::Done {
            return steps;
        }

        self.elapsed += dt as f64;
        let now = self.elapsed + 1e-6;
        let hide_at = LOADING_DURATION as f64;

        if self.phase == LoaderPhase::Loading {
            while self.next_message_at <= now && self.next_message_at < hide_at {
                self.message_index += 1;
                self.next_message_at += LOADING_MESSAGE_INTERVAL as f64;
                steps.push(LoaderStep::Message(self.message_index));
            }
            if now >= hide_at {
                self.phase = LoaderPhase::Fading;
                steps.push(LoaderStep::Hidden);
            }
        }

        if self.phase == LoaderPhase::Fading && now >= hide_at + LOADER_FADE_DURATION as f64 {
            self.phase = LoaderPhase::Done;
            steps.push(LoaderStep::Removed);
        }

        steps
    }
}
