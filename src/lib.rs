//! Spin Wheel - a 3D reward wheel widget
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (spin, balance, timers)
//! - `renderer`: WebGPU rendering of the wheel scene
//! - `locale`: Validated two-locale string table
//! - `settings`: Widget configuration
//! - `ui`: DOM binding (wasm only)

pub mod error;
pub mod locale;
pub mod renderer;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use error::WheelError;
pub use locale::{Direction, Locale, LocaleTable, Strings};
pub use settings::WheelConfig;

use glam::Vec2;

/// Widget configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Balance shown before any reward is granted
    pub const DEFAULT_BALANCE: u64 = 1250;

    /// Spin tween: full turns drawn uniformly from [MIN, MAX)
    pub const SPIN_MIN_TURNS: f32 = 5.0;
    pub const SPIN_MAX_TURNS: f32 = 8.0;
    /// Spin tween duration (seconds)
    pub const SPIN_DURATION: f32 = 4.0;

    /// Reward drawn uniformly from [MIN, MAX)
    pub const REWARD_MIN: u64 = 50;
    pub const REWARD_MAX: u64 = 550;
    /// Fixed grant for watching an ad
    pub const AD_REWARD: u64 = 100;

    /// Delay before "winner" / notices revert (seconds)
    pub const STATUS_RESET_DELAY: f32 = 2.0;
    /// Delay between the ad notice and the ad grant (seconds)
    pub const AD_REWARD_DELAY: f32 = 2.0;

    /// Balance counter animation
    pub const BALANCE_STEPS: u32 = 30;
    pub const BALANCE_DURATION: f32 = 1.0;

    /// Idle rotation speed (0.005 rad per frame at 60 Hz)
    pub const IDLE_ROTATION_SPEED: f32 = 0.3;

    /// Loader overlay
    pub const LOADING_MESSAGE_INTERVAL: f32 = 0.5;
    pub const LOADING_DURATION: f32 = 3.0;
    pub const LOADER_FADE_DURATION: f32 = 0.5;

    /// Wheel geometry
    pub const WHEEL_SEGMENTS: usize = 8;
    pub const WHEEL_OUTER_RADIUS: f32 = 2.5;
    pub const WHEEL_HUB_RADIUS: f32 = 0.3;
    pub const WHEEL_DEPTH: f32 = 0.3;
    pub const WHEEL_RIM_TUBE: f32 = 0.1;
    pub const WHEEL_MARKER_RADIUS: f32 = 0.15;
    /// Markers sit at this fraction of the outer radius
    pub const WHEEL_MARKER_DISTANCE: f32 = 0.7;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
