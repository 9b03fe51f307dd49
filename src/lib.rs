//! Ski Slope - the skier at the heart of a downhill arcade game
//!
//! Core modules:
//! - `sim`: Deterministic skier simulation (state machine, movement, collisions, jump animation)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Speed the skier starts at, also used for resets and discrete horizontal steps
    pub const STARTING_SPEED: f32 = 10.0;
    /// Hypotenuse correction so diagonal speed matches orthogonal speed
    pub const DIAGONAL_SPEED_REDUCER: f32 = 1.4142;
    /// Minimum time units between animation frame advances
    pub const ANIMATION_FRAME_SPEED: u64 = 250;
}

/// Opaque, monotonically non-decreasing timestamp passed into every tick
pub type GameTime = u64;
