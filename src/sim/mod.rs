//! Deterministic skier simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is an opaque tick counter passed in by the caller
//! - Obstacles are checked in source order
//! - No rendering, asset loading or input device dependencies

pub mod animation;
pub mod collision;
pub mod images;
pub mod obstacle;
pub mod rect;
pub mod skier;
pub mod state;
pub mod tick;

pub use animation::{Animation, JumpAnimator, JumpStep};
pub use collision::{collision, find_collision, find_jump_ramp, skier_hit};
pub use images::{ImageAtlas, ImageLookup, ImageName, JUMP_IMAGES, direction_image};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleSource};
pub use rect::{Rect, intersect_two_rects};
pub use skier::Skier;
pub use state::{Command, Direction, SkierState};
pub use tick::{GamePhase, Slope, TickInput, tick};
