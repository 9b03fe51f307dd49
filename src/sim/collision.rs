//! Skier vs obstacle collision detection
//!
//! Obstacles are scanned in source order and the first match wins. A jump
//! clears everything except trees, and an obstacle whose bounds can't be
//! resolved never collides.

use super::images::ImageLookup;
use super::obstacle::{Obstacle, ObstacleKind};
use super::rect::{Rect, intersect_two_rects};
use super::state::SkierState;

/// Does this obstacle stop the skier?
pub fn skier_hit(
    skier_bounds: Option<&Rect>,
    skier_state: SkierState,
    obstacle: &Obstacle,
    images: &dyn ImageLookup,
) -> bool {
    let Some(obstacle_bounds) = obstacle.bounds(images) else {
        return false;
    };
    let Some(skier_bounds) = skier_bounds else {
        return false;
    };
    if !intersect_two_rects(skier_bounds, &obstacle_bounds) {
        return false;
    }
    obstacle.kind.is_tree() || skier_state != SkierState::Jumping
}

/// First obstacle the skier crashes into, if any
pub fn find_collision<'a>(
    skier_bounds: Option<&Rect>,
    skier_state: SkierState,
    obstacles: &'a [Obstacle],
    images: &dyn ImageLookup,
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|obstacle| skier_hit(skier_bounds, skier_state, obstacle, images))
}

/// True if any obstacle stops the skier
pub fn collision(
    skier_bounds: Option<&Rect>,
    skier_state: SkierState,
    obstacles: &[Obstacle],
    images: &dyn ImageLookup,
) -> bool {
    find_collision(skier_bounds, skier_state, obstacles, images).is_some()
}

/// First jump ramp overlapping the skier, in source order
pub fn find_jump_ramp<'a>(
    skier_bounds: &Rect,
    obstacles: &'a [Obstacle],
    images: &dyn ImageLookup,
) -> Option<&'a Obstacle> {
    obstacles.iter().find(|obstacle| {
        obstacle.kind == ObstacleKind::JumpRamp
            && obstacle
                .bounds(images)
                .is_some_and(|bounds| intersect_two_rects(skier_bounds, &bounds))
    })
}
