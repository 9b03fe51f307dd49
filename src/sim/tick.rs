//! Per-frame driver
//!
//! Bundles the skier with the obstacles and image sizes it reads, and
//! advances everything one frame at a time.

use serde::{Deserialize, Serialize};

use super::images::ImageAtlas;
use super::obstacle::Obstacle;
use super::skier::Skier;
use super::state::Command;
use crate::GameTime;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Skier is alive (skiing, jumping or crashed)
    Playing,
    /// Skier is dead; nothing moves anymore
    GameOver,
}

/// Input commands for a single tick, applied in order before the skier moves
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

/// Everything a tick needs: the skier plus what it collides with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slope {
    pub skier: Skier,
    /// Obstacles in the order they are checked
    pub obstacles: Vec<Obstacle>,
    pub images: ImageAtlas,
    /// Number of ticks advanced so far
    pub time_ticks: u64,
}

impl Slope {
    pub fn new(skier: Skier, obstacles: Vec<Obstacle>, images: ImageAtlas) -> Self {
        Self {
            skier,
            obstacles,
            images,
            time_ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.skier.is_dead() {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}

/// Advance the slope by one frame at `time`
pub fn tick(slope: &mut Slope, input: &TickInput, time: GameTime) {
    if slope.phase() == GamePhase::GameOver {
        return;
    }

    for &command in &input.commands {
        if !slope.skier.handle_input(command) {
            log::debug!("Command {:?} not handled", command);
        }
    }

    slope.skier.update(time, &slope.obstacles, &slope.images);
    slope.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STARTING_SPEED;
    use crate::sim::images::{ImageName, JUMP_IMAGES};
    use crate::sim::obstacle::ObstacleKind;
    use crate::sim::state::{Direction, SkierState};
    use glam::Vec2;

    fn images() -> ImageAtlas {
        let mut atlas = ImageAtlas::new()
            .with(ImageName::SkierDown, Vec2::new(30.0, 40.0))
            .with(ImageName::SkierLeftDown, Vec2::new(30.0, 40.0))
            .with(ImageName::SkierRight, Vec2::new(24.0, 40.0))
            .with(ImageName::SkierCrash, Vec2::new(30.0, 30.0))
            .with(ImageName::Tree, Vec2::new(20.0, 40.0))
            .with(ImageName::Rock1, Vec2::new(20.0, 10.0))
            .with(ImageName::JumpRamp, Vec2::new(40.0, 10.0));
        for image in JUMP_IMAGES {
            atlas.insert(image, Vec2::new(32.0, 40.0));
        }
        atlas
    }

    #[test]
    fn test_tick_moves_skier() {
        let mut slope = Slope::new(Skier::new(Vec2::ZERO), Vec::new(), images());
        tick(&mut slope, &TickInput::default(), 16);
        assert_eq!(slope.skier.position, Vec2::new(0.0, STARTING_SPEED));
        assert_eq!(slope.time_ticks, 1);
        assert_eq!(slope.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_commands_apply_before_movement() {
        let mut slope = Slope::new(Skier::new(Vec2::ZERO), Vec::new(), images());
        tick(&mut slope, &TickInput::command(Command::Left), 16);
        assert_eq!(slope.skier.direction(), Direction::LeftDown);
        assert!(slope.skier.position.x < 0.0);
        assert!(slope.skier.position.y > 0.0);
    }

    #[test]
    fn test_crash_then_recover() {
        // Tree sits down and to the left; stepping right clears it
        let obstacles = vec![Obstacle::new(ObstacleKind::Tree, Vec2::new(-15.0, 15.0))];
        let mut slope = Slope::new(Skier::new(Vec2::ZERO), obstacles, images());

        tick(&mut slope, &TickInput::default(), 16);
        assert_eq!(slope.skier.state(), SkierState::Crashed);
        let crash_site = slope.skier.position;

        tick(&mut slope, &TickInput::default(), 32);
        assert_eq!(slope.skier.position, crash_site);

        tick(&mut slope, &TickInput::command(Command::Right), 48);
        assert_eq!(slope.skier.state(), SkierState::Skiing);
        assert_eq!(slope.skier.direction(), Direction::Right);
        assert_eq!(slope.skier.position.x, crash_site.x + STARTING_SPEED);
        assert!(slope.skier.bounds(&slope.images).is_some());

        // Still clear of the tree on the next tick
        tick(&mut slope, &TickInput::default(), 64);
        assert_eq!(slope.skier.state(), SkierState::Skiing);
        assert_eq!(slope.skier.position.x, crash_site.x + STARTING_SPEED);
    }

    #[test]
    fn test_game_over_stops_ticking() {
        let mut slope = Slope::new(Skier::new(Vec2::ZERO), Vec::new(), images());
        slope.skier.die();
        assert_eq!(slope.phase(), GamePhase::GameOver);

        tick(&mut slope, &TickInput::command(Command::Down), 16);
        assert_eq!(slope.skier.position, Vec2::ZERO);
        assert_eq!(slope.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        let obstacles = vec![
            Obstacle::new(ObstacleKind::JumpRamp, Vec2::new(0.0, 30.0)),
            Obstacle::new(ObstacleKind::Rock1, Vec2::new(0.0, 60.0)),
            Obstacle::new(ObstacleKind::Tree, Vec2::new(-40.0, 200.0)),
        ];
        let mut slope1 = Slope::new(Skier::new(Vec2::ZERO), obstacles.clone(), images());
        let mut slope2 = Slope::new(Skier::new(Vec2::ZERO), obstacles, images());

        let inputs = [
            TickInput::default(),
            TickInput::command(Command::Jump),
            TickInput::command(Command::Left),
            TickInput::default(),
            TickInput::command(Command::Down),
        ];

        let mut time = 0;
        for _ in 0..10 {
            for input in &inputs {
                time += 100;
                tick(&mut slope1, input, time);
                tick(&mut slope2, input, time);
            }
        }

        assert_eq!(slope1.time_ticks, slope2.time_ticks);
        assert_eq!(slope1.skier.position, slope2.skier.position);
        assert_eq!(slope1.skier.state(), slope2.skier.state());
        assert_eq!(slope1.skier.image_name(), slope2.skier.image_name());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut slope = Slope::new(Skier::new(Vec2::ZERO), Vec::new(), images());
        tick(&mut slope, &TickInput::command(Command::Jump), 16);

        let json = serde_json::to_string(&slope).unwrap();
        let restored: Slope = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.skier.state(), SkierState::Jumping);
        assert_eq!(restored.skier.position, slope.skier.position);
        assert_eq!(restored.time_ticks, 1);
    }
}
