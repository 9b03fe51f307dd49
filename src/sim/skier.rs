//! The player-controlled skier
//!
//! Owns direction, speed and state. Each tick it animates a running jump,
//! moves along its facing direction, then checks ramps and obstacles.
//! Crashed and dead skiers don't move on their own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{JumpAnimator, JumpStep};
use super::collision;
use super::images::{ImageLookup, ImageName, direction_image};
use super::obstacle::ObstacleSource;
use super::rect::Rect;
use super::state::{Command, Direction, SkierState};
use crate::GameTime;
use crate::settings::Settings;

/// The skier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skier {
    /// World position (y grows downhill)
    pub position: Vec2,
    direction: Direction,
    /// Current speed, zero while crashed or dead
    speed: f32,
    state: SkierState,
    /// Image currently displayed; always follows direction, crash or jump frame
    image_name: ImageName,
    starting_speed: f32,
    diagonal_speed_reducer: f32,
    jump_animator: JumpAnimator,
}

impl Skier {
    pub fn new(position: Vec2) -> Self {
        Self::with_settings(position, &Settings::default())
    }

    /// Build a skier from tuning; out-of-range tuning falls back to defaults
    pub fn with_settings(position: Vec2, settings: &Settings) -> Self {
        let defaults = Settings::default();
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                log::warn!("Ignoring skier settings: {}", err);
                &defaults
            }
        };
        let direction = Direction::Down;
        Self {
            position,
            direction,
            speed: settings.starting_speed,
            state: SkierState::Skiing,
            image_name: direction_image(direction),
            starting_speed: settings.starting_speed,
            diagonal_speed_reducer: settings.diagonal_speed_reducer,
            jump_animator: JumpAnimator::new(settings.animation_frame_speed),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn state(&self) -> SkierState {
        self.state
    }

    pub fn image_name(&self) -> ImageName {
        self.image_name
    }

    pub fn starting_speed(&self) -> f32 {
        self.starting_speed
    }

    pub fn jump_animator(&self) -> &JumpAnimator {
        &self.jump_animator
    }

    pub fn is_skiing(&self) -> bool {
        self.state == SkierState::Skiing
    }

    pub fn is_crashed(&self) -> bool {
        self.state == SkierState::Crashed
    }

    pub fn is_jumping(&self) -> bool {
        self.state == SkierState::Jumping
    }

    pub fn is_dead(&self) -> bool {
        self.state == SkierState::Dead
    }

    /// A dead skier isn't drawn
    pub fn is_visible(&self) -> bool {
        !self.is_dead()
    }

    /// Distance gained down the slope, as shown in the stats readout
    pub fn distance_travelled(&self) -> i64 {
        self.position.y.ceil() as i64
    }

    /// Face `direction` and show its image
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.set_directional_image();
    }

    pub fn set_directional_image(&mut self) {
        self.image_name = direction_image(self.direction);
    }

    /// Advance one tick: animate a jump, move, then check ramps and obstacles
    pub fn update<S>(&mut self, time: GameTime, obstacles: &S, images: &dyn ImageLookup)
    where
        S: ObstacleSource + ?Sized,
    {
        if !(self.is_skiing() || self.is_jumping()) {
            return;
        }

        if self.is_jumping() {
            self.animate_jump(time);
        }
        self.move_skier();
        self.check_if_hit_obstacle(obstacles, images);
    }

    fn animate_jump(&mut self, time: GameTime) {
        match self.jump_animator.animate(time) {
            JumpStep::Landed => {
                self.set_direction(self.direction);
                self.set_state(SkierState::Skiing);
                log::debug!("Skier landed at ({:.1}, {:.1})", self.position.x, self.position.y);
            }
            JumpStep::Frame(image) => self.image_name = image,
            JumpStep::Hold => {}
        }
    }

    /// Per-tick movement along the facing direction
    pub fn move_skier(&mut self) {
        match self.direction {
            Direction::LeftDown => self.move_skier_left_down(),
            Direction::Down => self.move_skier_down(),
            Direction::RightDown => self.move_skier_right_down(),
            // Fully horizontal facing only moves on explicit input
            Direction::Left | Direction::Right => {}
        }
    }

    fn move_skier_left(&mut self) {
        self.position.x -= self.starting_speed;
    }

    fn move_skier_left_down(&mut self) {
        let step = self.speed / self.diagonal_speed_reducer;
        self.position.x -= step;
        self.position.y += step;
    }

    fn move_skier_down(&mut self) {
        self.position.y += self.speed;
    }

    fn move_skier_right_down(&mut self) {
        let step = self.speed / self.diagonal_speed_reducer;
        self.position.x += step;
        self.position.y += step;
    }

    fn move_skier_right(&mut self) {
        self.position.x += self.starting_speed;
    }

    fn move_skier_up(&mut self) {
        self.position.y -= self.starting_speed;
    }

    /// Apply a player command; returns false if it was ignored
    pub fn handle_input(&mut self, command: Command) -> bool {
        if self.is_dead() {
            return false;
        }

        match command {
            Command::Left => self.turn_left(),
            Command::Right => self.turn_right(),
            Command::Up => self.turn_up(),
            Command::Down => self.turn_down(),
            Command::Jump => self.jump(),
        }
        true
    }

    /// Apply a command given by name; unknown names are not handled
    pub fn handle_named_input(&mut self, name: &str) -> bool {
        match Command::from_name(name) {
            Some(command) => self.handle_input(command),
            None => false,
        }
    }

    /// Recovers from a crash first, then turns (or steps, if already facing left)
    pub fn turn_left(&mut self) {
        if self.is_crashed() {
            self.recover_from_crash(Direction::Left);
        }

        if self.direction == Direction::Left {
            self.move_skier_left();
        } else {
            self.set_direction(self.direction.step_left());
        }
    }

    pub fn turn_right(&mut self) {
        if self.is_crashed() {
            self.recover_from_crash(Direction::Right);
        }

        if self.direction == Direction::Right {
            self.move_skier_right();
        } else {
            self.set_direction(self.direction.step_right());
        }
    }

    /// Only a sideways-facing skier can climb
    pub fn turn_up(&mut self) {
        if self.is_crashed() {
            return;
        }

        if self.direction.is_horizontal() {
            self.move_skier_up();
        }
    }

    pub fn turn_down(&mut self) {
        if self.is_crashed() {
            return;
        }

        self.set_direction(Direction::Down);
    }

    pub fn jump(&mut self) {
        if self.is_crashed() {
            return;
        }

        self.set_state(SkierState::Jumping);
        self.speed = self.starting_speed;
    }

    /// Collision box, `None` until the current image's size is known
    ///
    /// The bottom edge sits a quarter image height above the position rather
    /// than half below it, so a crashed skier ends up inside the obstacle.
    pub fn bounds(&self, images: &dyn ImageLookup) -> Option<Rect> {
        let size = images.image_size(self.image_name)?;
        Some(Rect::new(
            self.position.x - size.x / 2.0,
            self.position.y - size.y / 2.0,
            self.position.x + size.x / 2.0,
            self.position.y - size.y / 4.0,
        ))
    }

    /// Launch off the first ramp the skier overlaps
    pub fn jump_on_ramp_hit<S>(&mut self, obstacles: &S, images: &dyn ImageLookup)
    where
        S: ObstacleSource + ?Sized,
    {
        let Some(bounds) = self.bounds(images) else {
            return;
        };
        if let Some(ramp) = collision::find_jump_ramp(&bounds, obstacles.obstacles(), images) {
            log::debug!("Jump ramp hit at ({:.1}, {:.1})", ramp.position.x, ramp.position.y);
            self.set_state(SkierState::Jumping);
            self.speed = self.starting_speed;
        }
    }

    /// Ramps first, then crash into whatever the skier hit
    pub fn check_if_hit_obstacle<S>(&mut self, obstacles: &S, images: &dyn ImageLookup)
    where
        S: ObstacleSource + ?Sized,
    {
        if self.bounds(images).is_none() {
            return;
        }

        self.jump_on_ramp_hit(obstacles, images);

        let bounds = self.bounds(images);
        if let Some(obstacle) =
            collision::find_collision(bounds.as_ref(), self.state, obstacles.obstacles(), images)
        {
            log::info!(
                "Skier crashed into {:?} at ({:.1}, {:.1})",
                obstacle.kind,
                obstacle.position.x,
                obstacle.position.y
            );
            self.crash();
        }
    }

    pub fn crash(&mut self) {
        self.state = SkierState::Crashed;
        self.speed = 0.0;
        self.image_name = ImageName::SkierCrash;
    }

    pub fn recover_from_crash(&mut self, new_direction: Direction) {
        log::debug!("Skier recovering toward {:?}", new_direction);
        self.state = SkierState::Skiing;
        self.speed = self.starting_speed;
        self.set_direction(new_direction);
    }

    /// Caught by something outside the simulation core
    pub fn die(&mut self) {
        log::info!("Skier died at distance {}", self.distance_travelled());
        self.state = SkierState::Dead;
        self.speed = 0.0;
    }

    /// Entering Jumping restarts the jump animation
    pub fn set_state(&mut self, new_state: SkierState) {
        self.state = new_state;

        if self.state == SkierState::Jumping {
            self.image_name = self.jump_animator.init();
        }
    }
}
