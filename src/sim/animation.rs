//! Frame sequences and the time-driven jump animation
//!
//! The animator never touches the skier. It reports what happened as a
//! [`JumpStep`] and the skier applies it.

use serde::{Deserialize, Serialize};

use super::images::{ImageName, JUMP_IMAGES};
use crate::GameTime;
use crate::consts::ANIMATION_FRAME_SPEED;

/// An ordered list of frames plus a loop flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    images: Vec<ImageName>,
    looping: bool,
}

impl Animation {
    pub fn new(images: impl Into<Vec<ImageName>>, looping: bool) -> Self {
        Self {
            images: images.into(),
            looping,
        }
    }

    pub fn images(&self) -> &[ImageName] {
        &self.images
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Outcome of one animator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStep {
    /// Nothing to animate anymore: the jump is over
    Landed,
    /// Moved on to this frame
    Frame(ImageName),
    /// No visible change this call
    Hold,
}

/// Drives the jump frames at a fixed cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpAnimator {
    /// Active sequence, `None` once it has run out
    animation: Option<Animation>,
    /// Index of the frame currently shown
    image_counter: usize,
    /// Time of the last frame change
    last_image_time: GameTime,
    /// Minimum time between frame changes
    frame_speed: GameTime,
}

impl Default for JumpAnimator {
    fn default() -> Self {
        Self::new(ANIMATION_FRAME_SPEED)
    }
}

impl JumpAnimator {
    pub fn new(frame_speed: GameTime) -> Self {
        Self {
            animation: None,
            image_counter: 0,
            last_image_time: 0,
            frame_speed,
        }
    }

    /// Start the jump sequence over; returns the first frame to display
    ///
    /// The last-change timestamp is left alone, so the first advance can
    /// come on the very next call if the previous change is long past.
    pub fn init(&mut self) -> ImageName {
        let animation = Animation::new(JUMP_IMAGES, false);
        let first = animation.images()[0];
        self.animation = Some(animation);
        self.image_counter = 0;
        first
    }

    /// Advance the animation for the current time
    pub fn animate(&mut self, time: GameTime) -> JumpStep {
        if self.animation.is_none() {
            return JumpStep::Landed;
        }
        if self.passed_frame_interval(time) {
            self.next_image(time)
        } else {
            JumpStep::Hold
        }
    }

    /// Step to the next frame, dropping the animation once it runs out
    ///
    /// Running out does not land the skier here. That is reported by the
    /// following `animate` call, so the last frame stays up for a full interval.
    pub fn next_image(&mut self, time: GameTime) -> JumpStep {
        let Some(animation) = self.animation.as_ref() else {
            return JumpStep::Hold;
        };

        self.last_image_time = time;
        self.image_counter += 1;

        if self.image_counter >= animation.len() {
            log::debug!("Jump animation finished at t={}", time);
            self.animation = None;
            JumpStep::Hold
        } else {
            JumpStep::Frame(animation.images()[self.image_counter])
        }
    }

    fn passed_frame_interval(&self, time: GameTime) -> bool {
        time.saturating_sub(self.last_image_time) > self.frame_speed
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn frame_index(&self) -> usize {
        self.image_counter
    }

    pub fn current_image(&self) -> Option<ImageName> {
        self.animation
            .as_ref()
            .and_then(|a| a.images().get(self.image_counter).copied())
    }
}
