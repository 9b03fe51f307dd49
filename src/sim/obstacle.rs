//! Static obstacles on the slope
//!
//! Placement is someone else's job. The simulation only reads obstacles
//! through [`ObstacleSource`], in the source's own order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::images::{ImageLookup, ImageName};
use super::rect::Rect;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Tree,
    TreeCluster,
    Rock1,
    Rock2,
    JumpRamp,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::Tree,
        ObstacleKind::TreeCluster,
        ObstacleKind::Rock1,
        ObstacleKind::Rock2,
        ObstacleKind::JumpRamp,
    ];

    pub fn image(&self) -> ImageName {
        match self {
            ObstacleKind::Tree => ImageName::Tree,
            ObstacleKind::TreeCluster => ImageName::TreeCluster,
            ObstacleKind::Rock1 => ImageName::Rock1,
            ObstacleKind::Rock2 => ImageName::Rock2,
            ObstacleKind::JumpRamp => ImageName::JumpRamp,
        }
    }

    /// Trees stop a skier even mid-jump
    pub fn is_tree(&self) -> bool {
        matches!(self, ObstacleKind::Tree | ObstacleKind::TreeCluster)
    }
}

/// An obstacle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub position: Vec2,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, position: Vec2) -> Self {
        Self { kind, position }
    }

    /// Full image rectangle centered on the position, `None` until the image is loaded
    pub fn bounds(&self, images: &dyn ImageLookup) -> Option<Rect> {
        let size = images.image_size(self.kind.image())?;
        Some(Rect::centered(self.position, size))
    }
}

/// Read-only, ordered access to the obstacles on the slope
pub trait ObstacleSource {
    fn obstacles(&self) -> &[Obstacle];
}

impl ObstacleSource for [Obstacle] {
    fn obstacles(&self) -> &[Obstacle] {
        self
    }
}

impl ObstacleSource for Vec<Obstacle> {
    fn obstacles(&self) -> &[Obstacle] {
        self
    }
}
