//! Sprite names, the direction/jump image tables, and image size lookup
//!
//! The simulation never touches pixels. It only needs to know the on-screen
//! size of whichever image is currently named, and only to build bounds.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Direction;

/// Every sprite in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageName {
    SkierCrash,
    SkierLeft,
    SkierLeftDown,
    SkierDown,
    SkierRightDown,
    SkierRight,
    SkierJump1,
    SkierJump2,
    SkierJump3,
    SkierJump4,
    SkierJump5,
    Tree,
    TreeCluster,
    Rock1,
    Rock2,
    JumpRamp,
    Rhino,
    RhinoRun1,
    RhinoRun2,
    RhinoEat1,
    RhinoEat2,
    RhinoEat3,
    RhinoEat4,
    RhinoCelebrate1,
    RhinoCelebrate2,
}

impl ImageName {
    pub const ALL: [ImageName; 25] = [
        ImageName::SkierCrash,
        ImageName::SkierLeft,
        ImageName::SkierLeftDown,
        ImageName::SkierDown,
        ImageName::SkierRightDown,
        ImageName::SkierRight,
        ImageName::SkierJump1,
        ImageName::SkierJump2,
        ImageName::SkierJump3,
        ImageName::SkierJump4,
        ImageName::SkierJump5,
        ImageName::Tree,
        ImageName::TreeCluster,
        ImageName::Rock1,
        ImageName::Rock2,
        ImageName::JumpRamp,
        ImageName::Rhino,
        ImageName::RhinoRun1,
        ImageName::RhinoRun2,
        ImageName::RhinoEat1,
        ImageName::RhinoEat2,
        ImageName::RhinoEat3,
        ImageName::RhinoEat4,
        ImageName::RhinoCelebrate1,
        ImageName::RhinoCelebrate2,
    ];

    /// Path of the image file, relative to the asset root
    pub fn asset_path(&self) -> &'static str {
        match self {
            ImageName::SkierCrash => "img/skier_crash.png",
            ImageName::SkierLeft => "img/skier_left.png",
            ImageName::SkierLeftDown => "img/skier_left_down.png",
            ImageName::SkierDown => "img/skier_down.png",
            ImageName::SkierRightDown => "img/skier_right_down.png",
            ImageName::SkierRight => "img/skier_right.png",
            ImageName::SkierJump1 => "img/skier_jump_1.png",
            ImageName::SkierJump2 => "img/skier_jump_2.png",
            ImageName::SkierJump3 => "img/skier_jump_3.png",
            ImageName::SkierJump4 => "img/skier_jump_4.png",
            ImageName::SkierJump5 => "img/skier_jump_5.png",
            ImageName::Tree => "img/tree_1.png",
            ImageName::TreeCluster => "img/tree_cluster.png",
            ImageName::Rock1 => "img/rock_1.png",
            ImageName::Rock2 => "img/rock_2.png",
            ImageName::JumpRamp => "img/jump_ramp.png",
            ImageName::Rhino => "img/rhino_default.png",
            ImageName::RhinoRun1 => "img/rhino_run_left.png",
            ImageName::RhinoRun2 => "img/rhino_run_left_2.png",
            ImageName::RhinoEat1 => "img/rhino_eat_1.png",
            ImageName::RhinoEat2 => "img/rhino_eat_2.png",
            ImageName::RhinoEat3 => "img/rhino_eat_3.png",
            ImageName::RhinoEat4 => "img/rhino_eat_4.png",
            ImageName::RhinoCelebrate1 => "img/rhino_celebrate_1.png",
            ImageName::RhinoCelebrate2 => "img/rhino_celebrate_2.png",
        }
    }
}

/// Image shown for the skier while facing `direction`
pub fn direction_image(direction: Direction) -> ImageName {
    match direction {
        Direction::Left => ImageName::SkierLeft,
        Direction::LeftDown => ImageName::SkierLeftDown,
        Direction::Down => ImageName::SkierDown,
        Direction::RightDown => ImageName::SkierRightDown,
        Direction::Right => ImageName::SkierRight,
    }
}

/// Frames of the jump animation, in play order
pub const JUMP_IMAGES: [ImageName; 5] = [
    ImageName::SkierJump1,
    ImageName::SkierJump2,
    ImageName::SkierJump3,
    ImageName::SkierJump4,
    ImageName::SkierJump5,
];

/// Resolves the on-screen size of an image
///
/// `None` means the image has not been loaded yet, which disables anything
/// that depends on bounds.
pub trait ImageLookup {
    fn image_size(&self, name: ImageName) -> Option<Vec2>;
}

/// In-memory table of loaded image sizes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAtlas {
    sizes: HashMap<ImageName, Vec2>,
}

impl ImageAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{ "skierDown": [width, height], ... }` table
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Record the size of a loaded image
    pub fn insert(&mut self, name: ImageName, size: Vec2) {
        self.sizes.insert(name, size);
    }

    /// Builder-style variant of `insert`
    pub fn with(mut self, name: ImageName, size: Vec2) -> Self {
        self.insert(name, size);
        self
    }

    /// Forget an image (e.g. unloaded)
    pub fn remove(&mut self, name: ImageName) {
        self.sizes.remove(&name);
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl ImageLookup for ImageAtlas {
    fn image_size(&self, name: ImageName) -> Option<Vec2> {
        self.sizes.get(&name).copied()
    }
}
