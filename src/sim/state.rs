//! Skier facing direction, state, and input commands

use serde::{Deserialize, Serialize};

/// Facing direction, ordered from Left to Right so a turn is a single step
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    LeftDown = 1,
    #[default]
    Down = 2,
    RightDown = 3,
    Right = 4,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Left,
        Direction::LeftDown,
        Direction::Down,
        Direction::RightDown,
        Direction::Right,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// One step toward Left; Left stays Left
    pub fn step_left(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Direction::Left)
    }

    /// One step toward Right; Right stays Right
    pub fn step_right(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Direction::Right)
    }

    /// Fully horizontal directions don't advance downhill on their own
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// What the skier is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkierState {
    #[default]
    Skiing,
    Crashed,
    Dead,
    Jumping,
}

/// Abstract player commands (key mapping lives outside the simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Up => "up",
            Command::Down => "down",
            Command::Jump => "jump",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "up" => Some(Command::Up),
            "down" => Some(Command::Down),
            "jump" | "space" => Some(Command::Jump),
            _ => None,
        }
    }
}
