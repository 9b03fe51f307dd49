//! Ski Slope demo entry point
//!
//! Scatters a seeded obstacle field, runs a scripted descent and logs what
//! happened. Usage: `ski-slope [settings.json] [seed]`

use anyhow::{Context, Result};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ski_slope::Settings;
use ski_slope::sim::{
    Command, GamePhase, ImageAtlas, ImageName, Obstacle, ObstacleKind, Skier, Slope, TickInput,
    tick,
};

/// Simulated milliseconds per frame (~60 fps)
const FRAME_MS: u64 = 16;
/// Frames to simulate
const DEMO_FRAMES: u64 = 600;
/// Obstacles scattered down the course
const OBSTACLE_COUNT: usize = 80;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Ski Slope (native demo) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed
            .parse::<u64>()
            .with_context(|| format!("invalid seed '{seed}'"))?,
        None => 12345,
    };

    let mut slope = Slope::new(
        Skier::with_settings(Vec2::ZERO, &settings),
        scatter_obstacles(seed, OBSTACLE_COUNT),
        sprite_sizes(),
    );

    for frame in 0..DEMO_FRAMES {
        let input = scripted_input(frame);
        tick(&mut slope, &input, frame * FRAME_MS);
        if slope.phase() == GamePhase::GameOver {
            break;
        }
    }

    let skier = &slope.skier;
    log::info!(
        "Finished after {} ticks: state={:?}, direction={:?}, distance={}",
        slope.time_ticks,
        skier.state(),
        skier.direction(),
        skier.distance_travelled()
    );
    println!("Pixels gained: {}", skier.distance_travelled());

    let snapshot = serde_json::to_string_pretty(skier).context("serializing skier snapshot")?;
    log::debug!("Final skier snapshot:\n{}", snapshot);

    Ok(())
}

/// Place obstacles below the start line, deterministically from `seed`
fn scatter_obstacles(seed: u64, count: usize) -> Vec<Obstacle> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
            let position = Vec2::new(
                rng.random_range(-400.0..400.0),
                rng.random_range(150.0..6000.0),
            );
            Obstacle::new(kind, position)
        })
        .collect()
}

/// Sizes of the sprite images as they would come back from the loader
fn sprite_sizes() -> ImageAtlas {
    let mut atlas = ImageAtlas::new();
    for name in ImageName::ALL {
        let size = match name {
            ImageName::SkierCrash => Vec2::new(30.0, 31.0),
            ImageName::SkierLeft | ImageName::SkierRight => Vec2::new(24.0, 28.0),
            ImageName::SkierLeftDown | ImageName::SkierRightDown => Vec2::new(24.0, 30.0),
            ImageName::SkierDown => Vec2::new(17.0, 34.0),
            ImageName::Tree => Vec2::new(28.0, 30.0),
            ImageName::TreeCluster => Vec2::new(60.0, 64.0),
            ImageName::Rock1 => Vec2::new(23.0, 11.0),
            ImageName::Rock2 => Vec2::new(32.0, 13.0),
            ImageName::JumpRamp => Vec2::new(36.0, 16.0),
            ImageName::SkierJump1
            | ImageName::SkierJump2
            | ImageName::SkierJump3
            | ImageName::SkierJump4
            | ImageName::SkierJump5 => Vec2::new(32.0, 34.0),
            _ => Vec2::new(54.0, 36.0),
        };
        atlas.insert(name, size);
    }
    atlas
}

/// A little weaving pattern with the odd jump and crash recovery
fn scripted_input(frame: u64) -> TickInput {
    let command = match frame % 120 {
        0 => Some(Command::Left),
        30 => Some(Command::Down),
        45 => Some(Command::Jump),
        60 => Some(Command::Right),
        90 => Some(Command::Down),
        _ => None,
    };
    TickInput {
        commands: command.into_iter().collect(),
    }
}
