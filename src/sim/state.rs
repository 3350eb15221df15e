//! Game state and core simulation types
//!
//! All simulation state lives here and is serializable, so a run can be
//! snapshotted and restored deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platforms;
use crate::consts::*;
use crate::render::Surface;

/// The visible play area. Dimensions come from the host layout once at
/// startup and are fixed for the life of the game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// Platform placement depends on a positive width, so a degenerate
    /// surface is a fatal configuration error at startup.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "render surface must have positive dimensions (got {width}x{height})"
        );
        Self { width, height }
    }
}

/// The player-controlled sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// `vel.x` is assigned by steering and never decays; `vel.y`
    /// accumulates gravity except when a bounce resets it
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Goes false exactly once, when the player falls below the field
    pub alive: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.0, GRAVITY),
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            alive: true,
        }
    }

    /// Paint the sprite as a filled square.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill("black");
        surface.fill_rect(self.pos.x, self.pos.y, self.width, self.height);
    }
}

/// A bounceable platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    /// Shared scroll speed while the player rides the upper band, 0 otherwise
    pub dy: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            dy: 0.0,
            width: PLATFORM_WIDTH,
            height: PLATFORM_HEIGHT,
        }
    }

    /// Paint with the surface's current fill.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.pos.x, self.pos.y, self.width, self.height);
    }
}

/// Scroll-coupled score: a floating accumulator displayed as its floor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Score {
    total: f64,
    rounded: u32,
}

impl Score {
    /// Add one scroll increment and recompute the displayed value.
    pub fn bump(&mut self) {
        self.total += SCORE_STEP;
        self.rounded = self.total.floor() as u32;
    }

    /// Displayed integer score.
    pub fn rounded(&self) -> u32 {
        self.rounded
    }
}

/// One-shot notification the tick hands back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player fell below the field; carries the final rounded score.
    GameOver { final_score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Live RNG, advanced only by platform spawns
    pub rng: Pcg32,
    pub field: Field,
    pub player: Player,
    /// Active platforms; iteration order is also collision evaluation order
    pub platforms: Vec<Platform>,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh run: player centered near the bottom of the field,
    /// foothold and ladder platforms in place.
    pub fn new(seed: u64, field: Field) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(field.width / 2.0, field.height - PLAYER_START_DROP);
        let platforms = platforms::seed_initial_platforms(&mut rng, &field, &player);
        Self {
            seed,
            rng,
            field,
            player,
            platforms,
            score: Score::default(),
            time_ticks: 0,
        }
    }

    /// Rebuild player, platforms and score for a fresh run on the same field.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed, self.field);
    }
}
