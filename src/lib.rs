//! Cloud Hop - a vertical platform-bouncing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platform field, score)
//! - `render`: Render surface abstraction (canvas-2d on web, no-op headless)
//! - `input`: Keyboard-to-steering mapping
//! - `highscores`: Session-scoped best score

pub mod highscores;
pub mod input;
pub mod render;
pub mod sim;

pub use highscores::HighScore;
pub use input::{Steer, map_key};
pub use render::{NullSurface, Surface};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation cadence in milliseconds (~45 steps/second)
    pub const TICK_MS: i32 = 22;

    /// Downward acceleration applied to the player each tick
    pub const GRAVITY: f32 = 0.62;
    /// Player sprite is a square
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Player spawns this far above the bottom of the field
    pub const PLAYER_START_DROP: f32 = 70.0;
    /// Horizontal velocity assigned per steering keypress
    pub const STEER_SPEED: f32 = 5.0;
    /// Vertical velocity applied when bouncing off a platform
    pub const BOUNCE_IMPULSE: f32 = -12.0;
    /// Minimum downward speed for a platform to act as a floor
    pub const MIN_FALL_SPEED: f32 = 1.0;

    /// Platform dimensions
    pub const PLATFORM_WIDTH: f32 = 45.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    /// Random platform x is drawn from [0, field width - SPAWN_MARGIN)
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Shared downward speed of every platform while scrolling is engaged
    pub const SCROLL_SPEED: f32 = 7.0;
    /// Scrolling engages while the player is above this screen y
    pub const SCROLL_ENGAGE_Y: f32 = 400.0;
    /// Scrolling releases once the player is below this screen y
    pub const SCROLL_RELEASE_Y: f32 = 80.0;
    /// Minimum on-screen platform population
    pub const MIN_PLATFORMS: usize = 12;
    /// Recycled platforms spawn just above the visible top
    pub const RESPAWN_Y: f32 = -10.0;

    /// Foothold platform offset from the player start (guarantees a first landing)
    pub const FOOTHOLD_DX: f32 = -5.0;
    pub const FOOTHOLD_DY: f32 = 30.0;
    /// Ladder of initial platforms, as y offsets above the player start
    pub const LADDER_OFFSETS: [f32; 13] = [
        30.0, 90.0, 150.0, 220.0, 270.0, 310.0, 350.0, 400.0, 460.0, 500.0, 550.0, 600.0, 660.0,
    ];

    /// Score accumulator step per scrolling platform per tick
    pub const SCORE_STEP: f64 = 0.2;

    /// Edge slack used by the horizontal wraparound checks
    pub const WRAP_MARGIN: f32 = 5.0;
}
