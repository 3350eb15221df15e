//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the game state
//! - Rendering goes through the injected `Surface` trait, never a backend

pub mod collision;
pub mod platforms;
pub mod state;
pub mod tick;

pub use collision::{detect_hit, hit_test};
pub use platforms::{prune_and_replenish, seed_initial_platforms, spawn_platform, update_scroll};
pub use state::{Field, GameEvent, GameState, Platform, Player, Score};
pub use tick::{TickInput, tick};
