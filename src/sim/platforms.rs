//! Platform field management
//!
//! Spawning at random x, the initial foothold + ladder, the shared scroll
//! band, and the prune/replenish recycling that makes the climb endless.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Field, Platform, Player};
use crate::consts::*;

/// Create a platform at the given height with a fresh random x in
/// `[0, field width - SPAWN_MARGIN)`, floored to a whole pixel.
pub fn spawn_platform(rng: &mut Pcg32, field: &Field, y: f32) -> Platform {
    let x = rng.random_range(0.0..field.width - SPAWN_MARGIN).floor();
    Platform::new(x, y)
}

/// Initial population: one foothold directly beneath the player so the
/// first fall always lands, then a hand-tuned ladder of platforms climbing
/// up past the visible top.
pub fn seed_initial_platforms(rng: &mut Pcg32, field: &Field, player: &Player) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(1 + LADDER_OFFSETS.len());
    platforms.push(Platform::new(
        player.pos.x + FOOTHOLD_DX,
        player.pos.y + FOOTHOLD_DY,
    ));
    for offset in LADDER_OFFSETS {
        platforms.push(spawn_platform(rng, field, player.pos.y - offset));
    }
    platforms
}

/// Engage the shared scroll while the player is above the upper threshold;
/// release it once the player has fallen back past the lower one. In
/// between, the platform keeps whatever speed it already had.
pub fn update_scroll(player: &Player, platform: &mut Platform) {
    if player.pos.y < SCROLL_ENGAGE_Y {
        platform.dy = SCROLL_SPEED;
    } else if player.pos.y > SCROLL_RELEASE_Y {
        platform.dy = 0.0;
    }
}

/// Drop platforms that scrolled off the bottom, then top the population
/// back up with one spawn just above the visible top.
pub fn prune_and_replenish(rng: &mut Pcg32, field: &Field, platforms: &mut Vec<Platform>) {
    platforms.retain(|p| p.pos.y <= field.height);
    if platforms.len() < MIN_PLATFORMS {
        let fresh = spawn_platform(rng, field, RESPAWN_Y);
        platforms.push(fresh);
    }
}
