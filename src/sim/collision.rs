//! Collision detection between the player and platforms
//!
//! Platforms are floors only when approached from above: the axis-aligned
//! overlap test is gated on the player moving downward with some minimum
//! speed, so a player rising from below passes straight through.

use super::state::{Platform, Player};
use crate::consts::{BOUNCE_IMPULSE, MIN_FALL_SPEED};

/// Pure hit predicate: bounding boxes overlap on both axes AND the player
/// is falling faster than the minimum gate speed.
pub fn hit_test(player: &Player, platform: &Platform) -> bool {
    player.pos.y + player.height > platform.pos.y
        && player.pos.y < platform.pos.y + platform.height
        && player.pos.x + player.width > platform.pos.x
        && player.pos.x < platform.pos.x + platform.width
        && player.vel.y > MIN_FALL_SPEED
}

/// Run the hit test and, on a hit, replace the player's vertical velocity
/// with the fixed bounce impulse. No horizontal effect; when several
/// platforms overlap in one tick, the last one evaluated wins.
pub fn detect_hit(player: &mut Player, platform: &Platform) -> bool {
    let hit = hit_test(player, platform);
    if hit {
        player.vel.y = BOUNCE_IMPULSE;
    }
    hit
}
