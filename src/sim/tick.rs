//! Fixed timestep simulation tick
//!
//! Advances the game by one step in a fixed order: loss check, steering,
//! physics integration, per-platform collision/scroll/score, recycling,
//! horizontal wraparound. Driven externally on a 22 ms cadence.

use super::collision::detect_hit;
use super::platforms;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::input::Steer;
use crate::render::Surface;

/// Input for a single tick.
///
/// Steering is sticky: a `Some` overwrites the player's horizontal velocity
/// and nothing ever zeroes it. There is no key-up handling; the assignment
/// holds until the opposite direction is pressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub steer: Option<Steer>,
}

/// Advance the game by one fixed step, drawing onto `surface`.
///
/// Returns `GameEvent::GameOver` exactly once, on the tick the player first
/// falls below the field; every tick after that is a frozen no-op.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    surface: &mut dyn Surface,
) -> Option<GameEvent> {
    // Loss check runs first; the dying tick does not simulate.
    if state.player.alive && state.player.pos.y > state.field.height {
        state.player.alive = false;
        let final_score = state.score.rounded();
        log::info!(
            "Game over at tick {} with score {}",
            state.time_ticks,
            final_score
        );
        return Some(GameEvent::GameOver { final_score });
    }
    if !state.player.alive {
        return None;
    }

    if let Some(steer) = input.steer {
        state.player.vel.x = steer.velocity();
    }

    surface.clear(state.field.width, state.field.height);

    // Integrate player physics and paint.
    state.player.vel.y += GRAVITY;
    state.player.pos.y += state.player.vel.y;
    state.player.pos.x += state.player.vel.x;
    state.player.draw(surface);

    for platform in &mut state.platforms {
        platform.draw(surface);
        detect_hit(&mut state.player, platform);
        platform.pos.y += platform.dy;
        platforms::update_scroll(&state.player, platform);
        // Once per scrolling platform per tick; score accrues faster with
        // more platforms in motion.
        if platform.dy != 0.0 {
            state.score.bump();
        }
    }

    platforms::prune_and_replenish(&mut state.rng, &state.field, &mut state.platforms);

    wrap_horizontal(state);

    state.time_ticks += 1;
    None
}

/// Pac-Man style wraparound: exiting one side re-enters from the other.
fn wrap_horizontal(state: &mut GameState) {
    let player = &mut state.player;
    if player.pos.x - WRAP_MARGIN <= -player.width {
        player.pos.x = state.field.width - player.width;
    }
    if player.pos.x + WRAP_MARGIN >= state.field.width {
        player.pos.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSurface;
    use crate::sim::state::Field;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, Field::new(500.0, 800.0))
    }

    #[test]
    fn test_gravity_accumulates_each_tick() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        // Park the player mid-air, clear of every platform.
        state.platforms.clear();
        state.player.pos.y = 100.0;
        state.player.vel.y = 0.0;

        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.vel.y, GRAVITY);
        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.vel.y, GRAVITY * 2.0);
    }

    #[test]
    fn test_steering_is_sticky() {
        let mut state = new_state(1);
        let mut surface = NullSurface;

        let left = TickInput {
            steer: Some(Steer::Left),
        };
        tick(&mut state, &left, &mut surface);
        assert_eq!(state.player.vel.x, -5.0);

        // No new input: the assignment persists.
        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.vel.x, -5.0);

        let right = TickInput {
            steer: Some(Steer::Right),
        };
        tick(&mut state, &right, &mut surface);
        assert_eq!(state.player.vel.x, 5.0);
    }

    #[test]
    fn test_wraparound_left_edge() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        state.platforms.clear();
        state.player.pos.y = 100.0;
        state.player.pos.x = -(state.player.width + 1.0);
        state.player.vel.x = 0.0;

        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.pos.x, state.field.width - state.player.width);
    }

    #[test]
    fn test_wraparound_right_edge() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        state.platforms.clear();
        state.player.pos.y = 100.0;
        state.player.pos.x = state.field.width - 1.0;
        state.player.vel.x = 0.0;

        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.pos.x, 0.0);
    }

    #[test]
    fn test_game_over_fires_once_then_freezes() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        state.player.pos.y = state.field.height + 1.0;

        let event = tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(event, Some(GameEvent::GameOver { final_score: 0 }));
        assert!(!state.player.alive);

        // Frozen: no further events, no further simulation.
        let ticks_at_death = state.time_ticks;
        for _ in 0..5 {
            assert_eq!(tick(&mut state, &TickInput::default(), &mut surface), None);
        }
        assert_eq!(state.time_ticks, ticks_at_death);
        assert!(!state.player.alive);
    }

    #[test]
    fn test_score_accrues_per_scrolling_platform() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        // Player in the scroll band, far left of the only platform so no
        // collisions interfere.
        state.platforms = vec![crate::sim::Platform::new(400.0, 300.0)];
        state.player.pos = glam::Vec2::new(0.0, 300.0);
        state.player.vel.x = 0.0;

        let mut displayed = Vec::new();
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), &mut surface);
            displayed.push(state.score.rounded());
        }
        // Replenishment grows the population by one per tick and every
        // scrolling platform bumps once, so cumulative bumps run
        // 1, 3, 6, 10, 15 -> displayed floors 0, 0, 1, 2, 3.
        assert_eq!(displayed, vec![0, 0, 1, 2, 3]);
        assert_eq!(state.platforms[0].dy, SCROLL_SPEED);
    }

    #[test]
    fn test_score_monotonic_while_alive() {
        let mut state = new_state(42);
        let mut surface = NullSurface;
        let mut last = state.score.rounded();

        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), &mut surface);
            if !state.player.alive {
                break;
            }
            let now = state.score.rounded();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_population_recovers_toward_minimum() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        // Park the player below the scroll band so nothing moves or dies.
        state.player.pos.y = 500.0;
        state.player.vel.y = -20.0;
        state.platforms.truncate(8);

        for expected in [9, 10, 11, 12] {
            tick(&mut state, &TickInput::default(), &mut surface);
            assert_eq!(state.platforms.len(), expected);
        }

        // At the floor: no further spawns.
        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.platforms.len(), 12);
    }

    #[test]
    fn test_bounce_through_full_tick() {
        let mut state = new_state(1);
        let mut surface = NullSurface;
        // Drop the player straight onto a single platform.
        state.platforms = vec![crate::sim::Platform::new(240.0, 500.0)];
        state.player.pos = glam::Vec2::new(250.0, 495.0);
        state.player.vel = glam::Vec2::new(0.0, 4.0);

        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.vel.y, BOUNCE_IMPULSE);

        // Next tick: rising, so the platform no longer registers.
        tick(&mut state, &TickInput::default(), &mut surface);
        assert_eq!(state.player.vel.y, BOUNCE_IMPULSE + GRAVITY);
    }

    #[test]
    fn test_identical_runs_stay_identical() {
        let mut a = new_state(1234);
        let mut b = new_state(1234);
        let mut surface = NullSurface;

        let inputs = [
            TickInput {
                steer: Some(Steer::Left),
            },
            TickInput::default(),
            TickInput {
                steer: Some(Steer::Right),
            },
            TickInput::default(),
        ];
        for _ in 0..100 {
            for input in &inputs {
                tick(&mut a, input, &mut surface);
                tick(&mut b, input, &mut surface);
            }
        }

        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.platforms.len(), b.platforms.len());
        assert_eq!(a.score.rounded(), b.score.rounded());
        assert_eq!(a.time_ticks, b.time_ticks);
    }
}
