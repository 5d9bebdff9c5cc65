//! Game-logic functions.
//!
//! `tick` takes an immutable reference to the current `GameState` (plus the
//! image set and an RNG handle) and returns a brand-new `GameState`.  Side
//! effects are limited to the injected RNG; sounds are returned as `cues`.

mod actor;
mod ground;
mod obstacles;

use rand::Rng;
use tracing::{debug, info};

use crate::assets::Assets;
use crate::constants::SLOT_COUNT;
use crate::entities::{Actor, Cue, GamePhase, GameState, Ground, ObstacleSet, Score};

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        actor: Actor::new(),
        obstacles: ObstacleSet::new(rng),
        ground: Ground::new(),
        score: Score::default(),
        phase: GamePhase::Playing,
        collision_cue_played: false,
        cues: Vec::new(),
        frame: 0,
    }
}

// ── Collision & scoring ──────────────────────────────────────────────────────

/// Why the run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    Obstacle,
    Ground,
}

/// Only the tracked slot can be in contact with the actor, so it is the only
/// one tested.
pub fn impact(state: &GameState, assets: &Assets) -> Option<Impact> {
    if state
        .obstacles
        .check_collision(state.score.tracked, &state.actor, assets)
    {
        Some(Impact::Obstacle)
    } else if state.ground.is_touching(&state.actor, assets) {
        Some(Impact::Ground)
    } else {
        None
    }
}

pub fn collides(state: &GameState, assets: &Assets) -> bool {
    impact(state, assets).is_some()
}

/// Award a point when the tracked slot's trailing edge has passed `actor_x`.
///
/// Scoring sets the tracked slot's flag, clears the others, and moves
/// tracking on to the next slot. Returns whether a point was awarded.
pub fn score_check(score: &mut Score, obstacles: &ObstacleSet, actor_x: i32) -> bool {
    let slot = score.tracked;
    if obstacles.trailing_edge(slot) < actor_x && !score.scored[slot] {
        score.value += 1;
        score.scored = [false; SLOT_COUNT];
        score.scored[slot] = true;
        score.tracked = (slot + 1) % SLOT_COUNT;
        true
    } else {
        false
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
///
/// `jump` is ignored once the game is over.
pub fn tick(
    state: &GameState,
    assets: &Assets,
    jump: bool,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = GameState {
        cues: Vec::new(),
        frame: state.frame + 1,
        ..state.clone()
    };

    if next.phase == GamePhase::Playing {
        if let Some(cause) = impact(&next, assets) {
            next.phase = GamePhase::GameOver;
            info!(score = next.score.value, frame = next.frame, ?cause, "game over");
        } else {
            play_step(&mut next, jump, rng);
            return next;
        }
    }

    game_over_step(&mut next, assets);
    next
}

/// Gravity first so a jump in the same tick leaves the actor tilted up.
fn play_step(state: &mut GameState, jump: bool, rng: &mut impl Rng) {
    state.actor.apply_gravity();
    if jump {
        state.actor.jump();
        state.cues.push(Cue::Jump);
    }
    state.actor.advance();

    state.ground.advance();
    state.obstacles.advance();
    state.obstacles.recycle_check(rng);

    if score_check(&mut state.score, &state.obstacles, state.actor.x) {
        debug!(score = state.score.value, next_slot = state.score.tracked, "scored");
    }
}

/// Scrolling has stopped; the actor flops down until it rests on the ground.
fn game_over_step(state: &mut GameState, assets: &Assets) {
    if !state.collision_cue_played {
        state.cues.push(Cue::Collision);
        state.collision_cue_played = true;
    }
    let airborne = !state.ground.is_touching(&state.actor, assets);
    state.actor.on_collision(airborne);
    state.actor.advance();
}
