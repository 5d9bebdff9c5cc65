//! All game entity types — pure data; behaviour lives in `compute`.

use crate::constants::SLOT_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Sound effects requested by a tick; played by an `audio::CuePlayer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Collision,
}

// ── Actor ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    /// Fixed horizontal position.
    pub x: i32,
    pub y: i32,
    /// `y` before the most recent jump or gravity step.
    pub prev_y: i32,
    /// Animation frame, always below `ANIMATION_FRAMES`.
    pub frame: usize,
    /// Clockwise quarter turns applied by the death flop.
    pub spin: u32,
}

// ── Obstacles ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObstaclePair {
    pub x: i32,
    /// Top edge of the upper barrier.
    pub y: i32,
}

/// Three recycled pairs, `PIPE_SPACING` apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleSet {
    pub slots: [ObstaclePair; SLOT_COUNT],
}

// ── Ground ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ground {
    /// Left edge of the first strip copy, in `-X_WIDTH..=0`.
    pub x: i32,
    pub y: i32,
}

// ── Score ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    /// One flag per slot; set for the slot that scored last.
    pub scored: [bool; SLOT_COUNT],
    /// Slot nearest the actor: the only one checked for collision and scoring.
    pub tracked: usize,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The whole simulation context.  Cloneable so `compute::tick` can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub actor: Actor,
    pub obstacles: ObstacleSet,
    pub ground: Ground,
    pub score: Score,
    pub phase: GamePhase,
    /// Latch so the collision cue fires exactly once.
    pub collision_cue_played: bool,
    /// Cues emitted by the latest tick only.
    pub cues: Vec<Cue>,
    pub frame: u64,
}
