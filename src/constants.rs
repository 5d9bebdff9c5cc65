//! Fixed game constants. All distances are canvas pixels; all rates are per tick.

use std::ops::Range;
use std::time::Duration;

// ── Canvas ───────────────────────────────────────────────────────────────────

pub const X_WIDTH: i32 = 500;
pub const Y_HEIGHT: i32 = 800;

pub const FPS: u64 = 30;
pub const FRAME: Duration = Duration::from_millis(1000 / FPS); // ≈33 ms

/// Scroll speed of pipes and ground, and the gravity step.
pub const VEL: i32 = 5;

// ── Actor ────────────────────────────────────────────────────────────────────

pub const ACTOR_X: i32 = 200;
pub const ACTOR_START_Y: i32 = 200;
pub const ACTOR_WIDTH: usize = 68;
pub const ACTOR_HEIGHT: usize = 48;
pub const JUMP_IMPULSE: i32 = 100;
pub const TILT_DEGREES: f32 = 45.0;
pub const ANIMATION_FRAMES: usize = 3;

// ── Obstacles ────────────────────────────────────────────────────────────────

pub const SLOT_COUNT: usize = 3;
pub const PIPE_WIDTH: i32 = 104;
pub const PIPE_HEIGHT: i32 = 640;
pub const PIPE_GAP: i32 = 200;
pub const PIPE_SPACING: i32 = 400;
pub const PIPE_FIRST_X: i32 = 500;
/// Top edge of the upper barrier, drawn fresh on every recycle.
pub const PIPE_Y_RANGE: Range<i32> = -500..-300;

// ── Ground ───────────────────────────────────────────────────────────────────

pub const GROUND_Y: i32 = 700;
pub const GROUND_HEIGHT: i32 = 100;
