//! Image set for the game, drawn in code at startup at final pixel size.
//!
//! Static images have their collision masks built once here; the actor's mask
//! depends on its current pose and is rebuilt on demand in `compute::actor`.

use crate::constants::{
    ACTOR_HEIGHT, ACTOR_WIDTH, GROUND_HEIGHT, GROUND_Y, PIPE_HEIGHT, PIPE_WIDTH, X_WIDTH,
    Y_HEIGHT,
};
use crate::mask::Mask;
use crate::sprite::{Rgb, Sprite};

// ── Palette ──────────────────────────────────────────────────────────────────

const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const CLOUD: Rgb = Rgb(245, 250, 252);
const SKYLINE: Rgb = Rgb(160, 205, 190);
const SKYLINE_WINDOW: Rgb = Rgb(200, 230, 215);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const GRASS_EDGE: Rgb = Rgb(60, 120, 40);
const DIRT: Rgb = Rgb(210, 185, 110);
const DIRT_DARK: Rgb = Rgb(185, 160, 90);
const PIPE_DARK: Rgb = Rgb(74, 122, 26);
const PIPE_MID: Rgb = Rgb(100, 170, 40);
const PIPE_LIGHT: Rgb = Rgb(145, 215, 62);
const PIPE_CAP: Rgb = Rgb(60, 100, 20);
const BIRD_BODY: Rgb = Rgb(245, 200, 66);
const BIRD_BELLY: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(230, 150, 40);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(240, 110, 40);

/// Pipe cap height in pixels; the shaft is inset `PIPE_INSET` on each side.
const PIPE_CAP_HEIGHT: i32 = 40;
const PIPE_INSET: i32 = 6;

/// Row of the wing centre for each animation frame (up, level, down).
const WING_ROWS: [i32; 3] = [18, 26, 34];

#[derive(Clone, Debug)]
pub struct Assets {
    pub background: Sprite,
    pub ground: Sprite,
    /// Upright barrier (cap on top); drawn as the bottom half of a pair.
    pub pipe: Sprite,
    /// Vertical mirror of `pipe`; drawn as the top half of a pair.
    pub pipe_flipped: Sprite,
    pub bird_frames: [Sprite; 3],
    pub pipe_mask: Mask,
    pub pipe_flipped_mask: Mask,
    pub ground_mask: Mask,
}

impl Assets {
    pub fn load() -> Self {
        let pipe = draw_pipe();
        let pipe_flipped = pipe.flip_vertical();
        let ground = draw_ground();
        Self {
            background: draw_background(),
            pipe_mask: Mask::from_sprite(&pipe),
            pipe_flipped_mask: Mask::from_sprite(&pipe_flipped),
            ground_mask: Mask::from_sprite(&ground),
            bird_frames: [draw_bird(WING_ROWS[0]), draw_bird(WING_ROWS[1]), draw_bird(WING_ROWS[2])],
            pipe,
            pipe_flipped,
            ground,
        }
    }
}

// ── Drawing ──────────────────────────────────────────────────────────────────

fn draw_background() -> Sprite {
    let (w, h) = (X_WIDTH as usize, Y_HEIGHT as usize);
    let mut img = Sprite::filled(w, h, SKY_BOT);

    for y in 0..GROUND_Y {
        let t = (y * 255 / GROUND_Y) as u8;
        img.fill_rect(0, y, X_WIDTH, 1, Rgb::lerp(SKY_TOP, SKY_BOT, t));
    }

    for &(cx, cy) in &[(80, 120), (330, 80), (430, 260), (170, 330)] {
        img.fill_ellipse(cx, cy, 40, 16, CLOUD);
        img.fill_ellipse(cx + 30, cy - 10, 28, 14, CLOUD);
        img.fill_ellipse(cx - 28, cy + 4, 22, 10, CLOUD);
    }

    // Skyline: (left, width, height) of each block, standing on the ground line.
    let blocks = [
        (0, 60, 90),
        (60, 40, 140),
        (100, 70, 70),
        (170, 50, 120),
        (220, 80, 95),
        (300, 45, 160),
        (345, 65, 85),
        (410, 90, 130),
    ];
    for &(left, width, height) in &blocks {
        let top = GROUND_Y - height;
        img.fill_rect(left, top, width, height, SKYLINE);
        for wy in (top + 10..GROUND_Y - 10).step_by(20) {
            for wx in (left + 8..left + width - 8).step_by(16) {
                img.fill_rect(wx, wy, 6, 8, SKYLINE_WINDOW);
            }
        }
    }
    img
}

fn draw_ground() -> Sprite {
    let mut img = Sprite::filled(X_WIDTH as usize, GROUND_HEIGHT as usize, DIRT);
    img.fill_rect(0, 0, X_WIDTH, 14, GRASS);
    img.fill_rect(0, 0, X_WIDTH, 3, GRASS_LIGHT);
    img.fill_rect(0, 14, X_WIDTH, 3, GRASS_EDGE);

    // Diagonal stripes with a 20 px period so the strip tiles seamlessly.
    for y in 17..GROUND_HEIGHT {
        for x in 0..X_WIDTH {
            if ((x + y) / 10) % 2 == 0 {
                img.set(x, y, Some(DIRT_DARK));
            }
        }
    }
    img
}

fn draw_pipe() -> Sprite {
    let mut img = Sprite::new(PIPE_WIDTH as usize, PIPE_HEIGHT as usize);
    let shaft = PIPE_WIDTH - 2 * PIPE_INSET;

    for x in 0..shaft {
        let color = match x * 4 / shaft {
            0 => PIPE_DARK,
            1 | 2 => PIPE_MID,
            _ => PIPE_LIGHT,
        };
        img.fill_rect(PIPE_INSET + x, PIPE_CAP_HEIGHT, 1, PIPE_HEIGHT - PIPE_CAP_HEIGHT, color);
    }

    img.fill_rect(0, 0, PIPE_WIDTH, PIPE_CAP_HEIGHT, PIPE_MID);
    img.fill_rect(0, 0, PIPE_WIDTH, 4, PIPE_CAP);
    img.fill_rect(0, PIPE_CAP_HEIGHT - 4, PIPE_WIDTH, 4, PIPE_CAP);
    img.fill_rect(PIPE_WIDTH - 16, 4, 8, PIPE_CAP_HEIGHT - 8, PIPE_LIGHT);
    img
}

/// One animation frame; only the wing moves, so every frame shares the
/// body outline (and therefore the lowest solid row).
fn draw_bird(wing_row: i32) -> Sprite {
    let mut img = Sprite::new(ACTOR_WIDTH, ACTOR_HEIGHT);
    img.fill_ellipse(8, 22, 7, 6, BIRD_WING); // tail
    img.fill_ellipse(34, 26, 26, 20, BIRD_BODY);
    img.fill_ellipse(36, 34, 16, 9, BIRD_BELLY);
    img.fill_ellipse(22, wing_row, 12, 6, BIRD_WING);
    img.fill_ellipse(46, 18, 7, 7, BIRD_EYE);
    img.fill_ellipse(49, 18, 3, 3, BIRD_PUPIL);
    img.fill_rect(54, 25, 12, 5, BIRD_BEAK);
    img.fill_rect(54, 30, 10, 4, BIRD_WING);
    img
}
