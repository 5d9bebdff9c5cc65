//! The fixed-size pixel surface every layer is drawn onto.

use crate::assets::Assets;
use crate::constants::{PIPE_GAP, PIPE_HEIGHT, X_WIDTH, Y_HEIGHT};
use crate::entities::GameState;
use crate::sprite::{Rgb, Sprite};

const BLACK: Rgb = Rgb(0, 0, 0);

pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new() -> Self {
        let (width, height) = (X_WIDTH as usize, Y_HEIGHT as usize);
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Outside the canvas reads as black.
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            BLACK
        }
    }

    /// Copy the opaque pixels of `sprite` with its top-left at `(x, y)`,
    /// clipped to the canvas.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let (cw, ch) = (self.width as i32, self.height as i32);
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sprite.width as i32).min(cw);
        let y1 = (y + sprite.height as i32).min(ch);

        for py in y0..y1 {
            for px in x0..x1 {
                if let Some(color) = sprite.get((px - x) as usize, (py - y) as usize) {
                    self.pixels[py as usize * self.width + px as usize] = color;
                }
            }
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one complete frame: background, pipes, ground, actor.
pub fn compose(canvas: &mut Canvas, state: &GameState, assets: &Assets) {
    canvas.blit(&assets.background, 0, 0);

    for pair in &state.obstacles.slots {
        canvas.blit(&assets.pipe_flipped, pair.x, pair.y);
        canvas.blit(&assets.pipe, pair.x, pair.y + PIPE_HEIGHT + PIPE_GAP);
    }

    for tile_x in state.ground.tiles() {
        canvas.blit(&assets.ground, tile_x, state.ground.y);
    }

    let actor = &state.actor;
    canvas.blit(&actor.display_sprite(assets), actor.x, actor.y);
}
