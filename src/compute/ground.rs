//! Scrolling ground strip.

use crate::assets::Assets;
use crate::constants::{GROUND_Y, VEL, X_WIDTH};
use crate::entities::{Actor, Ground};

impl Ground {
    pub fn new() -> Self {
        Self { x: 0, y: GROUND_Y }
    }

    /// Scroll left; once a full strip width has gone by, start over at 0.
    pub fn advance(&mut self) {
        self.x -= VEL;
        if self.x < -X_WIDTH {
            self.x = 0;
        }
    }

    /// Left edges of the two strip copies that together cover the canvas.
    pub fn tiles(&self) -> [i32; 2] {
        [self.x, self.x + X_WIDTH]
    }

    pub fn is_touching(&self, actor: &Actor, assets: &Assets) -> bool {
        let mask = actor.collision_mask(assets);
        self.tiles().iter().any(|&tile_x| {
            mask.overlaps(&assets.ground_mask, (tile_x - actor.x, self.y - actor.y))
        })
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}
