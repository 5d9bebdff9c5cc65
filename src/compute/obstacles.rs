//! Scrolling obstacle pairs and their recycling.

use rand::Rng;
use tracing::debug;

use crate::assets::Assets;
use crate::constants::{
    PIPE_FIRST_X, PIPE_GAP, PIPE_HEIGHT, PIPE_SPACING, PIPE_WIDTH, PIPE_Y_RANGE, SLOT_COUNT, VEL,
};
use crate::entities::{Actor, ObstaclePair, ObstacleSet};

impl ObstacleSet {
    /// Slots start off-screen to the right, `PIPE_SPACING` apart.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut slots = [ObstaclePair { x: 0, y: 0 }; SLOT_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.x = PIPE_FIRST_X + i as i32 * PIPE_SPACING;
            slot.y = rng.gen_range(PIPE_Y_RANGE);
        }
        Self { slots }
    }

    pub fn advance(&mut self) {
        for slot in &mut self.slots {
            slot.x -= VEL;
        }
    }

    /// Move the first slot (in index order) that has fully left the screen to
    /// `PIPE_SPACING` beyond the rightmost other slot, with a fresh gap.
    /// At most one slot is recycled per call.
    pub fn recycle_check(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let index = self.slots.iter().position(|s| s.x < -PIPE_WIDTH)?;
        let rightmost = self
            .slots
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, s)| s.x)
            .max()
            .unwrap_or(PIPE_FIRST_X - PIPE_SPACING);

        self.slots[index] = ObstaclePair {
            x: rightmost + PIPE_SPACING,
            y: rng.gen_range(PIPE_Y_RANGE),
        };
        debug!(slot = index, x = self.slots[index].x, y = self.slots[index].y, "obstacle recycled");
        Some(index)
    }

    pub fn top_y(&self, index: usize) -> i32 {
        self.slots[index].y
    }

    pub fn bottom_y(&self, index: usize) -> i32 {
        self.slots[index].y + PIPE_HEIGHT + PIPE_GAP
    }

    pub fn trailing_edge(&self, index: usize) -> i32 {
        self.slots[index].x + PIPE_WIDTH
    }

    /// Pixel-mask test of the actor against both barriers of one slot.
    pub fn check_collision(&self, index: usize, actor: &Actor, assets: &Assets) -> bool {
        let mask = actor.collision_mask(assets);
        let dx = self.slots[index].x - actor.x;
        let top_offset = (dx, self.top_y(index) - actor.y);
        let bottom_offset = (dx, self.bottom_y(index) - actor.y);

        mask.overlaps(&assets.pipe_flipped_mask, top_offset)
            || mask.overlaps(&assets.pipe_mask, bottom_offset)
    }
}
