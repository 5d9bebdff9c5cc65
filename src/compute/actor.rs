//! Actor motion, animation and pose.

use crate::assets::Assets;
use crate::constants::{
    ACTOR_START_Y, ACTOR_X, ANIMATION_FRAMES, JUMP_IMPULSE, TILT_DEGREES, VEL,
};
use crate::entities::Actor;
use crate::mask::Mask;
use crate::sprite::Sprite;

impl Actor {
    pub fn new() -> Self {
        Self {
            x: ACTOR_X,
            y: ACTOR_START_Y,
            prev_y: ACTOR_START_Y,
            frame: 0,
            spin: 0,
        }
    }

    pub fn jump(&mut self) {
        self.prev_y = self.y;
        self.y -= JUMP_IMPULSE;
    }

    pub fn apply_gravity(&mut self) {
        self.prev_y = self.y;
        self.y += VEL;
    }

    /// Step the wing animation. Frozen once the death flop has started.
    pub fn advance(&mut self) {
        if self.spin == 0 {
            self.frame = (self.frame + 1) % ANIMATION_FRAMES;
        }
    }

    /// The last jump or gravity step moved the actor upward.
    pub fn tilted_up(&self) -> bool {
        self.prev_y > self.y
    }

    /// Current frame with the death-flop rotation applied.
    pub fn sprite(&self, assets: &Assets) -> Sprite {
        assets.bird_frames[self.frame].rotate_quarters_cw(self.spin)
    }

    /// What gets drawn: `sprite` plus the tilt-up pose.
    pub fn display_sprite(&self, assets: &Assets) -> Sprite {
        let sprite = self.sprite(assets);
        if self.tilted_up() {
            sprite.rotate(TILT_DEGREES)
        } else {
            sprite
        }
    }

    /// Rebuilt from the active sprite on every call. The tilt is cosmetic and
    /// does not change the mask.
    pub fn collision_mask(&self, assets: &Assets) -> Mask {
        Mask::from_sprite(&self.sprite(assets))
    }

    /// Death flop: while still airborne, turn another -90° and keep falling.
    pub fn on_collision(&mut self, airborne: bool) {
        if airborne {
            self.spin += 1;
            self.y += VEL;
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}
