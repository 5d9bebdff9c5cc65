//! Pixel-accurate collision masks.
//!
//! A mask only knows which pixels are solid, so collision logic never
//! depends on how the image behind it is stored or drawn.

use crate::sprite::Sprite;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Every non-transparent pixel of `sprite` is solid.
    pub fn from_sprite(sprite: &Sprite) -> Self {
        let mut bits = Vec::with_capacity(sprite.width * sprite.height);
        for y in 0..sprite.height {
            for x in 0..sprite.width {
                bits.push(sprite.get(x, y).is_some());
            }
        }
        Self {
            width: sprite.width,
            height: sprite.height,
            bits,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// True if any solid pixel of `self` lands on a solid pixel of `other`
    /// placed at `offset` (other's position minus self's position).
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (dx, dy) = offset;

        // Intersection of the two rectangles in self's coordinates.
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i32).min(dx + other.width as i32);
        let y1 = (self.height as i32).min(dy + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.bits[y as usize * self.width + x as usize]
                    && other.bits[(y - dy) as usize * other.width + (x - dx) as usize]
                {
                    return true;
                }
            }
        }
        false
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Index of the lowest row holding a solid pixel.
    pub fn bottom_row(&self) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&y| self.bits[y * self.width..(y + 1) * self.width].iter().any(|&b| b))
    }
}
