//! Bitmap images: a grid of optional colours where `None` is transparent.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend, `t` in 0..=255 (0 → `a`, 255 → `b`).
    pub fn lerp(a: Rgb, b: Rgb, t: u8) -> Rgb {
        let mix = |x: u8, y: u8| -> u8 {
            let (x, y, t) = (x as i32, y as i32, t as i32);
            (x + (y - x) * t / 255) as u8
        };
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Sprite {
    /// A fully transparent image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![Some(color); width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Option<Rgb>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for py in y..y + h {
            for px in x..x + w {
                self.set(px, py, Some(color));
            }
        }
    }

    /// Axis-aligned ellipse centred on `(cx, cy)` with radii `rx`, `ry`.
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgb) {
        if rx <= 0 || ry <= 0 {
            return;
        }
        let (rx2, ry2) = ((rx * rx) as i64, (ry * ry) as i64);
        for py in cy - ry..=cy + ry {
            for px in cx - rx..=cx + rx {
                let dx = (px - cx) as i64;
                let dy = (py - cy) as i64;
                if dx * dx * ry2 + dy * dy * rx2 <= rx2 * ry2 {
                    self.set(px, py, Some(color));
                }
            }
        }
    }

    /// Mirror top-to-bottom.
    pub fn flip_vertical(&self) -> Sprite {
        let mut out = Sprite::new(self.width, self.height);
        for y in 0..self.height {
            let src = (self.height - 1 - y) * self.width;
            let dst = y * self.width;
            out.pixels[dst..dst + self.width]
                .copy_from_slice(&self.pixels[src..src + self.width]);
        }
        out
    }

    /// Rotate by `degrees`, counter-clockwise when positive.
    ///
    /// The result is sized to the bounding box of the rotated image.
    /// Quarter turns are exact; any other angle is resampled with
    /// nearest-neighbour lookup around the centre.
    pub fn rotate(&self, degrees: f32) -> Sprite {
        let quarters = degrees / 90.0;
        if (quarters - quarters.round()).abs() < 1e-6 {
            let ccw = (quarters.round() as i64).rem_euclid(4) as u32;
            return self.rotate_quarters_cw((4 - ccw) % 4);
        }

        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let (w, h) = (self.width as f32, self.height as f32);
        let nw = (w * cos.abs() + h * sin.abs()).ceil() as usize;
        let nh = (w * sin.abs() + h * cos.abs()).ceil() as usize;
        let mut out = Sprite::new(nw, nh);

        for py in 0..nh {
            for px in 0..nw {
                let u = px as f32 + 0.5 - nw as f32 / 2.0;
                let v = py as f32 + 0.5 - nh as f32 / 2.0;
                let sx = u * cos - v * sin + w / 2.0;
                let sy = u * sin + v * cos + h / 2.0;
                if sx >= 0.0 && sy >= 0.0 {
                    out.pixels[py * nw + px] = self.get(sx as usize, sy as usize);
                }
            }
        }
        out
    }

    /// Rotate clockwise by `turns` quarter turns.
    pub fn rotate_quarters_cw(&self, turns: u32) -> Sprite {
        let (w, h) = (self.width, self.height);
        match turns % 4 {
            0 => self.clone(),
            1 => {
                let mut out = Sprite::new(h, w);
                for y in 0..h {
                    for x in 0..w {
                        out.pixels[x * h + (h - 1 - y)] = self.pixels[y * w + x];
                    }
                }
                out
            }
            2 => {
                let mut out = Sprite::new(w, h);
                for y in 0..h {
                    for x in 0..w {
                        out.pixels[(h - 1 - y) * w + (w - 1 - x)] = self.pixels[y * w + x];
                    }
                }
                out
            }
            _ => {
                let mut out = Sprite::new(h, w);
                for y in 0..h {
                    for x in 0..w {
                        out.pixels[(w - 1 - x) * h + y] = self.pixels[y * w + x];
                    }
                }
                out
            }
        }
    }
}
