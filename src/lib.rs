//! Terminal Flappy Bird.
//!
//! The simulation runs on a fixed 500×800 pixel canvas; `display` maps that
//! canvas onto the terminal with half-block glyphs.

pub mod assets;
pub mod audio;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;
pub mod mask;
pub mod sprite;
