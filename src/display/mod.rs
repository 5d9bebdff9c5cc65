//! Rendering layer — all terminal I/O lives here.
//!
//! `canvas::compose` paints the game onto a pixel canvas; `render` then
//! translates that canvas into half-block glyphs and draws the text overlays.
//! No game logic is performed here.

pub mod canvas;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::constants::{X_WIDTH, Y_HEIGHT};
use crate::entities::{GamePhase, GameState};
use crate::error::{GameError, Result};
use crate::sprite::Rgb;
use canvas::Canvas;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SCORE: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const C_GAME_OVER: Color = Color::Black;
const C_GAME_OVER_BG: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "SPACE / ↑ : Flap   Q : Quit";

/// Upper half-block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Largest pixel step per half-block that still gives a playable picture
/// (25×20 cells).
const MAX_STEP: usize = 20;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Where the canvas lands on the terminal and how coarsely it is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Canvas pixels per half-block, horizontally and vertically.
    pub step: usize,
    pub left: u16,
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
    /// Terminal height; the last row holds the controls hint.
    pub term_rows: u16,
}

impl Viewport {
    /// Fit the whole canvas into a `cols`×`rows` terminal, centred, keeping
    /// one row free for the hint.
    pub fn fit(cols: u16, rows: u16) -> Result<Self> {
        let too_small = GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: (X_WIDTH as usize).div_ceil(MAX_STEP) as u16,
            min_rows: (Y_HEIGHT as usize).div_ceil(2 * MAX_STEP) as u16 + 1,
        };
        let usable_rows = rows.saturating_sub(1) as usize;
        if cols == 0 || usable_rows == 0 {
            return Err(too_small);
        }

        let step = (X_WIDTH as usize)
            .div_ceil(cols as usize)
            .max((Y_HEIGHT as usize).div_ceil(2 * usable_rows))
            .max(1);
        if step > MAX_STEP {
            return Err(too_small);
        }

        let image_cols = (X_WIDTH as usize).div_ceil(step) as u16;
        let image_rows = (Y_HEIGHT as usize).div_ceil(2 * step) as u16;
        Ok(Self {
            step,
            left: (cols - image_cols) / 2,
            top: (usable_rows as u16 - image_rows) / 2,
            cols: image_cols,
            rows: image_rows,
            term_rows: rows,
        })
    }

    /// Terminal cell showing canvas pixel `(x, y)`.
    pub fn cell_of(&self, x: i32, y: i32) -> (u16, u16) {
        let col = (x.max(0) as usize / self.step).min(self.cols.saturating_sub(1) as usize);
        let row = (y.max(0) as usize / (2 * self.step)).min(self.rows.saturating_sub(1) as usize);
        (self.left + col as u16, self.top + row as u16)
    }

    /// Colours of the two halves of image cell `(col, row)`.
    pub fn sample(&self, canvas: &Canvas, col: u16, row: u16) -> (Rgb, Rgb) {
        let half = self.step / 2;
        let x = col as usize * self.step + half;
        let y = row as usize * 2 * self.step + half;
        (canvas.get(x, y), canvas.get(x, y + self.step))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame from an already composed canvas.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    canvas: &Canvas,
    viewport: &Viewport,
) -> std::io::Result<()> {
    draw_canvas(out, canvas, viewport)?;
    draw_score(out, state, viewport)?;
    if state.phase == GamePhase::GameOver {
        draw_game_over(out, viewport)?;
    }
    draw_controls_hint(out, viewport)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.term_rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Shown instead of the playfield while the terminal is below the minimum size.
pub fn render_too_small<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Terminal too small ({cols}x{rows}), resize to continue")))?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Canvas ────────────────────────────────────────────────────────────────────

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

fn draw_canvas<W: Write>(out: &mut W, canvas: &Canvas, viewport: &Viewport) -> std::io::Result<()> {
    for row in 0..viewport.rows {
        out.queue(cursor::MoveTo(viewport.left, viewport.top + row))?;
        let mut current: Option<(Rgb, Rgb)> = None;
        let mut run = String::new();

        // Batch runs of identical cells under one colour change.
        for col in 0..viewport.cols {
            let colors = viewport.sample(canvas, col, row);
            if current != Some(colors) {
                flush_run(out, current, &mut run)?;
                current = Some(colors);
            }
            run.push(HALF_BLOCK);
        }
        flush_run(out, current, &mut run)?;
    }
    Ok(())
}

fn flush_run<W: Write>(
    out: &mut W,
    colors: Option<(Rgb, Rgb)>,
    run: &mut String,
) -> std::io::Result<()> {
    if let Some((top, bottom)) = colors {
        if !run.is_empty() {
            out.queue(style::SetForegroundColor(to_color(top)))?;
            out.queue(style::SetBackgroundColor(to_color(bottom)))?;
            out.queue(Print(run.as_str()))?;
        }
    }
    run.clear();
    Ok(())
}

// ── Text overlays ─────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, state: &GameState, viewport: &Viewport) -> std::io::Result<()> {
    let (col, row) = viewport.cell_of(10, 10);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    out.queue(Print(format!("Score: {}", state.score.value)))?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let (col, row) = viewport.cell_of(X_WIDTH / 3, (Y_HEIGHT as f32 / 2.2) as i32);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(style::SetBackgroundColor(C_GAME_OVER_BG))?;
    out.queue(Print(" GAME OVER "))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.term_rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    out.queue(Print(HINT))?;
    Ok(())
}
