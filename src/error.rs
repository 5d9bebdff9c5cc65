use thiserror::Error;

/// Terminal and input failures. Collisions are game state, not errors.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal cannot show a playable picture of the canvas.
    #[error("terminal too small: {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("input event stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, GameError>;
