//! Sound cues. Fire-and-forget: the simulation never observes a result.

use std::io::Write;

use tracing::trace;

use crate::entities::Cue;

pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for every cue.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        trace!(?cue, "cue");
        // A missed bell is not worth failing a frame over.
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }
}

/// Plays nothing.
#[derive(Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, cue: Cue) {
        trace!(?cue, "cue (muted)");
    }
}
