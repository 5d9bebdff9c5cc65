use std::fs::File;
use std::io::{self, stdout, BufWriter, IsTerminal, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, warn};

use flappy_game::assets::Assets;
use flappy_game::audio::{CuePlayer, Silent, TerminalBell};
use flappy_game::compute::{init_state, tick};
use flappy_game::constants::{FRAME, X_WIDTH, Y_HEIGHT};
use flappy_game::display::{self, canvas, Viewport};
use flappy_game::error::{GameError, Result};

const LOG_FILE: &str = "flappy_game.log";

// ── Input ─────────────────────────────────────────────────────────────────────

/// What the drained events of one frame ask for.
#[derive(Default)]
struct FrameInput {
    jump: bool,
    quit: bool,
    resized: Option<(u16, u16)>,
}

/// Drain every pending event without blocking. Several jump presses in one
/// frame count as one.
///
/// A disconnected channel means the reader thread has stopped. Events queued
/// before that are still honoured, so a queued quit still quits cleanly.
fn poll_input(rx: &mpsc::Receiver<Event>) -> Result<FrameInput> {
    let mut input = FrameInput::default();
    loop {
        let ev = match rx.try_recv() {
            Ok(ev) => ev,
            Err(TryRecvError::Empty) => return Ok(input),
            Err(TryRecvError::Disconnected) if input.quit => return Ok(input),
            Err(TryRecvError::Disconnected) => return Err(GameError::InputClosed),
        };
        match ev {
            Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => match code {
                KeyCode::Char(' ') | KeyCode::Up => input.jump = true,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => input.quit = true,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    input.quit = true
                }
                _ => {}
            },
            Event::Resize(cols, rows) => input.resized = Some((cols, rows)),
            _ => {}
        }
    }
}

/// Viewport for a resized terminal, or `None` while it is too small to play.
fn refit(cols: u16, rows: u16) -> Option<Viewport> {
    match Viewport::fit(cols, rows) {
        Ok(viewport) => Some(viewport),
        Err(err) => {
            warn!(%err, "pausing until the terminal is resized");
            None
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Game over does not end the loop: the final
/// frame stays on screen until quit.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    cues: &mut dyn CuePlayer,
) -> Result<()> {
    let mut rng = thread_rng();
    let assets = Assets::load();
    let mut canvas = canvas::Canvas::new();
    let mut state = init_state(&mut rng);

    let (cols, rows) = terminal::size()?;
    let first = Viewport::fit(cols, rows)?;
    info!(
        canvas_width = X_WIDTH,
        canvas_height = Y_HEIGHT,
        cols,
        rows,
        step = first.step,
        "viewport ready"
    );
    let mut viewport = Some(first);
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    loop {
        let frame_start = Instant::now();

        let input = poll_input(rx)?;
        if input.quit {
            info!(score = state.score.value, frame = state.frame, "quit");
            return Ok(());
        }
        if let Some((cols, rows)) = input.resized {
            viewport = refit(cols, rows);
            match viewport {
                Some(_) => {
                    out.execute(terminal::Clear(terminal::ClearType::All))?;
                }
                None => display::render_too_small(out, cols, rows)?,
            }
        }

        // Paused while the terminal is too small.
        if let Some(viewport) = &viewport {
            state = tick(&state, &assets, input.jump, &mut rng);
            for &cue in &state.cues {
                cues.play(cue);
            }

            canvas::compose(&mut canvas, &state, &assets);
            display::render(out, &state, &canvas, viewport)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Stdout is the playfield, so logs go to a file in the temp dir.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = File::create(&path) else {
        return;
    };
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .is_ok();
    if installed {
        info!(path = %path.display(), "logging to file");
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    init_logging();
    info!("flappy game starting");

    if let Err(err) = run() {
        warn!(%err, "exiting with error");
        eprintln!("flappy_game: {err}");
        std::process::exit(1);
    }
    info!("flappy game stopped");
}

fn run() -> Result<()> {
    let raw_out = stdout();
    let interactive = raw_out.is_terminal();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!(%err, "event reader stopped");
                break;
            }
        }
    });

    let result = if interactive {
        game_loop(&mut out, &rx, &mut TerminalBell::new(io::stdout()))
    } else {
        game_loop(&mut out, &rx, &mut Silent)
    };

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
