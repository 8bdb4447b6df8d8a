mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use flappy_bird::config::GameConfig;
use flappy_bird::controller::Game;
use flappy_bird::error::{GameError, Result};
use flappy_bird::input::{self, KeyAction};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Longest real-time gap fed to the simulation in one frame.  Anything
/// longer (a suspended terminal, a slow redraw) is dropped rather than
/// replayed as a burst of ticks.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "flappy_bird")]
#[command(about = "Flap through the pipes in your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for pipe placement; the same seed gives the same pipes
    #[arg(long)]
    seed: Option<u64>,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Game over is not an exit: the drivers stop
/// and the overlay waits for ENTER.
fn game_loop<W: Write, R: Rng>(
    out: &mut W,
    game: &mut Game<R>,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match input::map_event(&key, game.state().status) {
                Some(KeyAction::Quit) => return Ok(()),
                Some(KeyAction::Game(command)) => game.on_input(command),
                None => {}
            }
        }

        let elapsed = frame_start.duration_since(last).min(MAX_FRAME_DELTA);
        last = frame_start;
        game.advance(elapsed);

        display::render(out, &game.frame(), terminal::size()?)?;

        let spent = frame_start.elapsed();
        if spent < FRAME {
            thread::sleep(FRAME - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (width, height) = terminal::size()?;
    if width < display::MIN_WIDTH || height < display::MIN_HEIGHT {
        return Err(GameError::TerminalTooSmall {
            width,
            height,
            min_width: display::MIN_WIDTH,
            min_height: display::MIN_HEIGHT,
        });
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(GameConfig::default(), rng);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Lets us ignore key-repeat/release; terminals without support fall back
    // to plain press events.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    debug!("keyboard enhancement: {}", keyboard_enhanced);

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
                warn!("terminal event read failed: {}", err);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("session over, high score {}", game.state().high_score);
    result
}
