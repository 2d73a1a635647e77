mod display;
mod input;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{cursor, terminal, ExecutableCommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_garbage::assets::Assets;
use space_garbage::{Game, Settings};

use input::{InputPoller, KeyboardPoller};

const LOG_FILE: &str = "space_garbage.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file: stdout and stderr both belong to the game screen.
/// Nothing is written unless `RUST_LOG` asks for it.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match File::create(LOG_FILE) {
        Ok(file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!("cannot open {LOG_FILE}: {err}"),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    input: &mut impl InputPoller,
    settings: &Settings,
) -> std::io::Result<()> {
    loop {
        let tick_start = Instant::now();

        let controls = input.poll();
        if controls.quit {
            info!("quit requested, final score {}", game.state().difficulty.score);
            return Ok(());
        }

        game.tick(controls);
        let beeps = game.take_beeps();
        display::render(out, game.canvas(), beeps)?;

        let elapsed = tick_start.elapsed();
        if elapsed < settings.tic_timeout {
            std::thread::sleep(settings.tic_timeout - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let settings = Settings::from_env().context("reading SPACE_GARBAGE_* settings")?;

    // Check the window before touching the terminal so the error stays readable
    let (width, height) = terminal::size().context("querying terminal size")?;
    let rng = StdRng::from_entropy();
    let mut game = Game::new(
        settings.clone(),
        Assets::builtin(),
        height as usize,
        width as usize,
        rng,
    )
    .context("cannot start the game")?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let mut input = KeyboardPoller::spawn();
    let result = game_loop(&mut out, &mut game, &mut input, &settings);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal output failed")
}
