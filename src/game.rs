//! The director: builds the shared state, seeds the scheduler with the
//! long-lived tasks, and advances everything one tick at a time.
//!
//! All randomness comes through the injected RNG so callers control
//! determinism (tests use a seeded `StdRng`).

use log::info;
use rand::rngs::StdRng;

use crate::animations::{GarbageSpawner, ScorePanel, Spaceship, Star, YearClock, YearPanel};
use crate::assets::Assets;
use crate::audio::Bell;
use crate::canvas::Canvas;
use crate::config::{Settings, FRAME_BORDER};
use crate::difficulty::Difficulty;
use crate::entities::{Controls, GameState, GameStatus, ShipState};
use crate::error::GameError;
use crate::obstacles::ObstacleRegistry;
use crate::physics::clamp_to_frame;
use crate::scheduler::{Scheduler, Task};

pub struct Game {
    state: GameState,
    scheduler: Scheduler<GameState>,
}

impl Game {
    /// Set up a game on a `rows` x `columns` window.
    ///
    /// Fails when some ship frame, plus the border around it, does not fit.
    pub fn new(
        settings: Settings,
        assets: Assets,
        rows: usize,
        columns: usize,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        check_window_size(&assets, rows, columns)?;

        let (height, width) = assets.ship_extent();
        let mut ship = ShipState::at(rows as f64, (columns / 2) as f64);
        ship.row = clamp_to_frame(ship.row, height, rows, FRAME_BORDER);
        ship.column = clamp_to_frame(ship.column, width, columns, FRAME_BORDER);

        let difficulty = Difficulty::new(settings.start_year, settings.ticks_per_year);
        ship.weapon_unlocked = difficulty.weapon_unlocked();

        let mut state = GameState {
            canvas: Canvas::new(rows, columns),
            obstacles: ObstacleRegistry::new(),
            ship,
            difficulty,
            controls: Controls::default(),
            status: GameStatus::Playing,
            bell: Bell::default(),
            assets,
            settings,
            rng,
            frame: 0,
        };

        let mut scheduler = Scheduler::new();
        for _ in 0..state.settings.stars {
            scheduler.register(Star::random(&mut state.rng, rows, columns));
        }
        scheduler.register(GarbageSpawner::new());
        scheduler.register(YearClock);
        scheduler.register(Spaceship::new());
        scheduler.register(YearPanel::new());
        scheduler.register(ScorePanel::new());

        info!(
            "game started on {}x{} in {} with {} tasks",
            rows,
            columns,
            state.difficulty.year,
            scheduler.len()
        );
        Ok(Self { state, scheduler })
    }

    /// Advance the world by one tick with this tick's input.
    pub fn tick(&mut self, controls: Controls) {
        self.state.controls = controls;
        self.state.frame += 1;
        self.scheduler.tick(&mut self.state);
    }

    /// Add an extra task; it runs from the next tick on.
    pub fn spawn(&mut self, task: impl Task<GameState> + 'static) {
        self.scheduler.register(task);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.state.canvas
    }

    /// Beeps requested since the last call.
    pub fn take_beeps(&mut self) -> u32 {
        self.state.bell.take()
    }

    pub fn is_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }

    pub fn task_count(&self) -> usize {
        self.scheduler.len()
    }
}

/// Every ship frame must fit inside the window with a border on each side.
pub fn check_window_size(assets: &Assets, rows: usize, columns: usize) -> Result<(), GameError> {
    for frame in &assets.ship {
        if frame.height + 2 * FRAME_BORDER > rows || frame.width + 2 * FRAME_BORDER > columns {
            return Err(GameError::WindowTooSmall {
                rows,
                columns,
                frame_rows: frame.height,
                frame_columns: frame.width,
            });
        }
    }
    Ok(())
}
