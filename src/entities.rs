//! Shared game state handed to every task.

use rand::rngs::StdRng;

use crate::assets::Assets;
use crate::audio::Bell;
use crate::canvas::Canvas;
use crate::collision::Rect;
use crate::config::Settings;
use crate::difficulty::Difficulty;
use crate::obstacles::ObstacleRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Player intent collected for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    /// -1 up, 1 down, 0 none.
    pub row_dir: i8,
    /// -1 left, 1 right, 0 none.
    pub column_dir: i8,
    /// Fire was pressed at least once this tick.
    pub fire: bool,
    pub quit: bool,
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ShipState {
    pub row: f64,
    pub column: f64,
    pub row_speed: f64,
    pub column_speed: f64,
    pub weapon_unlocked: bool,
}

impl ShipState {
    pub fn at(row: f64, column: f64) -> Self {
        Self {
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            weapon_unlocked: false,
        }
    }

    pub fn hitbox(&self, height: usize, width: usize) -> Rect {
        Rect::new(self.row, self.column, height as f64, width as f64)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything tasks read and write.  Only one task runs at a time, so plain
/// `&mut` access is enough.
pub struct GameState {
    pub canvas: Canvas,
    pub obstacles: ObstacleRegistry,
    pub ship: ShipState,
    pub difficulty: Difficulty,
    /// Input for the current tick, set by the director before resuming tasks.
    pub controls: Controls,
    pub status: GameStatus,
    pub bell: Bell,
    pub assets: Assets,
    pub settings: Settings,
    pub rng: StdRng,
    pub frame: u64,
}

impl GameState {
    pub fn rows(&self) -> usize {
        self.canvas.rows()
    }

    pub fn columns(&self) -> usize {
        self.canvas.columns()
    }
}
