use std::ops::Range;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::assets::Frame;
use crate::config::FRAME_BORDER;
use crate::entities::GameState;
use crate::obstacles::ObstacleId;
use crate::scheduler::{Sleep, Spawner, Step, Task};

/// Rows per tick a piece of garbage can fall.
pub const GARBAGE_SPEED: Range<f64> = 0.2..0.6;

/// One piece of garbage falling from the top of the window.
///
/// Owns the obstacle it registers: removes it once shot down or once it
/// has fallen below the window.
#[derive(Debug)]
pub struct FlyingGarbage {
    frame: Frame,
    row: f64,
    column: f64,
    speed: f64,
    obstacle: Option<ObstacleId>,
    drawn: bool,
}

impl FlyingGarbage {
    pub fn new(frame: Frame, column: f64, speed: f64) -> Self {
        Self {
            frame,
            row: 0.0,
            column,
            speed,
            obstacle: None,
            drawn: false,
        }
    }
}

impl Task<GameState> for FlyingGarbage {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        if self.drawn {
            state.canvas.draw_frame(self.row, self.column, &self.frame.text, true);
            self.drawn = false;
            self.row += self.speed;
        }

        let id = match self.obstacle {
            Some(id) => id,
            None => {
                let id = state.obstacles.add_frame(
                    self.row,
                    self.column,
                    self.frame.height,
                    self.frame.width,
                );
                debug!("garbage {:?} launched at column {:.0}", id, self.column);
                self.obstacle = Some(id);
                id
            }
        };

        let destroyed = state.obstacles.get(id).map_or(true, |o| o.destroyed);
        if destroyed || self.row >= state.rows() as f64 {
            state.obstacles.remove(id);
            return Step::Done;
        }

        state.obstacles.move_frame(id, self.row, self.column);
        state.canvas.draw_frame(self.row, self.column, &self.frame.text, false);
        self.drawn = true;
        Step::Continue
    }
}

/// Keeps launching garbage at the pace the current year dictates.
#[derive(Debug, Default)]
pub struct GarbageSpawner {
    sleep: Sleep,
}

impl GarbageSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<GameState> for GarbageSpawner {
    fn step(&mut self, state: &mut GameState, spawner: &mut Spawner<GameState>) -> Step {
        if self.sleep.tick() {
            return Step::Continue;
        }
        let Some(delay) = state.difficulty.spawn_delay() else {
            return Step::Continue;
        };
        let Some(frame) = state.assets.garbage.choose(&mut state.rng).cloned() else {
            return Step::Continue;
        };

        let high = state
            .columns()
            .saturating_sub(FRAME_BORDER)
            .max(FRAME_BORDER + 1);
        let column = state.rng.gen_range(FRAME_BORDER..high) as f64;
        let speed = state.rng.gen_range(GARBAGE_SPEED);

        spawner.spawn(FlyingGarbage::new(frame, column, speed));
        self.sleep = Sleep::new(delay - 1);
        Step::Continue
    }
}
