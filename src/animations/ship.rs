use log::info;

use crate::animations::{GameOver, Shot, SHOT_ROW_SPEED};
use crate::config::FRAME_BORDER;
use crate::entities::{GameState, GameStatus};
use crate::physics::{
    clamp_to_frame, integrate, update_speed, COLUMN_SPEED_LIMIT, ROW_SPEED_LIMIT,
};
use crate::scheduler::{Spawner, Step, Task};

/// Ticks each ship frame stays on screen before the next one.
pub const SHIP_ANIMATION_SLOWDOWN: u64 = 2;

/// The player's ship: reads controls, flies, fires, and dies on contact.
#[derive(Debug, Default)]
pub struct Spaceship {
    ticks: u64,
    /// Where and which frame we drew last tick.
    drawn: Option<(f64, f64, usize)>,
}

impl Spaceship {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<GameState> for Spaceship {
    fn step(&mut self, state: &mut GameState, spawner: &mut Spawner<GameState>) -> Step {
        if let Some((row, column, index)) = self.drawn.take() {
            if let Some(frame) = state.assets.ship.get(index) {
                state.canvas.draw_frame(row, column, &frame.text, true);
            }
        }

        let controls = state.controls;
        let (rows, columns) = (state.rows(), state.columns());
        let (height, width) = state.assets.ship_extent();

        let ship = &mut state.ship;
        ship.weapon_unlocked = state.difficulty.weapon_unlocked();

        let (row_speed, column_speed) = update_speed(
            ship.row_speed,
            ship.column_speed,
            controls.row_dir,
            controls.column_dir,
            ROW_SPEED_LIMIT,
            COLUMN_SPEED_LIMIT,
        );
        ship.row_speed = row_speed;
        ship.column_speed = column_speed;
        ship.row = clamp_to_frame(integrate(ship.row, row_speed), height, rows, FRAME_BORDER);
        ship.column = clamp_to_frame(
            integrate(ship.column, column_speed),
            width,
            columns,
            FRAME_BORDER,
        );

        if controls.fire && ship.weapon_unlocked {
            let muzzle = ship.column + (width / 2) as f64;
            spawner.spawn(Shot::new(ship.row, muzzle, SHOT_ROW_SPEED, 0.0));
        }

        let hitbox = ship.hitbox(height, width);
        if let Some(obstacle) = state.obstacles.first_collision(&hitbox) {
            info!(
                "ship hit by {:?} in {} with score {}",
                obstacle.id, state.difficulty.year, state.difficulty.score
            );
            state.status = GameStatus::GameOver;
            spawner.spawn(GameOver::new());
            return Step::Done;
        }

        let frames = state.assets.ship.len().max(1);
        let index = (self.ticks / SHIP_ANIMATION_SLOWDOWN) as usize % frames;
        if let Some(frame) = state.assets.ship.get(index) {
            let (row, column) = (state.ship.row, state.ship.column);
            state.canvas.draw_frame(row, column, &frame.text, false);
            self.drawn = Some((row, column, index));
        }
        self.ticks += 1;
        Step::Continue
    }
}
