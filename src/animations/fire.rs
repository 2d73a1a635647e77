use crate::animations::Explosion;
use crate::collision::Rect;
use crate::entities::GameState;
use crate::scheduler::{Spawner, Step, Task};

/// Rows per tick travelled by a plasma shot (negative is up).
pub const SHOT_ROW_SPEED: f64 = -0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Flash,
    Muzzle,
    Flying,
}

/// A single shot: a short muzzle flash, then a straight flight until it
/// leaves the window or hits garbage.
#[derive(Debug)]
pub struct Shot {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    phase: Phase,
    drawn: Option<(f64, f64, &'static str)>,
}

impl Shot {
    pub fn new(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            phase: Phase::Flash,
            drawn: None,
        }
    }

    fn symbol(&self) -> &'static str {
        match self.phase {
            Phase::Flash => "*",
            Phase::Muzzle => "O",
            Phase::Flying if self.column_speed != 0.0 => "-",
            Phase::Flying => "|",
        }
    }

    fn draw(&mut self, state: &mut GameState) {
        let symbol = self.symbol();
        state.canvas.draw_frame(self.row, self.column, symbol, false);
        self.drawn = Some((self.row, self.column, symbol));
    }
}

impl Task<GameState> for Shot {
    fn step(&mut self, state: &mut GameState, spawner: &mut Spawner<GameState>) -> Step {
        if let Some((row, column, symbol)) = self.drawn.take() {
            state.canvas.draw_frame(row, column, symbol, true);
        }

        match self.phase {
            Phase::Flash => {
                state.bell.ring();
                self.draw(state);
                self.phase = Phase::Muzzle;
                return Step::Continue;
            }
            Phase::Muzzle => {
                self.draw(state);
                self.phase = Phase::Flying;
                return Step::Continue;
            }
            Phase::Flying => {}
        }

        self.row += self.row_speed;
        self.column += self.column_speed;

        let max_row = state.rows() as f64 - 1.0;
        let max_column = state.columns() as f64 - 1.0;
        let inside = 0.0 < self.row
            && self.row < max_row
            && 0.0 < self.column
            && self.column < max_column;
        if !inside {
            return Step::Done;
        }

        let cell = Rect::point(self.row.round(), self.column.round());
        if let Some(hit) = state.obstacles.destroy_first_hit(&cell) {
            state.difficulty.add_point();
            let (center_row, center_column) = hit.hitbox().center();
            spawner.spawn(Explosion::new(
                center_row,
                center_column,
                state.assets.explosion.clone(),
            ));
            return Step::Done;
        }

        self.draw(state);
        Step::Continue
    }
}
