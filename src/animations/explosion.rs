use crate::assets::Frame;
use crate::entities::GameState;
use crate::scheduler::{Spawner, Step, Task};

/// Plays the explosion frames once, centred on a destroyed obstacle.
#[derive(Debug)]
pub struct Explosion {
    center_row: f64,
    center_column: f64,
    frames: Vec<Frame>,
    next: usize,
    drawn: Option<(f64, f64)>,
}

impl Explosion {
    pub fn new(center_row: f64, center_column: f64, frames: Vec<Frame>) -> Self {
        Self {
            center_row,
            center_column,
            frames,
            next: 0,
            drawn: None,
        }
    }
}

impl Task<GameState> for Explosion {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        if let Some((row, column)) = self.drawn.take() {
            let previous = &self.frames[self.next - 1];
            state.canvas.draw_frame(row, column, &previous.text, true);
        }

        let Some(frame) = self.frames.get(self.next) else {
            return Step::Done;
        };
        if self.next == 0 {
            state.bell.ring();
        }

        let row = self.center_row - (frame.height / 2) as f64;
        let column = self.center_column - (frame.width / 2) as f64;
        state.canvas.draw_frame(row, column, &frame.text, false);
        self.drawn = Some((row, column));
        self.next += 1;
        Step::Continue
    }
}
