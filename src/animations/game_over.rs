use crate::entities::GameState;
use crate::scheduler::{Spawner, Step, Task};

/// Keeps the "Game Over" banner on screen for good.  Redrawn every tick so
/// garbage flying through cannot wipe it.
#[derive(Debug, Default)]
pub struct GameOver;

impl GameOver {
    pub fn new() -> Self {
        Self
    }
}

impl Task<GameState> for GameOver {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        let banner = &state.assets.game_over;
        let row = (state.canvas.rows() / 2).saturating_sub(banner.height / 2);
        let column = (state.canvas.columns() / 2).saturating_sub(banner.width / 2);
        state
            .canvas
            .draw_frame(row as f64, column as f64, &banner.text, false);
        Step::Continue
    }
}
