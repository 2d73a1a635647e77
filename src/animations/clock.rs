use crate::entities::GameState;
use crate::scheduler::{Spawner, Step, Task};

/// Moves the calendar forward, one year per `ticks_per_year` ticks.
#[derive(Debug, Default)]
pub struct YearClock;

impl Task<GameState> for YearClock {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        state.difficulty.advance();
        Step::Continue
    }
}
