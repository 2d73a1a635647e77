use rand::seq::SliceRandom;
use rand::Rng;

use crate::canvas::CellStyle;
use crate::entities::GameState;
use crate::scheduler::{Sleep, Spawner, Step, Task};

pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', '#'];

/// `(style, ticks)` of one blink cycle.
const BLINK: [(CellStyle, u32); 4] = [
    (CellStyle::Dim, 20),
    (CellStyle::Normal, 3),
    (CellStyle::Bold, 5),
    (CellStyle::Normal, 3),
];

/// Extra random ticks added to every blink phase.
const BLINK_JITTER: u32 = 5;

/// A background star cycling through its brightness levels forever.
#[derive(Debug)]
pub struct Star {
    row: i64,
    column: i64,
    symbol: char,
    phase: usize,
    sleep: Sleep,
}

impl Star {
    pub fn new(row: i64, column: i64, symbol: char) -> Self {
        Self {
            row,
            column,
            symbol,
            phase: 0,
            sleep: Sleep::default(),
        }
    }

    /// A star somewhere inside the window, starting at a random point of
    /// its cycle so the sky does not blink in unison.
    pub fn random(rng: &mut impl Rng, rows: usize, columns: usize) -> Self {
        let row = rng.gen_range(2..rows.saturating_sub(2).max(3)) as i64;
        let column = rng.gen_range(2..columns.saturating_sub(2).max(3)) as i64;
        let symbol = *STAR_SYMBOLS.choose(rng).unwrap_or(&'*');
        Self {
            phase: rng.gen_range(0..BLINK.len()),
            sleep: Sleep::new(rng.gen_range(0..=BLINK_JITTER)),
            ..Self::new(row, column, symbol)
        }
    }
}

impl Task<GameState> for Star {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        if self.sleep.tick() {
            return Step::Continue;
        }

        let (style, ticks) = BLINK[self.phase];
        state.canvas.put(self.row, self.column, self.symbol, style);

        let jitter = state.rng.gen_range(0..=BLINK_JITTER);
        self.sleep = Sleep::new(ticks + jitter - 1);
        self.phase = (self.phase + 1) % BLINK.len();
        Step::Continue
    }
}
