use crate::entities::GameState;
use crate::scheduler::{Spawner, Step, Task};

/// Row the HUD is printed on, just inside the top border.
const HUD_ROW: f64 = 1.0;
const HUD_MARGIN: usize = 2;

/// Text drawn last tick and where, so it can be blanked before redrawing.
#[derive(Debug, Default)]
struct Label {
    drawn: Option<(f64, String)>,
}

impl Label {
    fn show(&mut self, state: &mut GameState, column: f64, text: String) {
        if let Some((old_column, old_text)) = self.drawn.take() {
            state.canvas.draw_frame(HUD_ROW, old_column, &old_text, true);
        }
        state.canvas.draw_frame(HUD_ROW, column, &text, false);
        self.drawn = Some((column, text));
    }
}

/// Current year and, in notable years, what happened then.
#[derive(Debug, Default)]
pub struct YearPanel {
    label: Label,
}

impl YearPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<GameState> for YearPanel {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        let year = state.difficulty.year;
        let text = match state.difficulty.phrase() {
            Some(phrase) => format!("Year {year}: {phrase}"),
            None => format!("Year {year}"),
        };
        self.label.show(state, HUD_MARGIN as f64, text);
        Step::Continue
    }
}

/// Garbage destroyed so far, right-aligned.
#[derive(Debug, Default)]
pub struct ScorePanel {
    label: Label,
}

impl ScorePanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<GameState> for ScorePanel {
    fn step(&mut self, state: &mut GameState, _spawner: &mut Spawner<GameState>) -> Step {
        let text = format!("Score: {}", state.difficulty.score);
        let column = state
            .columns()
            .saturating_sub(text.chars().count() + HUD_MARGIN);
        self.label.show(state, column as f64, text);
        Step::Continue
    }
}
