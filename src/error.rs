use std::fmt;

use crate::config::FRAME_BORDER;

/// Conditions that stop the game before the first tick.
///
/// Nothing during play is an error: losing the ship is a game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A ship frame does not fit into the terminal.
    WindowTooSmall {
        rows: usize,
        columns: usize,
        frame_rows: usize,
        frame_columns: usize,
    },
    /// An environment override could not be parsed.
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WindowTooSmall {
                rows,
                columns,
                frame_rows,
                frame_columns,
            } => write!(
                f,
                "the window is too small: {rows}x{columns}, the ship needs at least {}x{}",
                frame_rows + 2 * FRAME_BORDER,
                frame_columns + 2 * FRAME_BORDER,
            ),
            GameError::InvalidSetting { name, value } => {
                write!(f, "invalid value for {name}: {value:?}")
            }
        }
    }
}

impl std::error::Error for GameError {}
