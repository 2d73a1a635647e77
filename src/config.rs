//! Game tuning.
//!
//! Defaults match the classic feel; each value can be overridden through a
//! `SPACE_GARBAGE_*` environment variable.

use std::str::FromStr;
use std::time::Duration;

use crate::difficulty::{LAST_START_YEAR, START_YEAR};
use crate::error::GameError;

/// Wall-clock pause between two ticks (~33 FPS).
pub const DEFAULT_TIC_MS: u64 = 30;
pub const DEFAULT_STARS: usize = 100;
/// One in-game year every 1.5 s at the default tick rate.
pub const DEFAULT_TICKS_PER_YEAR: u32 = 50;

/// Cells the ship keeps away from every window edge.
pub const FRAME_BORDER: usize = 1;

pub const ENV_TIC_MS: &str = "SPACE_GARBAGE_TIC_MS";
pub const ENV_STARS: &str = "SPACE_GARBAGE_STARS";
pub const ENV_TICKS_PER_YEAR: &str = "SPACE_GARBAGE_TICKS_PER_YEAR";
pub const ENV_START_YEAR: &str = "SPACE_GARBAGE_START_YEAR";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tic_timeout: Duration,
    /// Number of blinking stars.
    pub stars: usize,
    pub ticks_per_year: u32,
    pub start_year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tic_timeout: Duration::from_millis(DEFAULT_TIC_MS),
            stars: DEFAULT_STARS,
            ticks_per_year: DEFAULT_TICKS_PER_YEAR,
            start_year: START_YEAR,
        }
    }
}

impl Settings {
    /// Defaults overridden by whatever `SPACE_GARBAGE_*` variables are set.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut settings = Self::default();
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_TIC_MS)? {
            settings.tic_timeout = Duration::from_millis(ms);
        }
        if let Some(stars) = parse_var(&lookup, ENV_STARS)? {
            settings.stars = stars;
        }
        if let Some(ticks) = parse_var::<u32>(&lookup, ENV_TICKS_PER_YEAR)? {
            if ticks == 0 {
                return Err(GameError::InvalidSetting {
                    name: ENV_TICKS_PER_YEAR,
                    value: ticks.to_string(),
                });
            }
            settings.ticks_per_year = ticks;
        }
        if let Some(year) = parse_var::<i32>(&lookup, ENV_START_YEAR)? {
            if !(1..=LAST_START_YEAR).contains(&year) {
                return Err(GameError::InvalidSetting {
                    name: ENV_START_YEAR,
                    value: year.to_string(),
                });
            }
            settings.start_year = year;
        }
        Ok(settings)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, GameError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| GameError::InvalidSetting { name, value: raw }),
    }
}
