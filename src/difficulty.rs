//! The year clock: game progression measured in calendar years of the
//! space age.
//!
//! The year drives how often garbage is spawned, which historical event
//! is shown on the HUD, and when the ship gets its plasma gun.

use log::info;

pub const START_YEAR: i32 = 1957;

/// Latest year accepted as a starting point.
pub const LAST_START_YEAR: i32 = 9999;

/// From this year on the ship can fire.
pub const PLASMA_GUN_YEAR: i32 = 2020;

/// `(threshold_year, ticks between spawns)`, sorted by year.  The highest
/// threshold not above the current year applies.
const SPAWN_DELAYS: [(i32, u32); 7] = [
    (1957, 20),
    (1961, 16),
    (1969, 14),
    (1981, 10),
    (1995, 8),
    (2010, 6),
    (2020, 2),
];

const PHRASES: [(i32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Ticks between two garbage spawns in `year`.  `None` before the first
/// threshold, and for a zero entry: the spawner then just waits a tick.
pub fn garbage_delay_ticks(year: i32) -> Option<u32> {
    SPAWN_DELAYS
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= year)
        .map(|(_, delay)| *delay)
        .filter(|delay| *delay > 0)
}

/// The event that happened exactly in `year`, if any.
pub fn phrase_for(year: i32) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, phrase)| *phrase)
}

pub fn weapon_unlocked(year: i32) -> bool {
    year >= PLASMA_GUN_YEAR
}

/// Year and score, plus the tick counter that moves the year forward.
#[derive(Clone, Debug, PartialEq)]
pub struct Difficulty {
    pub year: i32,
    pub score: u32,
    ticks_per_year: u32,
    ticks: u32,
}

impl Difficulty {
    pub fn new(start_year: i32, ticks_per_year: u32) -> Self {
        Self {
            year: start_year,
            score: 0,
            ticks_per_year: ticks_per_year.max(1),
            ticks: 0,
        }
    }

    /// Count one tick.  Returns `true` when this tick started a new year.
    pub fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks < self.ticks_per_year {
            return false;
        }
        self.ticks = 0;
        self.year = self.year.saturating_add(1);
        if let Some(phrase) = phrase_for(self.year) {
            info!("year {}: {}", self.year, phrase);
        } else {
            info!("year {}", self.year);
        }
        true
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }

    pub fn spawn_delay(&self) -> Option<u32> {
        garbage_delay_ticks(self.year)
    }

    pub fn phrase(&self) -> Option<&'static str> {
        phrase_for(self.year)
    }

    pub fn weapon_unlocked(&self) -> bool {
        weapon_unlocked(self.year)
    }

    pub fn ticks_per_year(&self) -> u32 {
        self.ticks_per_year
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new(START_YEAR, crate::config::DEFAULT_TICKS_PER_YEAR)
    }
}
