//! Task bodies driven by the scheduler.
//!
//! Each task keeps what it needs across ticks in its own struct and erases
//! what it drew last tick before drawing again.

mod clock;
mod explosion;
mod fire;
mod game_over;
mod garbage;
mod hud;
mod ship;
mod stars;

pub use clock::YearClock;
pub use explosion::Explosion;
pub use fire::{Shot, SHOT_ROW_SPEED};
pub use game_over::GameOver;
pub use garbage::{FlyingGarbage, GarbageSpawner, GARBAGE_SPEED};
pub use hud::{ScorePanel, YearPanel};
pub use ship::{Spaceship, SHIP_ANIMATION_SLOWDOWN};
pub use stars::{Star, STAR_SYMBOLS};
