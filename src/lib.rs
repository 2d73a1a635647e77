//! Space Garbage - a terminal arcade loop driven by a cooperative scheduler.
//!
//! Core modules:
//! - `scheduler`: tick-based cooperative multitasking
//! - `physics` / `collision`: ship inertia and AABB overlap
//! - `obstacles`: the live garbage registry
//! - `difficulty`: the year clock, spawn cadence and unlocks
//! - `game`: the director wiring everything into one `GameState`
//! - `animations`: the task bodies (ship, shots, garbage, stars, HUD)

pub mod animations;
pub mod assets;
pub mod audio;
pub mod canvas;
pub mod collision;
pub mod config;
pub mod difficulty;
pub mod entities;
pub mod error;
pub mod game;
pub mod obstacles;
pub mod physics;
pub mod scheduler;

pub use config::Settings;
pub use error::GameError;
pub use game::Game;
