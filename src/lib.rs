//! Whitehall Dispatch: a Prime Minister simulator.
//!
//! `model` holds the plain game data, `engine` the rules, the day-cycle
//! state machine and the plumbing to the language model that writes the
//! dilemmas. `rng` is the injectable randomness both of them draw from.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod rng;

pub use engine::engine::{Engine, EngineHandle};
pub use engine::session::Session;
pub use error::{GameError, NarrativeError};
