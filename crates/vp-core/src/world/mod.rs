//! World state
//!
//! Contains errors, configuration and level-to-level progression.

pub mod errors;
pub mod options;
mod progress;
mod session;

pub use errors::LevelError;
pub use options::{GenerationOptions, OptionsError};
pub use progress::{ArenaProgress, KillOutcome};
pub use session::Session;
