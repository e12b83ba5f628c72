//! vp-core: Level generation for VamPyro
//!
//! This crate builds the arena for each night: a perfect maze grown from a
//! central junction, corner exits that open on demand, and a scattering of
//! pickups and hostiles. It has no rendering or input code and is fully
//! deterministic for a given seed.

pub mod maze;
pub mod world;

mod consts;
mod rng;

pub use consts::*;
pub use maze::{setup_level, Corner, Level, LevelEvent, LevelSnapshot};
pub use rng::GameRng;
pub use world::{ArenaProgress, GenerationOptions, LevelError, OptionsError, Session};
