//! # Atom Simulation Engine
//!
//! CPU tick-driven engine for the 2D atom simulation: matter groups, the
//! shared particle arena, runtime parameters and config loading.

pub mod config;
pub mod error;
pub mod matter;
pub mod params;
pub mod simulation;
pub mod world;

pub use config::*;
pub use error::*;
pub use matter::*;
pub use params::*;
pub use simulation::*;
pub use world::*;
