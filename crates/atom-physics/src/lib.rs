//! # Atom Physics
//!
//! Element data, atom state and the pure pairwise rules (forces, bonding)
//! used by the atom interaction simulation.

pub mod bond;
pub mod constants;
pub mod element;
pub mod forces;
pub mod particle;

pub use bond::*;
pub use constants::*;
pub use element::*;
pub use forces::*;
pub use particle::*;
