//! Pairwise force terms
//!
//! Every term returns a signed scalar along the line joining two atoms.
//! Positive pushes the atoms apart, negative pulls them together.

use glam::Vec2;

/// Charge-charge force: F = k * q1 * q2 / r²
pub fn coulomb_force(k: f32, q1: i32, q2: i32, distance_sq: f32) -> f32 {
    k * q1 as f32 * q2 as f32 / distance_sq
}

/// Softened attraction between two neutral atoms: F = -C / (r² + ε)
///
/// Zero unless both charges are exactly zero.
pub fn van_der_waals_force(
    strength: f32,
    softening: f32,
    q1: i32,
    q2: i32,
    distance_sq: f32,
) -> f32 {
    if q1 == 0 && q2 == 0 {
        -strength / (distance_sq + softening)
    } else {
        0.0
    }
}

/// Extra attraction between bonded atoms: F = -s * scale / (r² + 1)
pub fn bond_force(bond_strength: f32, scale: f32, distance_sq: f32) -> f32 {
    -bond_strength * scale / (distance_sq + 1.0)
}

/// Velocity change for an atom of `mass` from a scalar pair force
///
/// `delta` points from the atom towards its partner and `distance` is its
/// length (or the clamped stand-in for it).
pub fn pair_acceleration(force: f32, delta: Vec2, distance: f32, mass: f32) -> Vec2 {
    -delta * (force / (distance * mass))
}
