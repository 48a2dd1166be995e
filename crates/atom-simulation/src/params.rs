//! Physics parameters for runtime tuning

use atom_physics::constants::*;
use serde::{Deserialize, Serialize};

/// Every tunable of the engine
///
/// Fields missing from a config file keep their default.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsParams {
    // Forces
    pub gravity: f32,
    pub coulomb_constant: f32,
    pub van_der_waals_strength: f32,
    pub van_der_waals_softening: f32,
    pub bond_force_scale: f32,
    pub thermal_energy: f32,

    // Ranges
    pub interaction_distance: f32,
    pub bond_formation_distance: f32,
    pub bond_break_distance: f32,
    pub min_distance_sq: f32,

    // Bond lifecycle
    pub bond_formation_probability: f32,
    pub bond_decay_probability: f32,

    // Integration
    pub update_fraction: f32,
    pub gas_speed_threshold: f32,
    pub gas_gravity_factor: f32,
    pub wall_restitution: f32,
    pub damping: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,                                 // 0.1
            coulomb_constant: K_COULOMB,                      // 800
            van_der_waals_strength: VAN_DER_WAALS_STRENGTH,   // 500
            van_der_waals_softening: VAN_DER_WAALS_SOFTENING, // 10
            bond_force_scale: BOND_FORCE_SCALE,               // 100
            thermal_energy: THERMAL_ENERGY,                   // 0.5

            interaction_distance: INTERACTION_DISTANCE,       // 30
            bond_formation_distance: BOND_FORMATION_DISTANCE, // 15
            bond_break_distance: BOND_BREAK_DISTANCE,         // 25
            min_distance_sq: MIN_DISTANCE_SQ,                 // 1

            bond_formation_probability: BOND_FORMATION_PROBABILITY, // 0.05
            bond_decay_probability: BOND_DECAY_PROBABILITY,         // 0.001

            update_fraction: UPDATE_FRACTION,         // 0.3
            gas_speed_threshold: GAS_SPEED_THRESHOLD, // 2.0
            gas_gravity_factor: GAS_GRAVITY_FACTOR,   // 0.3
            wall_restitution: WALL_RESTITUTION,       // 0.8
            damping: DAMPING,                         // 0.98
        }
    }
}

impl PhysicsParams {
    /// Number of atoms sampled in a tick over `particle_count` atoms (never below 1)
    pub fn update_count(&self, particle_count: usize) -> usize {
        ((particle_count as f32 * self.update_fraction).floor() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_count_floor_and_minimum() {
        let params = PhysicsParams::default();
        assert_eq!(params.update_count(0), 1);
        assert_eq!(params.update_count(2), 1);
        assert_eq!(params.update_count(10), 3);
        assert_eq!(params.update_count(1500), 450);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let params: PhysicsParams = toml::from_str("gravity = 0.0\ndamping = 0.9").unwrap();
        assert_eq!(params.gravity, 0.0);
        assert_eq!(params.damping, 0.9);
        assert_eq!(params.coulomb_constant, 800.0);
        assert_eq!(params.bond_break_distance, 25.0);
    }
}
