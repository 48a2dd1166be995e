//! Loading the simulation setup from `atoms.toml`
//!
//! Every section and field is optional; anything missing falls back to the
//! built-in defaults, so an empty file is a valid config.

use std::fs;
use std::path::Path;

use atom_physics::constants::MAX_ATOMS;
use atom_physics::element::{CARBON, HYDROGEN, IRON, OXYGEN};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Matter, Phase, PhysicsParams};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Hard cap on the number of atoms
    pub max_atoms: usize,
    /// Fixes every random stream of a run when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            max_atoms: MAX_ATOMS,
            seed: None,
        }
    }
}

/// Settings for the headless host loop
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Frames to run
    pub ticks: u64,
    /// Spawn a random matter group every N frames (0 = never)
    pub spawn_every: u64,
    /// Log the overlay every N frames (0 = only at the end)
    pub log_every: u64,
    /// Scripted key presses, replayed by the headless host
    #[serde(rename = "key")]
    pub keys: Vec<KeyPress>,
}

/// A key pressed at the start of a given frame
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyPress {
    pub frame: u64,
    pub key: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            spawn_every: 0,
            log_every: 60,
            keys: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub physics: PhysicsParams,
    /// Groups seeded at startup and on reset
    #[serde(rename = "matter")]
    pub matters: Vec<Matter>,
    pub run: RunConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            physics: PhysicsParams::default(),
            matters: default_matters(),
            run: RunConfig::default(),
        }
    }
}

/// The starting scene: carbon solid, hydrogen liquid, oxygen gas, iron solid
pub fn default_matters() -> Vec<Matter> {
    vec![
        Matter::new(100.0, 100.0, 100.0, 100.0, Phase::Solid, 0.4, Some(CARBON)),
        Matter::new(300.0, 400.0, 120.0, 80.0, Phase::Liquid, 0.5, Some(HYDROGEN)),
        Matter::new(500.0, 200.0, 150.0, 120.0, Phase::Gas, 0.3, Some(OXYGEN)),
        Matter::new(700.0, 500.0, 80.0, 80.0, Phase::Solid, 0.6, Some(IRON)),
    ]
}

impl SimConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, otherwise use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading config from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if !(world.width > 0.0 && world.width.is_finite()) {
            return Err(ConfigError::invalid(
                "world.width",
                format!("must be positive, got {}", world.width),
            ));
        }
        if !(world.height > 0.0 && world.height.is_finite()) {
            return Err(ConfigError::invalid(
                "world.height",
                format!("must be positive, got {}", world.height),
            ));
        }

        let p = &self.physics;
        if !(p.update_fraction > 0.0 && p.update_fraction <= 1.0) {
            return Err(ConfigError::invalid(
                "physics.update_fraction",
                format!("must be in (0, 1], got {}", p.update_fraction),
            ));
        }
        for (field, value) in [
            ("physics.bond_formation_probability", p.bond_formation_probability),
            ("physics.bond_decay_probability", p.bond_decay_probability),
            ("physics.damping", p.damping),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, format!("must be in [0, 1], got {value}")));
            }
        }
        for (field, value) in [
            ("physics.interaction_distance", p.interaction_distance),
            ("physics.min_distance_sq", p.min_distance_sq),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }
        if !(p.thermal_energy >= 0.0 && p.thermal_energy.is_finite()) {
            return Err(ConfigError::invalid(
                "physics.thermal_energy",
                format!("must be non-negative, got {}", p.thermal_energy),
            ));
        }

        Ok(())
    }
}
