//! Matter groups: rectangular regions seeded with atoms of one phase

use atom_physics::element::{CARBON, CHLORINE, COPPER, HYDROGEN, IRON, NITROGEN, OXYGEN, SODIUM};
use atom_physics::Particle;
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Behaviour profile of a group: initial speed and default elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Solid, Phase::Liquid, Phase::Gas];

    /// Elements picked from when the group has no fixed element
    pub fn default_elements(self) -> &'static [u32] {
        match self {
            Phase::Solid => &[CARBON, OXYGEN, IRON, COPPER],
            Phase::Liquid => &[HYDROGEN, OXYGEN, SODIUM, CHLORINE],
            Phase::Gas => &[HYDROGEN, NITROGEN, OXYGEN],
        }
    }

    /// Half-width of the initial velocity range per axis
    pub fn initial_speed(self) -> f32 {
        match self {
            Phase::Solid => 0.2,
            Phase::Liquid => 0.8,
            Phase::Gas => 2.0,
        }
    }

    /// RGBA tint for drawing the group region
    pub fn tint(self) -> [u8; 4] {
        match self {
            Phase::Solid => [100, 100, 200, 100],
            Phase::Liquid => [200, 100, 100, 100],
            Phase::Gas => [200, 200, 100, 70],
        }
    }
}

fn default_density() -> f32 {
    0.5
}

/// Region description for a group of atoms
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Matter {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub phase: Phase,
    /// Atoms per square pixel
    #[serde(default = "default_density")]
    pub density: f32,
    /// Fixed element; otherwise chosen per atom from the phase defaults
    #[serde(default)]
    pub element: Option<u32>,
}

impl Matter {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        phase: Phase,
        density: f32,
        element: Option<u32>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            phase,
            density,
            element,
        }
    }

    /// Number of atoms the group spawns: area * density, capped at a quarter of `max_atoms`
    pub fn target_count(&self, max_atoms: usize) -> usize {
        let wanted = self.width * self.height * self.density;
        let wanted = if wanted.is_finite() && wanted > 0.0 && self.density > 0.0 {
            wanted.floor() as usize
        } else {
            0
        };
        wanted.min(max_atoms / 4)
    }

    /// Candidate atomic numbers for the atoms of this group
    pub fn candidates(&self) -> Vec<u32> {
        match self.element {
            Some(number) => vec![number],
            None => self.phase.default_elements().to_vec(),
        }
    }

    /// Create the group's atoms
    pub fn spawn<R: Rng + ?Sized>(&self, max_atoms: usize, rng: &mut R) -> Vec<Particle> {
        let count = self.target_count(max_atoms);
        let candidates = self.candidates();
        let speed = self.phase.initial_speed();

        (0..count)
            .map(|_| {
                let position = Vec2::new(
                    self.x + rng.random::<f32>() * self.width,
                    self.y + rng.random::<f32>() * self.height,
                );
                let number = candidates[rng.random_range(0..candidates.len())];
                let mut particle = Particle::new(position, number, rng);
                particle.velocity = Vec2::new(
                    rng.random_range(-speed..=speed),
                    rng.random_range(-speed..=speed),
                );
                particle
            })
            .collect()
    }
}
