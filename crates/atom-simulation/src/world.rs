//! Flat particle arena shared by all matter groups

use std::ops::Range;

use atom_physics::{bond_count, Particle};
use rand::Rng;

use crate::Matter;

/// A spawned group and the slice of the arena its atoms landed in
#[derive(Debug, Clone, PartialEq)]
pub struct MatterGroup {
    pub matter: Matter,
    pub atoms: Range<usize>,
}

/// All atoms of the simulation plus the groups they were spawned from
///
/// Atom indices are stable for the lifetime of the world: atoms are only ever
/// appended, and only [`World::clear`] removes them.
#[derive(Debug, Clone)]
pub struct World {
    width: f32,
    height: f32,
    max_atoms: usize,
    particles: Vec<Particle>,
    groups: Vec<MatterGroup>,
}

impl World {
    pub fn new(width: f32, height: f32, max_atoms: usize) -> Self {
        Self {
            width,
            height,
            max_atoms,
            particles: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Spawn a matter group and append its atoms; returns how many were kept
    pub fn add_matter<R: Rng + ?Sized>(&mut self, matter: Matter, rng: &mut R) -> usize {
        let spawned = matter.spawn(self.max_atoms, rng);
        let atoms = self.push_particles(spawned);
        log::debug!(
            "{:?} matter at ({:.0}, {:.0}) {}x{}: {} atoms",
            matter.phase,
            matter.x,
            matter.y,
            matter.width,
            matter.height,
            atoms.len()
        );
        let kept = atoms.len();
        self.groups.push(MatterGroup { matter, atoms });
        kept
    }

    /// Spawn every group of a scene in order; returns the atoms kept
    pub fn seed<R: Rng + ?Sized>(&mut self, matters: &[Matter], rng: &mut R) -> usize {
        let kept = matters
            .iter()
            .map(|matter| self.add_matter(matter.clone(), rng))
            .sum();
        log::info!(
            "✓ Seeded {} atoms in {} groups ({} total)",
            kept,
            matters.len(),
            self.len()
        );
        kept
    }

    /// Append atoms up to the world cap; the excess (newest) atoms are dropped
    ///
    /// Appended atoms start unbonded.
    pub fn push_particles(&mut self, particles: Vec<Particle>) -> Range<usize> {
        let start = self.particles.len();
        let room = self.max_atoms.saturating_sub(start);
        if particles.len() > room {
            log::warn!(
                "atom cap {} reached, dropping {} new atoms",
                self.max_atoms,
                particles.len() - room
            );
        }
        self.particles
            .extend(particles.into_iter().take(room).map(|mut p| {
                p.bonds.clear();
                p
            }));
        start..self.particles.len()
    }

    /// Discard every atom and group
    pub fn clear(&mut self) {
        log::info!(
            "World reset: removed {} atoms in {} groups",
            self.particles.len(),
            self.groups.len()
        );
        self.particles.clear();
        self.groups.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn groups(&self) -> &[MatterGroup] {
        &self.groups
    }

    /// Atoms belonging to one group, for grouped rendering
    pub fn group_particles(&self, group: &MatterGroup) -> &[Particle] {
        let end = group.atoms.end.min(self.particles.len());
        let start = group.atoms.start.min(end);
        &self.particles[start..end]
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of distinct bonds in the world
    pub fn bond_count(&self) -> usize {
        bond_count(&self.particles)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn max_atoms(&self) -> usize {
        self.max_atoms
    }
}
