//! Atom state for the 2D interaction simulation

use glam::Vec2;
use rand::Rng;

use crate::bond::max_bonds;
use crate::constants::{ATOM_DRAW_SIZE, INITIAL_SPEED, MASS_RADIUS_DIVISOR};
use crate::element::Element;

/// One side of a chemical bond
///
/// `peer` is the index of the other atom in the shared particle arena. The
/// other atom carries a matching entry pointing back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub peer: usize,
    pub strength: f32,
}

/// A simulated atom
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in world pixels
    pub position: Vec2,
    /// Velocity in pixels per tick
    pub velocity: Vec2,
    pub element: Element,
    pub neutrons: i64,
    /// Net charge in elementary units
    pub charge: i32,
    /// Size for rendering
    pub radius: f32,
    pub bonds: Vec<Bond>,
}

impl Particle {
    /// Create an atom of the given atomic number with a small random velocity
    pub fn new<R: Rng + ?Sized>(position: Vec2, number: u32, rng: &mut R) -> Self {
        let element = Element::lookup(number, rng);
        let mut particle = Self::from_element(position, element);
        particle.velocity = Vec2::new(
            rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
            rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
        );
        particle
    }

    /// Create an atom at rest from already resolved element data
    pub fn from_element(position: Vec2, element: Element) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            neutrons: element.neutrons(),
            charge: element.charge(),
            radius: ATOM_DRAW_SIZE + element.mass / MASS_RADIUS_DIVISOR,
            element,
            bonds: Vec::new(),
        }
    }

    /// Atomic number
    pub fn number(&self) -> u32 {
        self.element.number
    }

    pub fn mass(&self) -> f32 {
        self.element.mass
    }

    pub fn color(&self) -> [u8; 3] {
        self.element.color
    }

    /// Maximum number of simultaneous bonds for this element
    pub fn max_bonds(&self) -> usize {
        max_bonds(self.element.number)
    }

    /// True while the bond list is below the element's cap
    pub fn has_free_valence(&self) -> bool {
        self.bonds.len() < self.max_bonds()
    }

    /// Bond entry pointing at `peer`, if any
    pub fn bond_to(&self, peer: usize) -> Option<&Bond> {
        self.bonds.iter().find(|b| b.peer == peer)
    }

    pub fn is_bonded_to(&self, peer: usize) -> bool {
        self.bond_to(peer).is_some()
    }

    /// Remove the last bond entry pointing at `peer`; returns false if there was none
    pub fn remove_bond_to(&mut self, peer: usize) -> bool {
        match self.bonds.iter().rposition(|b| b.peer == peer) {
            Some(i) => {
                self.bonds.remove(i);
                true
            }
            None => false,
        }
    }

    /// Largest absolute velocity component
    pub fn max_axis_speed(&self) -> f32 {
        self.velocity.abs().max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{CARBON, GOLD, HYDROGEN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_derives_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        let gold = Particle::new(Vec2::new(10.0, 20.0), GOLD, &mut rng);
        assert_eq!(gold.number(), GOLD);
        assert_eq!(gold.neutrons, 118);
        assert_eq!(gold.charge, 0);
        assert!((gold.radius - (3.0 + 197.0 / 20.0)).abs() < 1e-5);
        assert!(gold.velocity.x.abs() <= 0.5 && gold.velocity.y.abs() <= 0.5);
        assert!(gold.bonds.is_empty());
    }

    #[test]
    fn test_unknown_element_is_constructible() {
        let mut rng = StdRng::seed_from_u64(3);
        for number in [0, 2, 50, 500] {
            let particle = Particle::new(Vec2::ZERO, number, &mut rng);
            assert!(particle.mass() > 0.0);
            assert_eq!(particle.charge, 0);
        }
    }

    #[test]
    fn test_largest_atomic_numbers_are_constructible() {
        let mut rng = StdRng::seed_from_u64(3);
        let particle = Particle::new(Vec2::ZERO, 3_000_000_000, &mut rng);
        assert_eq!(particle.number(), 3_000_000_000);
        assert_eq!(particle.neutrons, 3_000_000_000);

        let particle = Particle::new(Vec2::ZERO, u32::MAX, &mut rng);
        assert!(particle.mass() > 0.0);
        assert!(particle.neutrons > 0);
        assert_eq!(particle.charge, 0);
        assert!(particle.radius.is_finite());
    }

    #[test]
    fn test_bond_caps() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Particle::new(Vec2::ZERO, CARBON, &mut rng).max_bonds(), 4);
        assert_eq!(Particle::new(Vec2::ZERO, HYDROGEN, &mut rng).max_bonds(), 2);
    }

    #[test]
    fn test_remove_missing_bond_is_noop() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut particle = Particle::new(Vec2::ZERO, HYDROGEN, &mut rng);
        particle.bonds.push(Bond { peer: 4, strength: 8.0 });
        assert!(!particle.remove_bond_to(9));
        assert_eq!(particle.bonds.len(), 1);
        assert!(particle.remove_bond_to(4));
        assert!(particle.bonds.is_empty());
    }
}
