//! Bond rules: valence caps, pair strengths and symmetric bookkeeping
//!
//! Bonds live in both participants' bond lists. Everything that adds or
//! removes a bond goes through [`link`] / [`unlink`] so the two lists never
//! disagree.

use crate::constants::{CARBON_MAX_BONDS, DEFAULT_BOND_STRENGTH, DEFAULT_MAX_BONDS};
use crate::element::{CARBON, CHLORINE, HYDROGEN, OXYGEN, SODIUM};
use crate::particle::{Bond, Particle};

/// Maximum simultaneous bonds for an element (carbon is tetravalent)
pub fn max_bonds(number: u32) -> usize {
    if number == CARBON {
        CARBON_MAX_BONDS
    } else {
        DEFAULT_MAX_BONDS
    }
}

/// Bond strength for an unordered element pair
pub fn bond_strength(a: u32, b: u32) -> f32 {
    let pair = if a <= b { (a, b) } else { (b, a) };
    match pair {
        (HYDROGEN, HYDROGEN) => 8.0,
        (HYDROGEN, OXYGEN) => 15.0,
        (HYDROGEN, CARBON) => 12.0,
        (CARBON, CARBON) => 20.0,
        (CARBON, OXYGEN) => 18.0,
        (OXYGEN, OXYGEN) => 16.0,
        (SODIUM, CHLORINE) => 25.0,
        _ => DEFAULT_BOND_STRENGTH,
    }
}

/// Whether `a` and `b` are eligible to bond at `distance`, ignoring the random draw
pub fn can_bond(
    particles: &[Particle],
    a: usize,
    b: usize,
    distance: f32,
    max_distance: f32,
) -> bool {
    if a == b || distance >= max_distance {
        return false;
    }
    let (pa, pb) = (&particles[a], &particles[b]);
    !pa.is_bonded_to(b) && !pb.is_bonded_to(a) && pa.has_free_valence() && pb.has_free_valence()
}

/// Append a bond to both atoms and return its strength
pub fn link(particles: &mut [Particle], a: usize, b: usize) -> f32 {
    let strength = bond_strength(particles[a].number(), particles[b].number());
    particles[a].bonds.push(Bond { peer: b, strength });
    particles[b].bonds.push(Bond { peer: a, strength });
    strength
}

/// Remove the `slot`-th bond of atom `a` and its reciprocal entry
///
/// A reciprocal entry that is missing, or a peer index outside the arena, is
/// ignored.
pub fn unlink(particles: &mut [Particle], a: usize, slot: usize) {
    let bond = particles[a].bonds.remove(slot);
    if let Some(peer) = particles.get_mut(bond.peer) {
        peer.remove_bond_to(a);
    }
}

/// Number of distinct bonds (each is listed twice)
pub fn bond_count(particles: &[Particle]) -> usize {
    particles.iter().map(|p| p.bonds.len()).sum::<usize>() / 2
}

/// True if every bond entry has a matching entry on the peer
pub fn bonds_symmetric(particles: &[Particle]) -> bool {
    particles.iter().enumerate().all(|(i, p)| {
        p.bonds.iter().all(|b| {
            particles
                .get(b.peer)
                .and_then(|peer| peer.bond_to(i))
                .is_some_and(|back| back.strength == b.strength)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, GOLD, IRON, NITROGEN};
    use glam::Vec2;

    fn atom(number: u32, x: f32) -> Particle {
        Particle::from_element(Vec2::new(x, 0.0), Element::known(number).unwrap())
    }

    #[test]
    fn test_strength_is_order_independent() {
        let numbers = [HYDROGEN, CARBON, NITROGEN, OXYGEN, SODIUM, CHLORINE, IRON, GOLD];
        for &a in &numbers {
            for &b in &numbers {
                assert_eq!(bond_strength(a, b), bond_strength(b, a));
                assert_eq!(bond_strength(a, b), bond_strength(a, b));
            }
        }
    }

    #[test]
    fn test_known_strengths() {
        assert_eq!(bond_strength(OXYGEN, HYDROGEN), 15.0);
        assert_eq!(bond_strength(CHLORINE, SODIUM), 25.0);
        assert_eq!(bond_strength(CARBON, CARBON), 20.0);
        assert_eq!(bond_strength(IRON, GOLD), 10.0);
    }

    #[test]
    fn test_link_and_unlink_are_symmetric() {
        let mut particles = vec![atom(HYDROGEN, 0.0), atom(OXYGEN, 5.0), atom(HYDROGEN, 10.0)];
        assert_eq!(link(&mut particles, 0, 1), 15.0);
        link(&mut particles, 2, 1);
        assert_eq!(bond_count(&particles), 2);
        assert!(bonds_symmetric(&particles));

        unlink(&mut particles, 1, 0);
        assert_eq!(bond_count(&particles), 1);
        assert!(particles[0].bonds.is_empty());
        assert!(particles[1].is_bonded_to(2));
        assert!(bonds_symmetric(&particles));
    }

    #[test]
    fn test_unlink_tolerates_missing_reciprocal() {
        let mut particles = vec![atom(HYDROGEN, 0.0), atom(OXYGEN, 5.0)];
        particles[0].bonds.push(Bond { peer: 1, strength: 15.0 });
        particles[0].bonds.push(Bond { peer: 99, strength: 10.0 });
        unlink(&mut particles, 0, 1);
        unlink(&mut particles, 0, 0);
        assert!(particles[0].bonds.is_empty());
        assert!(particles[1].bonds.is_empty());
    }

    #[test]
    fn test_can_bond_respects_cap_and_distance() {
        let mut particles = vec![
            atom(OXYGEN, 0.0),
            atom(HYDROGEN, 5.0),
            atom(HYDROGEN, 6.0),
            atom(HYDROGEN, 7.0),
        ];
        assert!(can_bond(&particles, 0, 1, 5.0, 15.0));
        assert!(!can_bond(&particles, 0, 1, 15.0, 15.0));
        assert!(!can_bond(&particles, 0, 0, 0.0, 15.0));

        link(&mut particles, 0, 1);
        assert!(!can_bond(&particles, 0, 1, 5.0, 15.0));
        link(&mut particles, 0, 2);
        // oxygen is now at its cap of 2
        assert!(!can_bond(&particles, 0, 3, 7.0, 15.0));
    }
}
