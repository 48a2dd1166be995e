//! Element table
//!
//! A handful of familiar elements with their electron count, mass and display
//! colour. Any other atomic number gets a synthesized placeholder so that
//! every integer is constructible.

use std::borrow::Cow;

use rand::Rng;

use crate::constants::MIN_MASS;

pub const HYDROGEN: u32 = 1;
pub const CARBON: u32 = 6;
pub const NITROGEN: u32 = 7;
pub const OXYGEN: u32 = 8;
pub const SODIUM: u32 = 11;
pub const CHLORINE: u32 = 17;
pub const IRON: u32 = 26;
pub const COPPER: u32 = 29;
pub const GOLD: u32 = 79;

/// Static row of the element table
struct TableEntry {
    number: u32,
    electrons: u32,
    mass: f32,
    color: [u8; 3],
    name: &'static str,
}

static TABLE: [TableEntry; 9] = [
    TableEntry {
        number: HYDROGEN,
        electrons: 1,
        mass: 1.0,
        color: [200, 200, 255],
        name: "Hydrogen",
    },
    TableEntry {
        number: CARBON,
        electrons: 6,
        mass: 12.0,
        color: [80, 80, 80],
        name: "Carbon",
    },
    TableEntry {
        number: NITROGEN,
        electrons: 7,
        mass: 14.0,
        color: [0, 0, 200],
        name: "Nitrogen",
    },
    TableEntry {
        number: OXYGEN,
        electrons: 8,
        mass: 16.0,
        color: [255, 50, 50],
        name: "Oxygen",
    },
    TableEntry {
        number: SODIUM,
        electrons: 11,
        mass: 23.0,
        color: [255, 200, 50],
        name: "Sodium",
    },
    TableEntry {
        number: CHLORINE,
        electrons: 17,
        mass: 35.5,
        color: [50, 255, 50],
        name: "Chlorine",
    },
    TableEntry {
        number: IRON,
        electrons: 26,
        mass: 56.0,
        color: [200, 100, 50],
        name: "Iron",
    },
    TableEntry {
        number: COPPER,
        electrons: 29,
        mass: 63.5,
        color: [200, 150, 50],
        name: "Copper",
    },
    TableEntry {
        number: GOLD,
        electrons: 79,
        mass: 197.0,
        color: [255, 215, 0],
        name: "Gold",
    },
];

/// Properties of one element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Atomic number (proton count)
    pub number: u32,
    pub electrons: u32,
    /// Always > 0
    pub mass: f32,
    /// RGB display colour
    pub color: [u8; 3],
    pub name: Cow<'static, str>,
}

impl Element {
    /// Look up a tabulated element
    pub fn known(number: u32) -> Option<Self> {
        TABLE.iter().find(|e| e.number == number).map(|e| Self {
            number: e.number,
            electrons: e.electrons,
            mass: e.mass,
            color: e.color,
            name: Cow::Borrowed(e.name),
        })
    }

    /// Look up an element, synthesizing a placeholder for unknown numbers
    pub fn lookup<R: Rng + ?Sized>(number: u32, rng: &mut R) -> Self {
        Self::known(number).unwrap_or_else(|| Self::synthesize(number, rng))
    }

    /// Placeholder element: neutral, twice the atomic number in mass, muted random colour
    pub fn synthesize<R: Rng + ?Sized>(number: u32, rng: &mut R) -> Self {
        Self {
            number,
            electrons: number,
            mass: (number as f32 * 2.0).max(MIN_MASS),
            color: [
                rng.random_range(100..=200),
                rng.random_range(100..=200),
                rng.random_range(100..=200),
            ],
            name: Cow::Owned(format!("Element-{number}")),
        }
    }

    /// Atomic numbers present in the table, in ascending order
    pub fn known_numbers() -> impl Iterator<Item = u32> {
        TABLE.iter().map(|e| e.number)
    }

    /// Net charge (protons - electrons), clamped to the `i32` range
    pub fn charge(&self) -> i32 {
        let charge = i64::from(self.number) - i64::from(self.electrons);
        charge.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Neutron count, from the rounded mass
    ///
    /// Computed in `i64` so every `u32` atomic number fits.
    pub fn neutrons(&self) -> i64 {
        (self.mass.round() as i64).saturating_sub(i64::from(self.number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_oxygen() {
        let oxygen = Element::known(OXYGEN).unwrap();
        assert_eq!(oxygen.electrons, 8);
        assert_eq!(oxygen.mass, 16.0);
        assert_eq!(oxygen.name, "Oxygen");
        assert_eq!(oxygen.charge(), 0);
        assert_eq!(oxygen.neutrons(), 8);
    }

    #[test]
    fn test_chlorine_neutrons_use_rounded_mass() {
        let chlorine = Element::known(CHLORINE).unwrap();
        // round(35.5) = 36
        assert_eq!(chlorine.neutrons(), 19);
    }

    #[test]
    fn test_unknown_is_synthesized() {
        let mut rng = StdRng::seed_from_u64(7);
        let element = Element::lookup(42, &mut rng);
        assert_eq!(element.electrons, 42);
        assert_eq!(element.mass, 84.0);
        assert_eq!(element.name, "Element-42");
        assert!(element.color.iter().all(|c| (100..=200).contains(c)));
        assert!(Element::known(42).is_none());
    }

    #[test]
    fn test_synthesized_mass_positive_for_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let element = Element::lookup(0, &mut rng);
        assert!(element.mass > 0.0);
    }

    #[test]
    fn test_huge_atomic_numbers_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(3);
        let element = Element::lookup(2_000_000_000, &mut rng);
        assert_eq!(element.neutrons(), 2_000_000_000);
        assert_eq!(element.charge(), 0);

        let element = Element::lookup(u32::MAX, &mut rng);
        assert!(element.mass.is_finite() && element.mass > 0.0);
        assert!(element.neutrons() > 0);
        assert_eq!(element.charge(), 0);
    }

    #[test]
    fn test_all_known_masses_positive() {
        for number in Element::known_numbers() {
            assert!(Element::known(number).unwrap().mass > 0.0);
        }
        assert_eq!(Element::known_numbers().count(), 9);
    }
}
