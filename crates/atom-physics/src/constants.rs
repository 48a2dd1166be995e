//! Default constants for the atom simulation
//!
//! These are ad hoc values tuned for a 1000x700 pixel world running one tick
//! per frame. They are not derived from real chemistry. The engine reads its
//! working copy from `PhysicsParams`; these are only the defaults.

/// Base draw radius of an atom, before the mass term is added
pub const ATOM_DRAW_SIZE: f32 = 3.0;

/// Mass divisor for the radius term (radius = ATOM_DRAW_SIZE + mass / MASS_RADIUS_DIVISOR)
pub const MASS_RADIUS_DIVISOR: f32 = 20.0;

/// Half-width of the initial random velocity of a freshly constructed atom
pub const INITIAL_SPEED: f32 = 0.5;

/// Smallest mass an atom may have (guards the force / mass division)
pub const MIN_MASS: f32 = 0.5;

/// Downward acceleration per tick
pub const GRAVITY: f32 = 0.1;

/// Coulomb constant for the charge-charge term
pub const K_COULOMB: f32 = 800.0;

/// Strength of the van der Waals attraction between neutral atoms
pub const VAN_DER_WAALS_STRENGTH: f32 = 500.0;

/// Softening added to d² in the van der Waals term
pub const VAN_DER_WAALS_SOFTENING: f32 = 10.0;

/// Multiplier on bond strength for the extra attraction between bonded atoms
pub const BOND_FORCE_SCALE: f32 = 100.0;

/// Half-width of the uniform thermal kick applied to each velocity component
pub const THERMAL_ENERGY: f32 = 0.5;

/// Pairs further apart than this do not interact at all
pub const INTERACTION_DISTANCE: f32 = 30.0;

/// Atoms closer than this may bond
pub const BOND_FORMATION_DISTANCE: f32 = 15.0;

/// Bonds stretched beyond this break
pub const BOND_BREAK_DISTANCE: f32 = 25.0;

/// Chance per close encounter that a bond forms
pub const BOND_FORMATION_PROBABILITY: f32 = 0.05;

/// Chance per tick that a bond breaks regardless of distance
pub const BOND_DECAY_PROBABILITY: f32 = 0.001;

/// Fraction of the atoms sampled each tick
pub const UPDATE_FRACTION: f32 = 0.3;

/// Floor for the squared pair distance
pub const MIN_DISTANCE_SQ: f32 = 1.0;

/// Speed (per axis) above which an atom counts as gas-like
pub const GAS_SPEED_THRESHOLD: f32 = 2.0;

/// Gravity multiplier for gas-like atoms
pub const GAS_GRAVITY_FACTOR: f32 = 0.3;

/// Velocity retained (and reversed) on a wall bounce
pub const WALL_RESTITUTION: f32 = 0.8;

/// Velocity retained per tick
pub const DAMPING: f32 = 0.98;

/// Hard limit on the number of atoms in the world
pub const MAX_ATOMS: usize = 1500;

/// Default bond cap
pub const DEFAULT_MAX_BONDS: usize = 2;

/// Bond cap for carbon
pub const CARBON_MAX_BONDS: usize = 4;

/// Strength for element pairs missing from the bond table
pub const DEFAULT_BOND_STRENGTH: f32 = 10.0;
