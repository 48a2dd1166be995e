//! CPU physics engine for the atom simulation
//!
//! NOTE: Each tick only processes `update_fraction` of the atoms, picked
//! uniformly *with replacement*, so an atom may be processed twice in one tick
//! while others are skipped. Samples are processed in order against the live
//! particle slice; there is no snapshot, so a later sample sees positions and
//! bonds already changed earlier in the same tick. Both are part of the
//! model's dynamics and are kept as is.

use atom_physics::{
    bond_force, can_bond, coulomb_force, link, pair_acceleration, unlink, van_der_waals_force,
    Particle,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::PhysicsParams;

/// Counters for one tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Samples processed (including repeats)
    pub processed: usize,
    pub bonds_formed: usize,
    pub bonds_broken: usize,
}

/// Tick-driven interaction engine over a flat particle slice
pub struct PhysicsEngine {
    width: f32,
    height: f32,
    params: PhysicsParams,
    gravity_enabled: bool,
    frame_count: u64,
    rng: StdRng,
}

impl PhysicsEngine {
    /// Create an engine with an unpredictable random stream
    pub fn new(width: f32, height: f32, params: PhysicsParams) -> Self {
        Self::with_seed(width, height, params, rand::random())
    }

    /// Create an engine whose random stream is fixed by `seed`
    pub fn with_seed(width: f32, height: f32, params: PhysicsParams, seed: u64) -> Self {
        log::debug!("PhysicsEngine {width}x{height}, seed {seed}");
        Self {
            width,
            height,
            params,
            gravity_enabled: true,
            frame_count: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Step the simulation forward by one tick
    pub fn step(&mut self, particles: &mut [Particle]) -> TickReport {
        self.frame_count += 1;
        let mut report = TickReport::default();
        if particles.is_empty() {
            return report;
        }

        let update_count = self.params.update_count(particles.len());
        for _ in 0..update_count {
            let index = self.rng.random_range(0..particles.len());
            self.process(particles, index, &mut report);
        }

        log::trace!("tick {}: {:?}", self.frame_count, report);
        report
    }

    fn process(&mut self, particles: &mut [Particle], index: usize, report: &mut TickReport) {
        // Step 1: Pair forces and bond formation
        report.bonds_formed += self.accumulate_forces(particles, index);

        let p = self.params;
        let particle = &mut particles[index];

        // Step 2: Gravity (fast, gas-like atoms fall slower)
        if self.gravity_enabled {
            let factor = if particle.max_axis_speed() > p.gas_speed_threshold {
                p.gas_gravity_factor
            } else {
                1.0
            };
            particle.velocity.y += p.gravity * factor;
        }

        // Step 3: Thermal jitter
        if p.thermal_energy > 0.0 {
            particle.velocity += Vec2::new(
                self.rng.random_range(-p.thermal_energy..=p.thermal_energy),
                self.rng.random_range(-p.thermal_energy..=p.thermal_energy),
            );
        }

        // Step 4: Integrate (unit timestep)
        particle.position += particle.velocity;

        // Step 5: Walls
        self.apply_boundaries(particle);

        // Step 6: Break stretched or decayed bonds
        report.bonds_broken += self.update_bonds(particles, index);

        // Step 7: Drag
        particles[index].velocity *= p.damping;
        report.processed += 1;
    }

    /// Accumulate the velocity change of `index` from every atom in range
    ///
    /// Returns the number of bonds formed along the way.
    fn accumulate_forces(&mut self, particles: &mut [Particle], index: usize) -> usize {
        let p = self.params;
        let mut formed = 0;

        for other in 0..particles.len() {
            if other == index {
                continue;
            }

            let mut delta = particles[other].position - particles[index].position;
            let mut distance_sq = delta.length_squared();
            if distance_sq < p.min_distance_sq {
                distance_sq = p.min_distance_sq;
                delta = Vec2::new(
                    self.rng.random_range(-1.0..1.0),
                    self.rng.random_range(-1.0..1.0),
                );
            }
            let distance = distance_sq.sqrt();
            if distance >= p.interaction_distance {
                continue;
            }

            if self.try_form_bond(particles, index, other, distance) {
                formed += 1;
            }

            let (a, b) = (&particles[index], &particles[other]);
            let mut force = coulomb_force(p.coulomb_constant, a.charge, b.charge, distance_sq)
                + van_der_waals_force(
                    p.van_der_waals_strength,
                    p.van_der_waals_softening,
                    a.charge,
                    b.charge,
                    distance_sq,
                );
            if let Some(bond) = a.bond_to(other) {
                force += bond_force(bond.strength, p.bond_force_scale, distance_sq);
            }

            let acceleration = pair_acceleration(force, delta, distance, a.mass());
            particles[index].velocity += acceleration;
        }

        formed
    }

    fn try_form_bond(
        &mut self,
        particles: &mut [Particle],
        a: usize,
        b: usize,
        distance: f32,
    ) -> bool {
        if !can_bond(particles, a, b, distance, self.params.bond_formation_distance) {
            return false;
        }
        if self.rng.random::<f32>() >= self.params.bond_formation_probability {
            return false;
        }
        let strength = link(particles, a, b);
        log::trace!("bond {a}-{b} formed, strength {strength}");
        true
    }

    /// Inelastic reflection off the world edges
    pub fn apply_boundaries(&self, particle: &mut Particle) {
        let restitution = self.params.wall_restitution;
        let (pos, vel) = (&mut particle.position, &mut particle.velocity);

        if pos.x < 0.0 {
            pos.x = 0.0;
            vel.x = -vel.x * restitution;
        } else if pos.x > self.width {
            pos.x = self.width;
            vel.x = -vel.x * restitution;
        }

        if pos.y < 0.0 {
            pos.y = 0.0;
            vel.y = -vel.y * restitution;
        } else if pos.y > self.height {
            pos.y = self.height;
            vel.y = -vel.y * restitution;
        }
    }

    /// Drop bonds of `index` that are overstretched or spontaneously decay
    fn update_bonds(&mut self, particles: &mut [Particle], index: usize) -> usize {
        let mut broken = 0;

        for slot in (0..particles[index].bonds.len()).rev() {
            let peer = particles[index].bonds[slot].peer;
            let snap = match particles.get(peer) {
                Some(other) => {
                    let distance = other.position.distance(particles[index].position);
                    distance > self.params.bond_break_distance
                        || self.rng.random::<f32>() < self.params.bond_decay_probability
                }
                None => true,
            };
            if snap {
                unlink(particles, index, slot);
                broken += 1;
            }
        }

        broken
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Flip gravity on/off and return the new state
    pub fn toggle_gravity(&mut self) -> bool {
        self.gravity_enabled = !self.gravity_enabled;
        self.gravity_enabled
    }

    /// Ticks stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
