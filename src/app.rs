//! Host-side state: the world, the engine and the user commands driving them

use atom_physics::Element;
use atom_simulation::{Matter, Phase, PhysicsEngine, SimConfig, TickReport, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::overlay::{GroupSummary, Overlay};

/// Mixed into the configured seed for the host's own random stream
const HOST_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// User actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SpawnRandomMatter,
    TogglePause,
    Reset,
    ToggleHelp,
    ToggleGravity,
}

impl Command {
    /// Key binding: Space, P, R, H, G
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "space" | " " => Some(Command::SpawnRandomMatter),
            "p" => Some(Command::TogglePause),
            "r" => Some(Command::Reset),
            "h" => Some(Command::ToggleHelp),
            "g" => Some(Command::ToggleGravity),
            _ => None,
        }
    }
}

pub struct App {
    world: World,
    engine: PhysicsEngine,
    initial_matters: Vec<Matter>,
    rng: StdRng,
    paused: bool,
    show_help: bool,
}

impl App {
    pub fn new(config: &SimConfig) -> Self {
        let (engine_seed, host_seed) = match config.world.seed {
            Some(seed) => (seed, seed ^ HOST_SEED_SALT),
            None => (rand::random(), rand::random()),
        };

        let world = World::new(config.world.width, config.world.height, config.world.max_atoms);
        let engine = PhysicsEngine::with_seed(
            config.world.width,
            config.world.height,
            config.physics,
            engine_seed,
        );

        let mut app = Self {
            world,
            engine,
            initial_matters: config.matters.clone(),
            rng: StdRng::seed_from_u64(host_seed),
            paused: false,
            show_help: false,
        };
        app.seed_world();
        app
    }

    fn seed_world(&mut self) {
        self.world.seed(&self.initial_matters, &mut self.rng);
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::SpawnRandomMatter => {
                let matter = self.random_matter();
                let kept = self.world.add_matter(matter, &mut self.rng);
                log::info!("Spawned {kept} atoms ({} total)", self.world.len());
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            Command::Reset => {
                self.world.clear();
                self.seed_world();
            }
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::ToggleGravity => {
                let on = self.engine.toggle_gravity();
                log::info!("Gravity {}", if on { "on" } else { "off" });
            }
        }
    }

    /// Advance one frame; returns `None` while paused
    pub fn frame(&mut self) -> Option<TickReport> {
        if self.paused {
            return None;
        }
        Some(self.engine.step(self.world.particles_mut()))
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            atom_count: self.world.len(),
            max_atoms: self.world.max_atoms(),
            bond_count: self.world.bond_count(),
            gravity_on: self.engine.gravity_enabled(),
            paused: self.paused,
            show_help: self.show_help,
            tick: self.engine.frame_count(),
        }
    }

    /// One entry per spawned group, in spawn order
    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        self.world
            .groups()
            .iter()
            .map(|group| {
                let atoms = self.world.group_particles(group);
                let first = atoms.first();
                GroupSummary {
                    phase: group.matter.phase,
                    atoms: atoms.len(),
                    tint: group.matter.phase.tint(),
                    color: first.map(|p| p.color()),
                    element: first.map(|p| p.element.name.to_string()),
                }
            })
            .collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// A random group somewhere in the world, with a random phase and element
    fn random_matter(&mut self) -> Matter {
        let rng = &mut self.rng;
        let phase = Phase::ALL[rng.random_range(0..Phase::ALL.len())];
        let elements: Vec<u32> = Element::known_numbers().collect();
        let element = elements[rng.random_range(0..elements.len())];

        let max_x = (self.world.width() - 100.0).max(0.0);
        let max_y = (self.world.height() - 100.0).max(0.0);
        Matter::new(
            rng.random_range(0..=max_x as u32) as f32,
            rng.random_range(0..=max_y as u32) as f32,
            rng.random_range(50..=120) as f32,
            rng.random_range(50..=120) as f32,
            phase,
            rng.random_range(0.3..0.6),
            Some(element),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> SimConfig {
        let mut config = SimConfig::default();
        config.world.seed = Some(1234);
        config
    }

    #[test]
    fn test_initial_scene() {
        let app = App::new(&seeded_config());
        // 375 carbon (capped) + 375 hydrogen (capped) + 375 oxygen (capped) + 375 iron (capped)
        assert_eq!(app.world().len(), 1500);
        assert_eq!(app.world().groups().len(), 4);
        let overlay = app.overlay();
        assert!(overlay.gravity_on);
        assert!(!overlay.paused);
        assert_eq!(overlay.bond_count, 0);
    }

    #[test]
    fn test_group_summaries_follow_spawn_order() {
        let app = App::new(&seeded_config());
        let summaries = app.group_summaries();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].phase, Phase::Solid);
        assert_eq!(summaries[0].atoms, 375);
        assert_eq!(summaries[0].element.as_deref(), Some("Carbon"));
        assert_eq!(summaries[0].color, Some([80, 80, 80]));
        assert_eq!(summaries[2].tint, Phase::Gas.tint());
        assert_eq!(summaries[3].element.as_deref(), Some("Iron"));
        assert_eq!(app.overlay().max_atoms, 1500);
    }

    #[test]
    fn test_pause_stops_frames() {
        let mut app = App::new(&seeded_config());
        assert!(app.frame().is_some());
        app.handle(Command::TogglePause);
        assert!(app.frame().is_none());
        assert_eq!(app.overlay().tick, 1);
        app.handle(Command::TogglePause);
        assert!(app.frame().is_some());
        assert_eq!(app.overlay().tick, 2);
    }

    #[test]
    fn test_spawn_respects_cap_and_reset_restores_scene() {
        let mut config = seeded_config();
        config.world.max_atoms = 1600;
        config.matters.truncate(1);
        let mut app = App::new(&config);
        assert_eq!(app.world().len(), 400);

        for _ in 0..20 {
            app.handle(Command::SpawnRandomMatter);
            assert!(app.world().len() <= 1600);
        }
        assert!(app.world().groups().len() > 1);

        app.handle(Command::Reset);
        assert_eq!(app.world().len(), 400);
        assert_eq!(app.world().groups().len(), 1);
    }

    #[test]
    fn test_random_matter_fits_world() {
        let mut app = App::new(&seeded_config());
        for _ in 0..50 {
            let matter = app.random_matter();
            assert!(matter.x >= 0.0 && matter.x <= 900.0);
            assert!(matter.y >= 0.0 && matter.y <= 600.0);
            assert!((50.0..=120.0).contains(&matter.width));
            assert!((0.3..0.6).contains(&matter.density));
            assert!(matter.element.is_some_and(|e| Element::known(e).is_some()));
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key("space"), Some(Command::SpawnRandomMatter));
        assert_eq!(Command::from_key("P"), Some(Command::TogglePause));
        assert_eq!(Command::from_key("r"), Some(Command::Reset));
        assert_eq!(Command::from_key("h"), Some(Command::ToggleHelp));
        assert_eq!(Command::from_key("g"), Some(Command::ToggleGravity));
        assert_eq!(Command::from_key("x"), None);
    }

    #[test]
    fn test_toggles() {
        let mut app = App::new(&seeded_config());
        app.handle(Command::ToggleGravity);
        app.handle(Command::ToggleHelp);
        let overlay = app.overlay();
        assert!(!overlay.gravity_on);
        assert!(overlay.show_help);
    }

    #[test]
    fn test_seeded_runs_match() {
        let run = || {
            let mut app = App::new(&seeded_config());
            app.handle(Command::SpawnRandomMatter);
            for _ in 0..5 {
                app.frame();
            }
            app.world().particles().to_vec()
        };
        assert_eq!(run(), run());
    }
}
