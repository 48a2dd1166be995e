//! 2D Atom Interaction Simulation
//!
//! Headless host loop: seeds the configured scene, steps the physics engine
//! once per frame and logs the info overlay. Rendering frontends drive the
//! same `App` with live keyboard commands instead of the scripted ones.

mod app;
mod overlay;

use app::{App, Command};
use atom_simulation::SimConfig;
use overlay::HELP_LINES;

const DEFAULT_CONFIG_PATH: &str = "atoms.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting atom interaction simulation...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = SimConfig::load_or_default(&path)?;
    let run = config.run.clone();

    log::info!(
        "World {}x{}, cap {} atoms, {} ticks",
        config.world.width,
        config.world.height,
        config.world.max_atoms,
        run.ticks
    );

    let mut app = App::new(&config);
    let (mut formed, mut broken) = (0, 0);

    for frame in 1..=run.ticks {
        if run.spawn_every > 0 && frame % run.spawn_every == 0 {
            app.handle(Command::SpawnRandomMatter);
        }
        for press in run.keys.iter().filter(|k| k.frame == frame) {
            match Command::from_key(&press.key) {
                Some(command) => app.handle(command),
                None => log::warn!("Ignoring unbound key {:?} at frame {frame}", press.key),
            }
        }

        if let Some(report) = app.frame() {
            formed += report.bonds_formed;
            broken += report.bonds_broken;
            log::debug!("frame {frame}: {report:?}");
        }

        if run.log_every > 0 && frame % run.log_every == 0 {
            log::info!("{}", app.overlay());
        }
    }

    let overlay = app.overlay();
    log::info!("Finished: {overlay}");
    log::info!(
        "Bonds formed {formed}, broken {broken}, {} matter groups",
        app.world().groups().len()
    );
    for (i, group) in app.group_summaries().iter().enumerate() {
        log::info!("  group {i}: {group}");
    }
    for line in overlay.panel_lines() {
        log::debug!("  {line}");
    }
    if overlay.show_help {
        for line in HELP_LINES {
            log::debug!("  {line}");
        }
    }
    Ok(())
}
