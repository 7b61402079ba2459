//! Orbit Sim - headless flight runner
//!
//! Loads a scenario (a JSON file, a generated system or the built-in
//! two-planet scene), flies the ship for a number of ticks and prints what
//! happened. Useful for tuning physics values without a window.
//!
//! Run with: `cargo run --bin orbit-sim -- --ticks 1200 --burn 60`
//!
//! Options:
//! - `--scenario PATH`: load a scenario JSON file
//! - `--generate SEED`: fly around a generated solar system instead
//! - `--ticks N`: number of frames to run (default 600)
//! - `--burn N`: hold thrust for the first N frames
//! - `--pause-on-collision`: stop at the first contact
//! - `--save PATH`: write the scenario that was flown as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use orbit_lander_engine::Vec2;
use orbit_lander_engine::game::{OrbitSession, ScenarioConfig, load_scenario, save_scenario};

/// Where a generated sun sits relative to the ship's start.
const GENERATED_SUN_POSITION: Vec2 = Vec2::new(0.0, -1500.0);

#[derive(Parser, Debug)]
#[command(name = "orbit-sim", about = "Fly the orbit lander without a window")]
struct Args {
    /// Scenario JSON file
    #[arg(long, conflicts_with = "generate")]
    scenario: Option<PathBuf>,

    /// Seed for a generated solar system
    #[arg(long)]
    generate: Option<u64>,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Frames of initial thrust
    #[arg(long, default_value_t = 0)]
    burn: u64,

    /// Stop at the first collision
    #[arg(long)]
    pause_on_collision: bool,

    /// Save the flown scenario to this path
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut scenario = if let Some(path) = &args.scenario {
        match load_scenario(path) {
            Ok(scenario) => {
                println!("[Orbit Sim] Loaded scenario {}", path.display());
                scenario
            }
            Err(e) => {
                eprintln!("[Orbit Sim] Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    } else if let Some(seed) = args.generate {
        println!("[Orbit Sim] Generating system with seed {}", seed);
        ScenarioConfig::generated(seed, GENERATED_SUN_POSITION)
    } else {
        ScenarioConfig::default()
    };

    if args.pause_on_collision {
        scenario.debug.pause_on_collision = true;
    }

    if let Some(path) = &args.save {
        match save_scenario(path, &scenario) {
            Ok(()) => println!("[Orbit Sim] Saved scenario to {}", path.display()),
            Err(e) => eprintln!("[Orbit Sim] Failed to save {}: {}", path.display(), e),
        }
    }

    let mut session = match OrbitSession::from_scenario(&scenario) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("[Orbit Sim] Invalid scenario: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "[Orbit Sim] {} celestials, ship at ({:.1}, {:.1})",
        session.world().celestials().len(),
        session.world().ship().position().x,
        session.world().ship().position().y
    );

    let mut contacts = 0u64;
    let mut first_contact = None;
    for frame in 0..args.ticks {
        session.input_mut().controls.accelerate = frame < args.burn;
        let report = session.update();

        if let Some(contact) = report.contact {
            contacts += 1;
            if first_contact.is_none() {
                first_contact = Some(frame);
                println!(
                    "[Orbit Sim] First contact with {} on frame {} (point {}, speed {:.2})",
                    contact.celestial,
                    frame,
                    contact.point_index,
                    report.movement.speed()
                );
            }
        }

        if session.is_paused() {
            println!("[Orbit Sim] Held on collision at frame {}", frame);
            break;
        }
    }

    let world = session.world();
    let ship = world.ship();
    let movement = ship.movement();
    println!("[Orbit Sim] ---- summary ----");
    println!("[Orbit Sim] committed ticks: {}", world.tick());
    println!(
        "[Orbit Sim] position: ({:.2}, {:.2})  velocity: ({:.3}, {:.3})",
        movement.position.x, movement.position.y, movement.velocity.x, movement.velocity.y
    );
    println!(
        "[Orbit Sim] angle: {:.3} rad  angular velocity: {:.5}",
        movement.angle, movement.angular_velocity
    );
    println!("[Orbit Sim] colliding ticks: {}", contacts);
    match ship.landed_on() {
        Some(id) => println!("[Orbit Sim] landed on {}", id),
        None => println!("[Orbit Sim] not landed"),
    }

    ExitCode::SUCCESS
}
