//! Orbit Session
//!
//! The interactive loop minus the window: key events in, one simulation
//! tick per frame, draw data out. Owns the run mode so pausing, single
//! stepping and the debug pause on collision behave the same in every
//! front end.

use crate::game::config::{ConfigError, ScenarioConfig};
use crate::game::effects::FlameSystem;
use crate::input::{InputAction, InputState, KeyCode};
use crate::render::{DrawList, Drawable};
use crate::world::{SimulationRunMode, TickReport, World};

/// Seed for the flame speeds when none is given.
pub const DEFAULT_EFFECT_SEED: u64 = 0x0F1A_4E55;

/// Input, world, effects and run mode together.
#[derive(Debug)]
pub struct OrbitSession {
    input: InputState,
    world: World,
    flames: FlameSystem,
    mode: SimulationRunMode,
    last_report: Option<TickReport>,
}

impl OrbitSession {
    pub fn new(world: World) -> Self {
        Self::with_seed(world, DEFAULT_EFFECT_SEED)
    }

    pub fn with_seed(world: World, effect_seed: u64) -> Self {
        Self {
            input: InputState::new(),
            world,
            flames: FlameSystem::new(effect_seed),
            mode: SimulationRunMode::Run,
            last_report: None,
        }
    }

    pub fn from_scenario(scenario: &ScenarioConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(scenario.build_world()?))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn flames(&self) -> &FlameSystem {
        &self.flames
    }

    pub fn mode(&self) -> SimulationRunMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.mode == SimulationRunMode::Paused
    }

    /// Report of the most recent `update`.
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    /// Feed a key transition; one-shot actions are applied immediately.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(action) = self.input.handle_key(key, pressed) {
            self.apply(action);
        }
    }

    /// Apply a one-shot action.
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::TogglePause => {
                self.mode = match self.mode {
                    SimulationRunMode::Paused => SimulationRunMode::Run,
                    _ => SimulationRunMode::Paused,
                };
                println!("[Orbit] {}", if self.is_paused() { "Paused" } else { "Resumed" });
            }
            InputAction::StepOnce => {
                if self.is_paused() {
                    self.mode = SimulationRunMode::SingleStep;
                }
            }
            InputAction::TogglePauseOnCollision => {
                let debug = self.world.debug_mut();
                debug.pause_on_collision = !debug.pause_on_collision;
                println!("[Orbit] Pause on collision: {}", debug.pause_on_collision);
            }
            InputAction::Thrust | InputAction::RotateLeft | InputAction::RotateRight => {}
        }
    }

    /// Run one frame: sample controls, advance the world, update flames.
    pub fn update(&mut self) -> TickReport {
        self.world.set_controls(&self.input.controls);
        let report = self.world.advance(self.mode);

        if self.mode == SimulationRunMode::SingleStep {
            self.mode = SimulationRunMode::Paused;
        }

        if report.paused_on_collision {
            self.mode = SimulationRunMode::Paused;
            if let Some(contact) = report.contact {
                println!(
                    "[Orbit] Paused on collision with {} at ({:.1}, {:.1}), dv = {:.3}",
                    contact.celestial,
                    contact.point.x,
                    contact.point.y,
                    contact.delta_v
                );
            }
        }

        if report.committed {
            self.flames.frame(self.world.ship());
        }

        if let Some(id) = report.landed_on {
            let ship = self.world.ship();
            let upright = self
                .world
                .celestial(id)
                .is_some_and(|c| c.is_valid_landing_angle(ship.position(), ship.up()));
            println!(
                "[Orbit] Landed on {} after {} ticks{}",
                id,
                self.world.tick(),
                if upright { "" } else { " (not upright)" }
            );
        }

        self.last_report = Some(report);
        report
    }

    /// Collect this frame's draw data.
    pub fn draw(&self, list: &mut DrawList) {
        self.world.celestials().draw(list);
        self.flames.draw(list);
        self.world.ship().draw(list);
    }
}
