//! The simulated space
//!
//! `World` owns the celestials and the ship and is the only place the ship's
//! committed movement changes. Each `advance` runs the simulator once; the
//! run mode decides whether the candidate movement is committed.

use crate::input::ShipControls;
use crate::physics::{
    Celestial, CelestialId, Contact, Movement, PhysicsConfig, Ship, ShipSimulator,
};

/// How `World::advance` treats the computed candidate movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationRunMode {
    /// Commit every tick (unless paused on collision)
    #[default]
    Run,
    /// Compute the candidate for inspection, never commit
    Paused,
    /// Commit this one tick regardless of debug pauses
    SingleStep,
}

/// Debug switches that affect stepping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugSettings {
    /// Hold a colliding tick uncommitted while running
    pub pause_on_collision: bool,
}

/// What happened during one `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Candidate movement (the new ship state if `committed`)
    pub movement: Movement,
    /// Contact resolved while computing the candidate
    pub contact: Option<Contact>,
    /// Whether the candidate replaced the ship's movement
    pub committed: bool,
    /// Set when a collision held a running simulation
    pub paused_on_collision: bool,
    /// Celestial the ship settled on this tick
    pub landed_on: Option<CelestialId>,
}

impl TickReport {
    pub fn collided(&self) -> bool {
        self.contact.is_some()
    }

    pub fn collided_with(&self) -> Option<CelestialId> {
        self.contact.map(|c| c.celestial)
    }
}

/// Callback fired once per landing.
pub type LandingListener = Box<dyn FnMut(CelestialId, &Celestial)>;

/// Owns everything the physics touches.
pub struct World {
    celestials: Vec<Celestial>,
    ship: Ship,
    simulator: ShipSimulator,
    debug: DebugSettings,
    landing_listener: Option<LandingListener>,
    tick: u64,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("celestials", &self.celestials)
            .field("ship", &self.ship)
            .field("simulator", &self.simulator)
            .field("debug", &self.debug)
            .field("landing_listener", &self.landing_listener.as_ref().map(|_| "LandingListener"))
            .field("tick", &self.tick)
            .finish()
    }
}

impl World {
    pub fn new(celestials: Vec<Celestial>, ship: Ship, physics: PhysicsConfig) -> Self {
        Self {
            celestials,
            ship,
            simulator: ShipSimulator::new(physics),
            debug: DebugSettings::default(),
            landing_listener: None,
            tick: 0,
        }
    }

    pub fn with_debug(mut self, debug: DebugSettings) -> Self {
        self.debug = debug;
        self
    }

    pub fn celestials(&self) -> &[Celestial] {
        &self.celestials
    }

    pub fn celestial(&self, id: CelestialId) -> Option<&Celestial> {
        self.celestials.get(id.index())
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn physics(&self) -> &PhysicsConfig {
        self.simulator.config()
    }

    pub fn debug(&self) -> &DebugSettings {
        &self.debug
    }

    pub fn debug_mut(&mut self) -> &mut DebugSettings {
        &mut self.debug
    }

    /// Number of committed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Register the landing notification sink, replacing any previous one.
    pub fn on_landed(&mut self, listener: impl FnMut(CelestialId, &Celestial) + 'static) {
        self.landing_listener = Some(Box::new(listener));
    }

    /// Sample the held controls for the coming ticks.
    pub fn set_controls(&mut self, controls: &ShipControls) {
        self.ship.set_controls(controls);
    }

    /// Run the simulator once and commit according to `mode`.
    ///
    /// Landing bookkeeping only runs for committed ticks, so previewing a
    /// paused world never advances the landing streak.
    pub fn advance(&mut self, mode: SimulationRunMode) -> TickReport {
        let outcome = self.simulator.step(&self.ship, &self.celestials);

        let paused_on_collision =
            mode == SimulationRunMode::Run && self.debug.pause_on_collision && outcome.collided();
        let committed = match mode {
            SimulationRunMode::Run => !paused_on_collision,
            SimulationRunMode::Paused => false,
            SimulationRunMode::SingleStep => true,
        };

        let mut landed_on = None;
        if committed {
            let land_delay = self.simulator.config().land_delay;
            landed_on = self.ship.record_contact(outcome.collided_with(), land_delay);
            self.ship.commit(outcome.movement);
            self.tick += 1;
            if let Some(id) = landed_on {
                self.landed_on(id);
            }
        }

        TickReport {
            movement: outcome.movement,
            contact: outcome.contact,
            committed,
            paused_on_collision,
            landed_on,
        }
    }

    /// Mark `id` as landed on and notify the listener.
    pub fn landed_on(&mut self, id: CelestialId) {
        let Some(celestial) = self.celestials.get_mut(id.index()) else {
            return;
        };
        celestial.landed = true;

        if let Some(listener) = self.landing_listener.as_mut() {
            listener(id, &self.celestials[id.index()]);
        }
    }
}
