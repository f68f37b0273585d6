//! Single-unit fixture for exercising nodes against sandbox services.

use behavior_tree::{Behavior, Status};
use combat_core::{AiConfig, EntityId, EntityRegistry, StaticVision, Team, Unit};
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{AiCommand, AiContext, AiServices, Brain, TraceEntry};
use crate::sandbox::{ArenaPhysics, SandboxAgent, StraightLinePlanner};

pub(crate) struct Fixture {
    pub unit: EntityId,
    pub dt: f32,
    pub registry: EntityRegistry,
    pub vision: StaticVision,
    pub agent: SandboxAgent,
    pub planner: StraightLinePlanner,
    pub physics: ArenaPhysics,
    pub rng: ChaCha8Rng,
    pub brain: Brain,
    pub config: AiConfig,
}

/// What one evaluation produced.
pub(crate) struct Outcome {
    pub status: Status,
    pub commands: Vec<AiCommand>,
    pub trace: Vec<TraceEntry>,
}

impl Fixture {
    /// A team 0 unit at `position` facing +Z.
    pub fn new(position: Vec3) -> Self {
        let config = AiConfig::default();
        let mut registry = EntityRegistry::new();
        let unit = registry.spawn_unit(Unit::new(Team(0), position));
        let mut planner = StraightLinePlanner::new(100.0);
        planner.place(unit, position);
        Self {
            unit,
            dt: 0.1,
            registry,
            vision: StaticVision::blind(),
            agent: SandboxAgent::new(position, 6.0),
            planner,
            physics: ArenaPhysics::new(),
            rng: ChaCha8Rng::seed_from_u64(7),
            brain: Brain::new(&config.motion),
            config,
        }
    }

    /// Adds another unit that the planner can route.
    pub fn spawn(&mut self, unit: Unit) -> EntityId {
        let position = unit.position;
        let id = self.registry.spawn_unit(unit);
        self.planner.place(id, position);
        id
    }

    pub fn me(&mut self) -> &mut Unit {
        self.registry
            .unit_mut(self.unit)
            .expect("fixture unit is alive")
    }

    pub fn tick<B>(&mut self, node: &B, now: f32) -> Outcome
    where
        B: for<'a> Behavior<AiContext<'a>>,
    {
        self.evaluate(node, now, false)
    }

    pub fn inspect<B>(&mut self, node: &B, now: f32) -> Outcome
    where
        B: for<'a> Behavior<AiContext<'a>>,
    {
        self.evaluate(node, now, true)
    }

    fn evaluate<B>(&mut self, node: &B, now: f32, inspected: bool) -> Outcome
    where
        B: for<'a> Behavior<AiContext<'a>>,
    {
        self.physics.sync_bodies(&self.registry);
        self.planner.sync_agents(&self.registry);
        let services = AiServices {
            registry: &mut self.registry,
            vision: &self.vision,
            agent: &mut self.agent,
            planner: &self.planner,
            physics: &self.physics,
            rng: &mut self.rng,
        };
        let mut ctx = AiContext::new(
            self.unit,
            now,
            self.dt,
            &mut self.brain,
            &self.config,
            services,
        )
        .inspected(inspected);
        let status = node.tick(&mut ctx);
        let (commands, trace) = ctx.finish();
        Outcome {
            status,
            commands,
            trace,
        }
    }
}
