//! Blackboard handed to every behavior node.
//!
//! The [`AiContext`] bundles, for the duration of one tick:
//!
//! - the simulation time and frame delta
//! - the controlled unit and its [`Brain`]
//! - the entity registry and the engine services (vision, navigation, physics)
//! - the injected random source
//! - the command buffer and inspection trace collected for the host
//!
//! Nodes hold no state of their own; everything they remember goes through
//! the brain and everything they request goes through the command buffer.

use behavior_tree::{Inspector, Status};
use combat_core::{
    AiConfig, EntityId, EntityRegistry, NavigationAgent, PathPlanner, PhysicsQuery, Unit,
    VisionSensor,
};
use glam::Vec3;
use rand::RngCore;

use super::types::{AiCommand, Brain, TraceEntry};

/// Engine services lent to a controller for one tick.
pub struct AiServices<'a> {
    pub registry: &'a mut EntityRegistry,
    pub vision: &'a dyn VisionSensor,
    pub agent: &'a mut dyn NavigationAgent,
    pub planner: &'a dyn PathPlanner,
    pub physics: &'a dyn PhysicsQuery,
    pub rng: &'a mut dyn RngCore,
}

/// Context for behavior-tree evaluation of one unit.
///
/// # Lifetime
///
/// `'a` ties the context to the services and brain borrowed by the
/// controller. Evaluation is synchronous, so the borrows end with the tick.
pub struct AiContext<'a> {
    /// Simulation time in seconds.
    pub now: f32,
    /// Duration of the current frame in seconds.
    pub dt: f32,
    /// The unit making the decision.
    pub unit: EntityId,
    pub brain: &'a mut Brain,
    pub config: &'a AiConfig,
    pub registry: &'a mut EntityRegistry,
    pub vision: &'a dyn VisionSensor,
    pub agent: &'a mut dyn NavigationAgent,
    pub planner: &'a dyn PathPlanner,
    pub physics: &'a dyn PhysicsQuery,
    pub rng: &'a mut dyn RngCore,

    commands: Vec<AiCommand>,
    inspected: bool,
    trace: Vec<TraceEntry>,
    debug_info: Option<String>,
}

impl<'a> AiContext<'a> {
    /// Builds the context for one tick of `unit`.
    ///
    /// The services may outlive the brain borrow; the context is narrowed to
    /// the shorter of the two.
    pub fn new<'s: 'a>(
        unit: EntityId,
        now: f32,
        dt: f32,
        brain: &'a mut Brain,
        config: &'a AiConfig,
        services: AiServices<'s>,
    ) -> Self {
        Self {
            now,
            dt,
            unit,
            brain,
            config,
            registry: services.registry,
            vision: services.vision,
            agent: services.agent,
            planner: services.planner,
            physics: services.physics,
            rng: services.rng,
            commands: Vec::new(),
            inspected: false,
            trace: Vec::new(),
            debug_info: None,
        }
    }

    /// Enables the inspection trace (builder pattern).
    pub fn inspected(mut self, inspected: bool) -> Self {
        self.inspected = inspected;
        self
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// The controlled unit, if it is still alive.
    pub fn me(&self) -> Option<&Unit> {
        self.registry.unit(self.unit)
    }

    pub fn me_mut(&mut self) -> Option<&mut Unit> {
        self.registry.unit_mut(self.unit)
    }

    /// The acquired enemy and its state, if it is still alive.
    pub fn enemy(&self) -> Option<(EntityId, &Unit)> {
        let id = self.brain.acquisition.enemy(self.registry)?;
        self.registry.unit(id).map(|unit| (id, unit))
    }

    /// The unit to hide from: the live last shooter, else the acquired enemy.
    pub fn attacker(&self) -> Option<(EntityId, Vec3)> {
        let me = self.me()?;
        self.registry
            .live(me.shot_by)
            .or_else(|| self.brain.acquisition.enemy(self.registry))
            .and_then(|id| self.registry.get(id).map(|entity| (id, entity.position())))
    }

    // ========================================================================
    // Output
    // ========================================================================

    pub fn push_command(&mut self, command: AiCommand) {
        tracing::debug!(unit = %self.unit, command = command.name(), "command queued");
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[AiCommand] {
        &self.commands
    }

    /// Attaches a debug string to the next recorded node.
    ///
    /// Only call while inspected; formatting would be wasted otherwise.
    pub fn set_debug_info(&mut self, info: String) {
        self.debug_info = Some(info);
    }

    /// Consumes the context, returning the queued commands and trace.
    pub fn finish(self) -> (Vec<AiCommand>, Vec<TraceEntry>) {
        (self.commands, self.trace)
    }
}

impl Inspector for AiContext<'_> {
    fn is_inspected(&self) -> bool {
        self.inspected
    }

    fn record(&mut self, label: &'static str, status: Status) {
        self.trace.push(TraceEntry {
            label,
            status,
            debug_info: self.debug_info.take(),
        });
    }
}
