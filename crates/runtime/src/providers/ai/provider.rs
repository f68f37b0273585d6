//! Per-actor behavior tree controller.

use behavior_tree::Behavior;
use combat_core::{AiConfig, EntityId, NavigationAgent, SimClock};

use super::context::{AiContext, AiServices};
use super::subtrees::BehaviorTree;
use super::types::{Brain, TickReport};
use crate::error::{Result, RuntimeError};

/// Drives one enemy unit with a behavior tree.
///
/// # Design
///
/// The controller owns everything that is per-actor:
///
/// 1. the tree (stateless nodes, shared structure)
/// 2. the [`Brain`] (sightings, acquisition cooldown, aim, random radius)
/// 3. the tunables
///
/// Engine services are lent in through [`AiServices`] on every tick, so the
/// controller never holds a reference into the host.
pub struct EnemyController {
    unit: EntityId,
    tree: BehaviorTree,
    config: AiConfig,
    brain: Brain,
    inspected: bool,
}

impl EnemyController {
    /// Creates a controller for `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] when `config` fails validation.
    pub fn new(unit: EntityId, tree: BehaviorTree, config: AiConfig) -> Result<Self> {
        config.validate()?;
        let brain = Brain::new(&config.motion);
        Ok(Self {
            unit,
            tree,
            config,
            brain,
            inspected: false,
        })
    }

    /// Designates the entity `SeePlayer` looks for (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: EntityId) -> Self {
        self.brain.player = Some(player);
        self
    }

    /// Turns the per-node inspection trace on or off.
    pub fn set_inspected(&mut self, inspected: bool) {
        self.inspected = inspected;
    }

    pub fn unit(&self) -> EntityId {
        self.unit
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Prepares the unit's agent; call once when the unit spawns.
    ///
    /// The agent stops a little inside shooting range.
    pub fn start(&self, agent: &mut dyn NavigationAgent) {
        agent.set_stopping_distance(self.config.combat.stopping_distance());
    }

    /// Evaluates the tree once at the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownUnit`] when the controlled unit is no
    /// longer alive; the host should drop the controller.
    pub fn tick(&mut self, services: AiServices<'_>, clock: &SimClock) -> Result<TickReport> {
        if !services.registry.is_alive(self.unit) {
            tracing::warn!(unit = %self.unit, "tick for a unit that is gone");
            return Err(RuntimeError::UnknownUnit(self.unit));
        }

        let mut ctx = AiContext::new(
            self.unit,
            clock.now(),
            clock.delta_secs,
            &mut self.brain,
            &self.config,
            services,
        )
        .inspected(self.inspected);

        let status = self.tree.tick(&mut ctx);
        let (commands, trace) = ctx.finish();

        tracing::trace!(
            unit = %self.unit,
            tick = clock.tick,
            ?status,
            commands = commands.len(),
            "tree evaluated"
        );

        Ok(TickReport {
            status,
            commands,
            trace,
        })
    }
}
