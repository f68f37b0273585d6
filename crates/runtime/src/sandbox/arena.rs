//! Fixed-step host loop that runs controllers against the sandbox services.

use std::collections::BTreeMap;

use combat_core::{
    AiConfig, ColliderTags, CombatConfig, EntityId, EntityRegistry, HitReport, PhysicsQuery,
    Projectile, SimClock, Unit, apply_projectile_hit, regenerate_health,
};
use glam::Vec3;
use rand::RngCore;

use super::navigation::{SandboxAgent, StraightLinePlanner};
use super::physics::ArenaPhysics;
use super::vision::SandboxVision;
use crate::error::{Result, RuntimeError};
use crate::providers::ai::{AiCommand, AiServices, BehaviorTree, EnemyController, TickReport};

/// World tunables of the sandbox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaConfig {
    /// The floor spans `-half_extent..=half_extent` on X and Z.
    pub half_extent: f32,
    /// Unit movement speed in m/s.
    pub unit_speed: f32,
    /// Projectile speed is the fire impulse divided by this mass.
    pub projectile_mass: f32,
    pub vision_range: f32,
    pub eye_height: f32,
}

impl ArenaConfig {
    pub const DEFAULT_HALF_EXTENT: f32 = 100.0;
    pub const DEFAULT_UNIT_SPEED: f32 = 6.0;
    pub const DEFAULT_PROJECTILE_MASS: f32 = 50.0;
    pub const DEFAULT_VISION_RANGE: f32 = 80.0;
    pub const DEFAULT_EYE_HEIGHT: f32 = 1.5;
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extent: Self::DEFAULT_HALF_EXTENT,
            unit_speed: Self::DEFAULT_UNIT_SPEED,
            projectile_mass: Self::DEFAULT_PROJECTILE_MASS,
            vision_range: Self::DEFAULT_VISION_RANGE,
            eye_height: Self::DEFAULT_EYE_HEIGHT,
        }
    }
}

/// Everything that happened during one [`Arena::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    /// Tick reports in controller order.
    pub reports: Vec<(EntityId, TickReport)>,
    pub hits: Vec<HitReport>,
    /// Units removed this step, by explosion or depletion.
    pub destroyed: Vec<EntityId>,
}

impl StepReport {
    pub fn fired(&self) -> usize {
        self.reports
            .iter()
            .flat_map(|(_, report)| &report.commands)
            .filter(|command| matches!(command, AiCommand::Fire { .. }))
            .count()
    }
}

/// In-memory host: owns the world and ticks every attached controller.
///
/// Each step runs the same phases in the same order:
///
/// 1. advance the clock and refresh bodies and agent positions
/// 2. tick every controller with a fresh vision snapshot
/// 3. execute queued commands
/// 4. move units, then projectiles, resolving impacts
/// 5. regenerate health and remove destroyed units
pub struct Arena {
    clock: SimClock,
    registry: EntityRegistry,
    physics: ArenaPhysics,
    planner: StraightLinePlanner,
    vision: SandboxVision,
    agents: BTreeMap<EntityId, SandboxAgent>,
    controllers: Vec<EnemyController>,
    config: ArenaConfig,
    combat: CombatConfig,
}

impl Arena {
    /// Creates an empty arena. `combat` governs damage and regeneration.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] when `combat` fails validation.
    pub fn new(config: ArenaConfig, combat: CombatConfig) -> Result<Self> {
        combat.validate()?;
        Ok(Self {
            clock: SimClock::new(),
            registry: EntityRegistry::new(),
            physics: ArenaPhysics::new(),
            planner: StraightLinePlanner::new(config.half_extent),
            vision: SandboxVision::new(config.vision_range, config.eye_height),
            agents: BTreeMap::new(),
            controllers: Vec::new(),
            config,
            combat,
        })
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub fn physics(&self) -> &ArenaPhysics {
        &self.physics
    }

    pub fn agent(&self, unit: EntityId) -> Option<&SandboxAgent> {
        self.agents.get(&unit)
    }

    pub fn controllers(&self) -> &[EnemyController] {
        &self.controllers
    }

    pub fn controller_mut(&mut self, unit: EntityId) -> Option<&mut EnemyController> {
        self.controllers.iter_mut().find(|c| c.unit() == unit)
    }

    /// Adds a box of scenery that blocks shots and sight.
    pub fn add_wall(&mut self, min: Vec3, max: Vec3) -> EntityId {
        self.physics.add_wall(min, max, ColliderTags::BLOCKS_SHOTS)
    }

    /// Places a unit with its own navigation agent. Returns its id.
    pub fn spawn_unit(&mut self, unit: Unit) -> EntityId {
        let position = unit.position;
        let id = self.registry.spawn_unit(unit);
        self.agents
            .insert(id, SandboxAgent::new(position, self.config.unit_speed));
        self.planner.place(id, position);
        id
    }

    /// Hands a spawned unit over to `controller`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownUnit`] when the unit has no agent here.
    pub fn attach(&mut self, controller: EnemyController) -> Result<()> {
        let unit = controller.unit();
        let agent = self
            .agents
            .get_mut(&unit)
            .ok_or(RuntimeError::UnknownUnit(unit))?;
        controller.start(agent);
        self.controllers.push(controller);
        Ok(())
    }

    /// Spawns `unit` and attaches a controller running `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] when `config` fails validation.
    pub fn spawn(&mut self, unit: Unit, tree: BehaviorTree, config: AiConfig) -> Result<EntityId> {
        config.validate()?;
        let id = self.spawn_unit(unit);
        self.attach(EnemyController::new(id, tree, config)?)?;
        Ok(id)
    }

    /// Advances the world by `dt` seconds.
    ///
    /// # Errors
    ///
    /// Propagates registry inconsistencies found while resolving impacts.
    pub fn step(&mut self, dt: f32, rng: &mut dyn RngCore) -> Result<StepReport> {
        self.clock.advance(dt);
        let now = self.clock.now();
        self.physics.sync_bodies(&self.registry);
        self.planner.sync_agents(&self.registry);

        let mut report = StepReport {
            tick: self.clock.tick,
            ..StepReport::default()
        };

        for controller in &mut self.controllers {
            let unit = controller.unit();
            let Some(agent) = self.agents.get_mut(&unit) else {
                continue;
            };
            if !self.registry.is_alive(unit) {
                continue;
            }
            let vision = self.vision.observe(unit, &self.registry, &self.physics, now);
            let services = AiServices {
                registry: &mut self.registry,
                vision: &vision,
                agent,
                planner: &self.planner,
                physics: &self.physics,
                rng: &mut *rng,
            };
            let tick = controller.tick(services, &self.clock)?;
            report.reports.push((unit, tick));
        }

        let commands: Vec<AiCommand> = report
            .reports
            .iter()
            .flat_map(|(_, tick)| tick.commands.iter().copied())
            .collect();
        for command in commands {
            self.execute(command, &mut report);
        }

        self.move_units(dt);
        self.move_projectiles(dt, now, &mut report)?;

        for (_, unit) in self.registry.units_mut() {
            regenerate_health(unit, now, &self.combat);
        }
        self.remove_depleted(&mut report);

        Ok(report)
    }

    fn execute(&mut self, command: AiCommand, report: &mut StepReport) {
        match command {
            AiCommand::Fire {
                shooter,
                origin,
                direction,
                impulse,
            } => {
                let velocity = direction * impulse / self.config.projectile_mass;
                let projectile = self
                    .registry
                    .spawn_projectile(Projectile::new(shooter, origin, velocity));
                tracing::debug!(%shooter, %projectile, "projectile fired");
            }
            AiCommand::Explode { unit } => {
                if self.remove_unit(unit) {
                    tracing::debug!(%unit, "unit exploded");
                    report.destroyed.push(unit);
                }
            }
        }
    }

    fn move_units(&mut self, dt: f32) {
        for (id, agent) in &mut self.agents {
            if let Some(unit) = self.registry.unit_mut(*id) {
                unit.position = agent.step(dt);
            }
        }
    }

    fn move_projectiles(&mut self, dt: f32, now: f32, report: &mut StepReport) -> Result<()> {
        self.physics.sync_bodies(&self.registry);

        let flying: Vec<(EntityId, Projectile)> = self
            .registry
            .iter()
            .filter_map(|(id, entity)| entity.as_projectile().map(|p| (id, p.clone())))
            .collect();

        for (id, projectile) in flying {
            let travel = projectile.velocity * dt;
            let impact = travel.try_normalize().and_then(|direction| {
                self.physics
                    .raycast_all(projectile.position, direction, travel.length())
                    .into_iter()
                    .find(|hit| {
                        hit.collider.blocks_shots()
                            && Some(hit.collider.resolved_owner()) != projectile.shooter
                    })
            });

            match impact {
                Some(hit) if self.registry.unit(hit.collider.resolved_owner()).is_some() => {
                    let target = hit.collider.resolved_owner();
                    let outcome = apply_projectile_hit(
                        &mut self.registry,
                        target,
                        id,
                        now,
                        self.combat.projectile_damage,
                    )?;
                    tracing::debug!(
                        %target,
                        remaining = outcome.remaining_health,
                        "projectile hit"
                    );
                    report.hits.push(outcome);
                }
                Some(_) => {
                    self.registry.despawn(id);
                }
                None => {
                    let position = projectile.position + travel;
                    if self.in_bounds(position) {
                        if let Some(flying) = self.registry.projectile_mut(id) {
                            flying.position = position;
                        }
                    } else {
                        self.registry.despawn(id);
                    }
                }
            }
        }
        Ok(())
    }

    fn remove_depleted(&mut self, report: &mut StepReport) {
        let depleted: Vec<EntityId> = self
            .registry
            .units()
            .filter(|(_, unit)| unit.health.is_depleted())
            .map(|(id, _)| id)
            .filter(|id| !self.controllers.iter().any(|c| c.unit() == *id))
            .collect();
        for unit in depleted {
            self.remove_unit(unit);
            tracing::debug!(%unit, "unit destroyed");
            report.destroyed.push(unit);
        }

        let registry = &self.registry;
        self.controllers.retain(|c| registry.is_alive(c.unit()));
    }

    fn remove_unit(&mut self, unit: EntityId) -> bool {
        self.agents.remove(&unit);
        self.vision.forget(unit);
        self.registry.despawn(unit).is_some()
    }

    fn in_bounds(&self, position: Vec3) -> bool {
        let limit = self.config.half_extent;
        position.x.abs() <= limit && position.z.abs() <= limit && position.y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{NavigationAgent, Team};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::providers::ai::presets;

    fn arena() -> Arena {
        Arena::new(ArenaConfig::default(), CombatConfig::default()).unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    #[test]
    fn projectile_damages_the_first_unit_it_reaches() {
        let mut arena = arena();
        let target = arena.spawn_unit(Unit::new(Team(1), Vec3::new(10.0, 0.0, 0.0)));
        let shooter = arena.spawn_unit(Unit::new(Team(0), Vec3::ZERO));
        let bullet = arena.registry_mut().spawn_projectile(Projectile::new(
            shooter,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(40.0, 0.0, 0.0),
        ));

        let report = arena.step(0.5, &mut rng()).unwrap();

        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].target, target);
        assert_eq!(report.hits[0].shooter, Some(shooter));
        assert_eq!(report.hits[0].remaining_health, 90.0);
        assert!(!arena.registry().is_alive(bullet));
        assert_eq!(arena.registry().unit(target).unwrap().shot_by, Some(shooter));
    }

    #[test]
    fn walls_absorb_projectiles() {
        let mut arena = arena();
        let target = arena.spawn_unit(Unit::new(Team(1), Vec3::new(10.0, 0.0, 0.0)));
        let shooter = arena.spawn_unit(Unit::new(Team(0), Vec3::ZERO));
        arena.add_wall(Vec3::new(5.0, 0.0, -2.0), Vec3::new(6.0, 3.0, 2.0));
        let bullet = arena.registry_mut().spawn_projectile(Projectile::new(
            shooter,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(40.0, 0.0, 0.0),
        ));

        let report = arena.step(0.5, &mut rng()).unwrap();

        assert!(report.hits.is_empty());
        assert!(!arena.registry().is_alive(bullet));
        assert!(arena.registry().unit(target).unwrap().health.is_full());
    }

    #[test]
    fn projectiles_leaving_the_floor_are_removed() {
        let mut arena = arena();
        let shooter = arena.spawn_unit(Unit::new(Team(0), Vec3::ZERO));
        let bullet = arena.registry_mut().spawn_projectile(Projectile::new(
            shooter,
            Vec3::new(99.0, 1.0, 0.0),
            Vec3::new(40.0, 0.0, 0.0),
        ));

        arena.step(0.5, &mut rng()).unwrap();

        assert!(!arena.registry().is_alive(bullet));
    }

    #[test]
    fn uncontrolled_depleted_units_are_destroyed() {
        let mut arena = arena();
        let unit = arena.spawn_unit(Unit::new(Team(1), Vec3::ZERO));
        arena
            .registry_mut()
            .unit_mut(unit)
            .unwrap()
            .health
            .apply_damage(500.0);

        let report = arena.step(0.1, &mut rng()).unwrap();

        assert_eq!(report.destroyed, vec![unit]);
        assert!(arena.agent(unit).is_none());
    }

    #[test]
    fn lethal_hit_on_a_regen_frame_is_not_undone() {
        let mut arena = arena();
        let shooter = arena.spawn_unit(Unit::new(Team(0), Vec3::ZERO));
        let mut wounded = Unit::new(Team(1), Vec3::new(5.0, 0.0, 0.0));
        wounded.health.apply_damage(90.0);
        wounded.next_regen_at = 0.1;
        let dummy = arena
            .spawn(wounded, presets::dummy(), AiConfig::default())
            .unwrap();
        arena.registry_mut().spawn_projectile(Projectile::new(
            shooter,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(100.0, 0.0, 0.0),
        ));

        let report = arena.step(0.1, &mut rng()).unwrap();
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].remaining_health, 0.0);
        assert!(arena.registry().unit(dummy).unwrap().health.is_depleted());

        let report = arena.step(0.1, &mut rng()).unwrap();
        assert_eq!(report.destroyed, vec![dummy]);
        assert!(!arena.registry().is_alive(dummy));
    }

    #[test]
    fn invalid_combat_config_is_rejected() {
        let combat = CombatConfig {
            regen_interval: 1e-9,
            ..CombatConfig::default()
        };
        let err = Arena::new(ArenaConfig::default(), combat).err().unwrap();
        assert!(matches!(err, RuntimeError::InvalidConfig(_)));
    }

    #[test]
    fn attaching_to_a_missing_unit_fails() {
        let mut arena = arena();
        let controller =
            EnemyController::new(EntityId(42), presets::dummy(), AiConfig::default()).unwrap();

        let err = arena.attach(controller).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownUnit(EntityId(42))));
    }

    #[test]
    fn attached_agents_stop_inside_shot_range() {
        let mut arena = arena();
        let unit = arena
            .spawn(
                Unit::new(Team(0), Vec3::ZERO),
                presets::dummy(),
                AiConfig::default(),
            )
            .unwrap();

        assert_eq!(arena.agent(unit).unwrap().stopping_distance(), 35.0);
        assert_eq!(arena.controllers().len(), 1);
    }
}
