use core::fmt;

use glam::Vec3;

use crate::config::CombatConfig;
use crate::state::Health;

/// Unique identifier of any game object the decision layer can refer to.
///
/// Identifiers are never reused within one [`super::EntityRegistry`], so a
/// stale id simply stops resolving once its entity is despawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team affiliation. Units never target members of their own team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team(pub u8);

/// A combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub team: Team,
    pub ammo: u32,
    pub position: Vec3,
    /// Unit-length horizontal facing.
    pub forward: Vec3,
    /// Last unit whose projectile hit this one, cleared by target acquisition.
    pub shot_by: Option<EntityId>,
    pub last_shot_time: f32,
    pub health: Health,
    /// Simulation time of the next health regeneration step.
    pub next_regen_at: f32,
}

impl Unit {
    pub const DEFAULT_AMMO: u32 = 30;

    /// A unit spawned at time zero with default combat tunables.
    pub fn new(team: Team, position: Vec3) -> Self {
        Self::spawned(team, position, 0.0, &CombatConfig::default())
    }

    /// A unit spawned at `now`; regeneration starts after `combat.regen_delay`.
    pub fn spawned(team: Team, position: Vec3, now: f32, combat: &CombatConfig) -> Self {
        Self {
            team,
            ammo: Self::DEFAULT_AMMO,
            position,
            forward: Vec3::Z,
            shot_by: None,
            last_shot_time: f32::NEG_INFINITY,
            health: Health::new(combat.max_health),
            next_regen_at: now + combat.regen_delay,
        }
    }

    #[must_use]
    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo;
        self
    }

    /// Sets the facing; zero or vertical vectors leave it unchanged.
    #[must_use]
    pub fn facing(mut self, forward: Vec3) -> Self {
        self.face(forward);
        self
    }

    /// Turns the unit toward `forward` projected onto the ground plane.
    pub fn face(&mut self, forward: Vec3) {
        let flat = Vec3::new(forward.x, 0.0, forward.z);
        if let Some(dir) = flat.try_normalize() {
            self.forward = dir;
        }
    }

    pub fn is_enemy_of(&self, other: &Unit) -> bool {
        self.team != other.team
    }

    /// Records a hit from `shooter` at time `now`.
    pub fn register_hit(&mut self, shooter: Option<EntityId>, now: f32) {
        self.shot_by = shooter;
        self.last_shot_time = now;
    }

    /// Spawn point of projectiles fired by this unit.
    pub fn muzzle(&self, combat: &CombatConfig) -> Vec3 {
        self.position + self.forward * combat.muzzle_offset + Vec3::Y * combat.muzzle_height
    }
}

/// A fired projectile. Its shooter may already be gone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub shooter: Option<EntityId>,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Projectile {
    pub fn new(shooter: EntityId, position: Vec3, velocity: Vec3) -> Self {
        Self {
            shooter: Some(shooter),
            position,
            velocity,
        }
    }
}

/// Discriminant of [`Entity`], used in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Unit,
    Projectile,
}

/// Everything the registry can hold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Unit(Unit),
    Projectile(Projectile),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Unit(_) => EntityKind::Unit,
            Entity::Projectile(_) => EntityKind::Projectile,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Entity::Unit(unit) => unit.position,
            Entity::Projectile(projectile) => projectile.position,
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Entity::Unit(unit) => Some(unit),
            Entity::Projectile(_) => None,
        }
    }

    pub fn as_projectile(&self) -> Option<&Projectile> {
        match self {
            Entity::Projectile(projectile) => Some(projectile),
            Entity::Unit(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_ignores_vertical_component() {
        let unit = Unit::new(Team(0), Vec3::ZERO).facing(Vec3::new(3.0, 10.0, 0.0));
        assert_eq!(unit.forward, Vec3::X);

        let unchanged = Unit::new(Team(0), Vec3::ZERO).facing(Vec3::Y);
        assert_eq!(unchanged.forward, Vec3::Z);
    }

    #[test]
    fn muzzle_sits_ahead_and_above() {
        let combat = CombatConfig::default();
        let unit = Unit::new(Team(1), Vec3::new(2.0, 0.0, 2.0)).facing(Vec3::X);
        assert_eq!(unit.muzzle(&combat), Vec3::new(3.0, 1.5, 2.0));
    }

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(EntityKind::Projectile.to_string(), "projectile");
    }
}
