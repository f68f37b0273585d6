//! Tunable parameters for the decision layer.
//!
//! Every window, radius and weight used by perception, acquisition and cover
//! search lives here so hosts can tune units per archetype without touching
//! the algorithms.

use crate::error::ConfigError;

/// Root configuration carried by every controller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    pub perception: PerceptionConfig,
    pub acquisition: AcquisitionConfig,
    pub cover: CoverConfig,
    pub combat: CombatConfig,
    pub motion: MotionConfig,
}

impl AiConfig {
    /// Checks every section, returning the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.perception.validate()?;
        self.acquisition.validate()?;
        self.cover.validate()?;
        self.combat.validate()?;
        self.motion.validate()
    }
}

/// Visibility bookkeeping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerceptionConfig {
    /// Seconds a sighting counts as "currently visible".
    pub visibility_window: f32,
    /// Hits closer than this to the ray destination never block line of sight.
    pub destination_tolerance: f32,
}

impl PerceptionConfig {
    pub const DEFAULT_VISIBILITY_WINDOW: f32 = 0.5;
    pub const DEFAULT_DESTINATION_TOLERANCE: f32 = 2.0;

    fn validate(&self) -> Result<(), ConfigError> {
        positive("perception.visibility_window", self.visibility_window)?;
        non_negative("perception.destination_tolerance", self.destination_tolerance)
    }
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            visibility_window: Self::DEFAULT_VISIBILITY_WINDOW,
            destination_tolerance: Self::DEFAULT_DESTINATION_TOLERANCE,
        }
    }
}

/// Enemy selection timing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcquisitionConfig {
    /// Minimum seconds between two re-evaluations of the best enemy.
    pub cooldown: f32,
    /// Seconds after a hit during which the shooter is a known enemy.
    pub engagement_memory: f32,
}

impl AcquisitionConfig {
    pub const DEFAULT_COOLDOWN: f32 = 0.5;
    pub const DEFAULT_ENGAGEMENT_MEMORY: f32 = 1.0;

    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("acquisition.cooldown", self.cooldown)?;
        non_negative("acquisition.engagement_memory", self.engagement_memory)
    }
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            cooldown: Self::DEFAULT_COOLDOWN,
            engagement_memory: Self::DEFAULT_ENGAGEMENT_MEMORY,
        }
    }
}

/// Ring sampling and scoring for cover search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverConfig {
    /// Radius of the first sampling ring.
    pub initial_radius: f32,
    /// Radius added after each ring.
    pub radius_step: f32,
    /// Sampling stops once this many hidden points are collected.
    pub min_candidates: usize,
    /// Random points drawn per ring.
    pub samples_per_ring: usize,
    /// Hard cap on rings so maps without cover still terminate.
    pub max_rings: usize,
    /// Weight of the attacker's path length in the score.
    pub attacker_distance_weight: f32,
}

impl CoverConfig {
    pub const DEFAULT_INITIAL_RADIUS: f32 = 3.0;
    pub const DEFAULT_RADIUS_STEP: f32 = 2.0;
    pub const DEFAULT_MIN_CANDIDATES: usize = 20;
    pub const DEFAULT_SAMPLES_PER_RING: usize = 10;
    pub const DEFAULT_MAX_RINGS: usize = 10;
    pub const DEFAULT_ATTACKER_DISTANCE_WEIGHT: f32 = 0.1;

    fn validate(&self) -> Result<(), ConfigError> {
        positive("cover.initial_radius", self.initial_radius)?;
        non_negative("cover.radius_step", self.radius_step)?;
        nonzero("cover.min_candidates", self.min_candidates)?;
        nonzero("cover.samples_per_ring", self.samples_per_ring)?;
        nonzero("cover.max_rings", self.max_rings)?;
        non_negative("cover.attacker_distance_weight", self.attacker_distance_weight)
    }
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            initial_radius: Self::DEFAULT_INITIAL_RADIUS,
            radius_step: Self::DEFAULT_RADIUS_STEP,
            min_candidates: Self::DEFAULT_MIN_CANDIDATES,
            samples_per_ring: Self::DEFAULT_SAMPLES_PER_RING,
            max_rings: Self::DEFAULT_MAX_RINGS,
            attacker_distance_weight: Self::DEFAULT_ATTACKER_DISTANCE_WEIGHT,
        }
    }
}

/// Weapons and damage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Magnitude of the impulse given to a freshly fired projectile.
    pub fire_impulse: f32,
    /// Preferred engagement distance; agents stop `stopping_buffer` short of it.
    pub shot_range: f32,
    pub stopping_buffer: f32,
    /// Maximum (and initial) health of a unit.
    pub max_health: f32,
    /// Health removed by one projectile hit.
    pub projectile_damage: f32,
    /// Health restored per regeneration step.
    pub regen_amount: f32,
    /// Seconds between regeneration steps.
    pub regen_interval: f32,
    /// Seconds after spawn before regeneration starts.
    pub regen_delay: f32,
    /// Muzzle offset from the unit origin along its facing.
    pub muzzle_offset: f32,
    /// Muzzle height above the unit origin.
    pub muzzle_height: f32,
}

impl CombatConfig {
    pub const DEFAULT_FIRE_IMPULSE: f32 = 2000.0;
    pub const DEFAULT_SHOT_RANGE: f32 = 40.0;
    pub const DEFAULT_STOPPING_BUFFER: f32 = 5.0;
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
    pub const DEFAULT_PROJECTILE_DAMAGE: f32 = 10.0;
    pub const DEFAULT_REGEN_AMOUNT: f32 = 1.0;
    pub const DEFAULT_REGEN_INTERVAL: f32 = 0.5;
    pub const DEFAULT_REGEN_DELAY: f32 = 5.0;
    pub const DEFAULT_MUZZLE_OFFSET: f32 = 1.0;
    pub const DEFAULT_MUZZLE_HEIGHT: f32 = 1.5;

    /// Shortest regeneration interval accepted.
    pub const MIN_REGEN_INTERVAL: f32 = 1e-3;

    /// Stopping distance handed to the navigation agent at startup.
    pub fn stopping_distance(&self) -> f32 {
        (self.shot_range - self.stopping_buffer).max(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("combat.fire_impulse", self.fire_impulse)?;
        non_negative("combat.shot_range", self.shot_range)?;
        non_negative("combat.stopping_buffer", self.stopping_buffer)?;
        positive("combat.max_health", self.max_health)?;
        non_negative("combat.projectile_damage", self.projectile_damage)?;
        non_negative("combat.regen_amount", self.regen_amount)?;
        at_least(
            "combat.regen_interval",
            Self::MIN_REGEN_INTERVAL,
            self.regen_interval,
        )?;
        non_negative("combat.regen_delay", self.regen_delay)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            fire_impulse: Self::DEFAULT_FIRE_IMPULSE,
            shot_range: Self::DEFAULT_SHOT_RANGE,
            stopping_buffer: Self::DEFAULT_STOPPING_BUFFER,
            max_health: Self::DEFAULT_MAX_HEALTH,
            projectile_damage: Self::DEFAULT_PROJECTILE_DAMAGE,
            regen_amount: Self::DEFAULT_REGEN_AMOUNT,
            regen_interval: Self::DEFAULT_REGEN_INTERVAL,
            regen_delay: Self::DEFAULT_REGEN_DELAY,
            muzzle_offset: Self::DEFAULT_MUZZLE_OFFSET,
            muzzle_height: Self::DEFAULT_MUZZLE_HEIGHT,
        }
    }
}

/// Movement destinations and turning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Radius used by random destinations until a node overrides it.
    pub random_destination_radius: f32,
    /// Half extent of the square roaming destinations are drawn from.
    pub roam_extent: i32,
    /// Turning speed toward the aim target (fraction per second).
    pub rotation_speed: f32,
}

impl MotionConfig {
    pub const DEFAULT_RANDOM_DESTINATION_RADIUS: f32 = 1.0;
    pub const DEFAULT_ROAM_EXTENT: i32 = 100;
    pub const DEFAULT_ROTATION_SPEED: f32 = 5.0;

    fn validate(&self) -> Result<(), ConfigError> {
        non_negative(
            "motion.random_destination_radius",
            self.random_destination_radius,
        )?;
        if self.roam_extent <= 0 {
            return Err(ConfigError::NotPositive {
                field: "motion.roam_extent",
                value: self.roam_extent as f32,
            });
        }
        non_negative("motion.rotation_speed", self.rotation_speed)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            random_destination_radius: Self::DEFAULT_RANDOM_DESTINATION_RADIUS,
            roam_extent: Self::DEFAULT_ROAM_EXTENT,
            rotation_speed: Self::DEFAULT_ROTATION_SPEED,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn at_least(field: &'static str, min: f32, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(ConfigError::TooSmall { field, min, value })
    }
}

fn nonzero(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::Zero { field })
    } else {
        Ok(())
    }
}
