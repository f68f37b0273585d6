//! Periodic health regeneration.

use crate::config::CombatConfig;
use crate::state::Unit;

/// Heals `unit` once per elapsed `regen_interval` up to time `now`.
///
/// The first step happens `regen_delay` seconds after spawn. Steps missed by
/// a long frame are caught up, and a full pool still consumes its steps.
/// Returns the number of steps taken. A depleted unit stays depleted, and an
/// interval below [`CombatConfig::MIN_REGEN_INTERVAL`] takes no steps.
pub fn regenerate_health(unit: &mut Unit, now: f32, combat: &CombatConfig) -> u32 {
    let too_fast = !(combat.regen_interval >= CombatConfig::MIN_REGEN_INTERVAL);
    if too_fast || unit.health.is_depleted() {
        return 0;
    }
    let mut steps = 0;
    while unit.next_regen_at <= now {
        if !unit.health.is_full() {
            unit.health.heal(combat.regen_amount);
        }
        unit.next_regen_at += combat.regen_interval;
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::state::Team;

    #[test]
    fn nothing_happens_before_delay() {
        let combat = CombatConfig::default();
        let mut unit = Unit::spawned(Team(0), Vec3::ZERO, 0.0, &combat);
        unit.health.apply_damage(20.0);

        assert_eq!(regenerate_health(&mut unit, 4.9, &combat), 0);
        assert_eq!(unit.health.current(), 80.0);
    }

    #[test]
    fn heals_one_point_per_interval() {
        let combat = CombatConfig::default();
        let mut unit = Unit::spawned(Team(0), Vec3::ZERO, 0.0, &combat);
        unit.health.apply_damage(20.0);

        // Steps at 5.0, 5.5, 6.0.
        assert_eq!(regenerate_health(&mut unit, 6.1, &combat), 3);
        assert_eq!(unit.health.current(), 83.0);
        assert_eq!(regenerate_health(&mut unit, 6.2, &combat), 0);
    }

    #[test]
    fn depleted_unit_is_not_revived() {
        let combat = CombatConfig::default();
        let mut unit = Unit::spawned(Team(0), Vec3::ZERO, 0.0, &combat);
        unit.health.apply_damage(100.0);

        assert_eq!(regenerate_health(&mut unit, 6.0, &combat), 0);
        assert!(unit.health.is_depleted());
    }

    #[test]
    fn tiny_interval_takes_no_steps() {
        let combat = CombatConfig {
            regen_interval: 1e-9,
            ..CombatConfig::default()
        };
        let mut unit = Unit::spawned(Team(0), Vec3::ZERO, 0.0, &combat);
        unit.health.apply_damage(20.0);

        assert_eq!(regenerate_health(&mut unit, 5.0, &combat), 0);
        assert_eq!(unit.health.current(), 80.0);
    }

    #[test]
    fn never_exceeds_max() {
        let combat = CombatConfig::default();
        let mut unit = Unit::spawned(Team(0), Vec3::ZERO, 0.0, &combat);
        unit.health.apply_damage(1.0);

        regenerate_health(&mut unit, 30.0, &combat);

        assert!(unit.health.is_full());
        assert_eq!(unit.health.current(), 100.0);
    }
}
