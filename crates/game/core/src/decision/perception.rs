//! Recency-windowed sighting bookkeeping.

use glam::Vec3;

use crate::state::EntityId;

/// Last sighting of one tracked entity.
///
/// `last_seen_time` never decreases while the same entity is tracked.
/// `last_known_position` only changes when the entity is confirmed in the
/// current visibility set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionState {
    tracked: Option<EntityId>,
    last_seen_time: f32,
    last_known_position: Option<Vec3>,
}

impl Default for PerceptionState {
    fn default() -> Self {
        Self::new()
    }
}

impl PerceptionState {
    pub fn new() -> Self {
        Self {
            tracked: None,
            last_seen_time: f32::NEG_INFINITY,
            last_known_position: None,
        }
    }

    pub fn tracked(&self) -> Option<EntityId> {
        self.tracked
    }

    pub fn last_seen_time(&self) -> f32 {
        self.last_seen_time
    }

    pub fn last_known_position(&self) -> Option<Vec3> {
        self.last_known_position
    }

    /// Scans this frame's visibility set for `tracked`.
    ///
    /// On the first match (in set order) the sighting time moves to `now` and
    /// the known position to `position`. Returns whether the entity was seen.
    pub fn record_visibility_tick(
        &mut self,
        now: f32,
        visibles: &[EntityId],
        tracked: EntityId,
        position: Vec3,
    ) -> bool {
        if !visibles.iter().any(|id| *id == tracked) {
            return false;
        }
        self.tracked = Some(tracked);
        self.last_seen_time = self.last_seen_time.max(now);
        self.last_known_position = Some(position);
        true
    }

    /// Whether the last sighting is strictly younger than `window` seconds.
    pub fn is_recently_seen(&self, now: f32, window: f32) -> bool {
        (now - self.last_seen_time) < window
    }

    /// Drops the sighting, e.g. when the tracked entity was destroyed.
    pub fn forget(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f32 = 0.5;

    #[test]
    fn sighting_updates_time_and_position() {
        let mut state = PerceptionState::new();
        let seen = state.record_visibility_tick(
            3.0,
            &[EntityId(1), EntityId(5)],
            EntityId(5),
            Vec3::new(1.0, 0.0, 2.0),
        );

        assert!(seen);
        assert_eq!(state.last_seen_time(), 3.0);
        assert_eq!(state.last_known_position(), Some(Vec3::new(1.0, 0.0, 2.0)));
        assert_eq!(state.tracked(), Some(EntityId(5)));
    }

    #[test]
    fn absence_leaves_state_untouched() {
        let mut state = PerceptionState::new();
        state.record_visibility_tick(1.0, &[EntityId(5)], EntityId(5), Vec3::X);

        let seen = state.record_visibility_tick(2.0, &[EntityId(4)], EntityId(5), Vec3::ZERO);

        assert!(!seen);
        assert_eq!(state.last_seen_time(), 1.0);
        assert_eq!(state.last_known_position(), Some(Vec3::X));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut state = PerceptionState::new();
        state.record_visibility_tick(1.0, &[EntityId(2)], EntityId(2), Vec3::ZERO);

        assert!(state.is_recently_seen(1.25, WINDOW));
        assert!(!state.is_recently_seen(1.5, WINDOW));
        assert!(!state.is_recently_seen(2.0, WINDOW));
    }

    #[test]
    fn never_seen_is_never_recent() {
        let state = PerceptionState::new();
        assert!(!state.is_recently_seen(0.0, WINDOW));
        assert!(!state.is_recently_seen(f32::MAX, WINDOW));
    }

    #[test]
    fn time_does_not_move_backwards() {
        let mut state = PerceptionState::new();
        state.record_visibility_tick(4.0, &[EntityId(2)], EntityId(2), Vec3::ZERO);
        state.record_visibility_tick(3.0, &[EntityId(2)], EntityId(2), Vec3::ONE);

        assert_eq!(state.last_seen_time(), 4.0);
        assert_eq!(state.last_known_position(), Some(Vec3::ONE));
    }

    #[test]
    fn forget_resets_everything() {
        let mut state = PerceptionState::new();
        state.record_visibility_tick(4.0, &[EntityId(2)], EntityId(2), Vec3::ZERO);
        state.forget();
        assert_eq!(state, PerceptionState::new());
    }
}
