//! Cover search on expanding sampling rings.
//!
//! A search runs in two stages inside a single frame:
//!
//! 1. **Sampling**: random points are drawn on rings around the defender,
//!    growing the radius after each ring, and kept only when the attacker has
//!    no line of sight to them. Sampling stops once enough hidden points are
//!    collected or the ring cap is reached.
//! 2. **Evaluation**: each hidden point reachable by the defender is scored
//!    by `defender_path - weight * attacker_path`; the lowest score wins and
//!    ties keep the first point found.

use core::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::config::CoverConfig;
use crate::decision::has_line_of_sight;
use crate::env::{PathPlanner, PhysicsQuery};
use crate::state::EntityId;

/// Who hides from whom, and where both stand right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverQuery {
    pub defender: EntityId,
    pub defender_position: Vec3,
    pub attacker: EntityId,
    pub attacker_position: Vec3,
}

/// A hidden point with its path costs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverCandidate {
    pub position: Vec3,
    /// Defender path length, `None` when no complete path exists.
    pub defender_cost: Option<f32>,
    /// Attacker path length, zero when the attacker cannot plan a path.
    pub attacker_cost: f32,
}

impl CoverCandidate {
    /// Blended cost, or `None` for points the defender cannot reach.
    pub fn score(&self, attacker_weight: f32) -> Option<f32> {
        self.defender_cost
            .map(|defender| defender - attacker_weight * self.attacker_cost)
    }
}

/// Result of one cover search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoverOutcome {
    /// Best reachable hidden point.
    Found { candidate: CoverCandidate },
    /// Hidden points exist but the defender can reach none of them.
    Unreachable { fallback: Vec3, candidates: usize },
    /// The ring cap was hit without finding a single hidden point.
    Exhausted { fallback: Vec3 },
}

impl CoverOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Where the defender should go: the chosen point, or its own position.
    pub fn destination(&self) -> Vec3 {
        match self {
            Self::Found { candidate } => candidate.position,
            Self::Unreachable { fallback, .. } | Self::Exhausted { fallback } => *fallback,
        }
    }
}

/// Cover search bound to one set of tunables.
#[derive(Clone, Copy, Debug)]
pub struct CoverSearch<'a> {
    config: &'a CoverConfig,
    los_tolerance: f32,
}

impl<'a> CoverSearch<'a> {
    /// `los_tolerance` is the grazing radius passed to the line-of-sight query.
    pub fn new(config: &'a CoverConfig, los_tolerance: f32) -> Self {
        Self {
            config,
            los_tolerance,
        }
    }

    pub fn find<R: Rng + ?Sized>(
        &self,
        query: &CoverQuery,
        physics: &dyn PhysicsQuery,
        planner: &dyn PathPlanner,
        rng: &mut R,
    ) -> CoverOutcome {
        let hidden = self.sample(query, physics, rng);
        if hidden.is_empty() {
            return CoverOutcome::Exhausted {
                fallback: query.defender_position,
            };
        }
        self.evaluate(query, planner, &hidden)
    }

    /// Collects ring samples the attacker cannot see.
    ///
    /// Whole rings are sampled, so the result may exceed `min_candidates`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        query: &CoverQuery,
        physics: &dyn PhysicsQuery,
        rng: &mut R,
    ) -> Vec<Vec3> {
        let ignore = [query.defender, query.attacker];
        let mut hidden = Vec::with_capacity(self.config.min_candidates);
        let mut radius = self.config.initial_radius;

        for _ in 0..self.config.max_rings {
            if hidden.len() >= self.config.min_candidates {
                break;
            }
            for _ in 0..self.config.samples_per_ring {
                let angle = rng.gen_range(0.0..TAU);
                let point = query.defender_position
                    + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
                if !has_line_of_sight(
                    physics,
                    query.attacker_position,
                    point,
                    &ignore,
                    self.los_tolerance,
                ) {
                    hidden.push(point);
                }
            }
            radius += self.config.radius_step;
        }
        hidden
    }

    /// Scores `hidden` points and picks the cheapest reachable one.
    pub fn evaluate(
        &self,
        query: &CoverQuery,
        planner: &dyn PathPlanner,
        hidden: &[Vec3],
    ) -> CoverOutcome {
        let weight = self.config.attacker_distance_weight;
        let mut best: Option<(f32, CoverCandidate)> = None;

        for &position in hidden {
            let candidate = self.cost(query, planner, position);
            let Some(score) = candidate.score(weight) else {
                continue;
            };
            if best.is_none_or(|(lowest, _)| score < lowest) {
                best = Some((score, candidate));
            }
        }

        match best {
            Some((_, candidate)) => CoverOutcome::Found { candidate },
            None => CoverOutcome::Unreachable {
                fallback: query.defender_position,
                candidates: hidden.len(),
            },
        }
    }

    fn cost(&self, query: &CoverQuery, planner: &dyn PathPlanner, position: Vec3) -> CoverCandidate {
        let defender_cost = planner
            .calculate_path(query.defender, position)
            .filter(|path| path.is_complete())
            .and_then(|path| path.length());

        // Unreachable points are dropped anyway, skip the second query.
        let attacker_cost = match defender_cost {
            Some(_) => planner
                .calculate_path(query.attacker, position)
                .filter(|path| path.exists())
                .and_then(|path| path.length())
                .unwrap_or(0.0),
            None => 0.0,
        };

        CoverCandidate {
            position,
            defender_cost,
            attacker_cost,
        }
    }
}
