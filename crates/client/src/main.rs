//! Headless skirmish between two rifleman squads.
//!
//! The binary is the composition root that assembles:
//! 1. AI tunables, from `SKIRMISH_CONFIG` or defaults
//! 2. A sandbox arena with cover walls, two squads and a sentry
//! 3. A seeded random source, so runs replay exactly
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_SEED=3 SKIRMISH_SQUAD_SIZE=4 cargo run -p skirmish-cli
//! RUST_LOG=ai_runtime=debug SKIRMISH_INSPECT=1 cargo run -p skirmish-cli
//! ```
mod config;

use std::collections::BTreeMap;

use ai_runtime::{Arena, ArenaConfig, ConfigLoader, EnemyController, StepReport, presets};
use anyhow::{Context, Result};
use combat_core::{AiConfig, Team, Unit};
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SkirmishConfig;

const SQUAD_SPACING: f32 = 6.0;
const SQUAD_OFFSET: f32 = 40.0;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SkirmishConfig::from_env();
    let ai = match &config.ai_config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading AI config from {}", path.display()))?,
        None => AiConfig::default(),
    };

    tracing::info!(
        seed = config.seed,
        ticks = config.ticks,
        squad = config.squad_size,
        "starting skirmish"
    );

    let mut arena = Arena::new(ArenaConfig::default(), ai.combat.clone())?;
    build_scenario(&mut arena, &config, &ai)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut totals = Totals::default();
    for _ in 0..config.ticks {
        let report = arena.step(config.dt, &mut rng)?;
        totals.record(&report);
        if config.inspect {
            log_traces(&report);
        }
        for unit in &report.destroyed {
            tracing::info!(%unit, tick = report.tick, "unit destroyed");
        }

        let survivors = survivors(&arena);
        if survivors.len() < 2 {
            tracing::info!(tick = report.tick, "one side remains");
            break;
        }
    }

    let survivors = survivors(&arena);
    tracing::info!(
        elapsed = arena.clock().now(),
        shots = totals.shots,
        hits = totals.hits,
        destroyed = totals.destroyed,
        ?survivors,
        "skirmish finished"
    );
    Ok(())
}

/// Two squads facing each other across a line of cover, plus a sentry
/// guarding the first rifleman of team 0.
fn build_scenario(arena: &mut Arena, config: &SkirmishConfig, ai: &AiConfig) -> Result<()> {
    for z in [-15.0, 0.0, 15.0] {
        arena.add_wall(Vec3::new(-1.0, 0.0, z - 4.0), Vec3::new(1.0, 3.0, z + 4.0));
    }

    let mut first = None;
    for (team, side) in [(Team(0), -1.0_f32), (Team(1), 1.0)] {
        for slot in 0..config.squad_size {
            let z = (slot as f32 - config.squad_size.saturating_sub(1) as f32 / 2.0) * SQUAD_SPACING;
            let unit = Unit::spawned(
                team,
                Vec3::new(side * SQUAD_OFFSET, 0.0, z),
                0.0,
                &ai.combat,
            )
            .facing(Vec3::new(-side, 0.0, 0.0));
            let id = arena.spawn(unit, presets::rifleman(), ai.clone())?;
            first.get_or_insert(id);
        }
    }

    if let Some(player) = first {
        let sentry = arena.spawn_unit(Unit::spawned(
            Team(1),
            Vec3::new(0.0, 0.0, 40.0),
            0.0,
            &ai.combat,
        ));
        let controller =
            EnemyController::new(sentry, presets::sentry(), ai.clone())?.with_player(player);
        arena.attach(controller)?;
    }

    if config.inspect {
        for unit in arena.controllers().iter().map(EnemyController::unit).collect::<Vec<_>>() {
            if let Some(controller) = arena.controller_mut(unit) {
                controller.set_inspected(true);
            }
        }
    }
    Ok(())
}

#[derive(Default)]
struct Totals {
    shots: usize,
    hits: usize,
    destroyed: usize,
}

impl Totals {
    fn record(&mut self, report: &StepReport) {
        self.shots += report.fired();
        self.hits += report.hits.len();
        self.destroyed += report.destroyed.len();
    }
}

/// Live units per team.
fn survivors(arena: &Arena) -> BTreeMap<u8, usize> {
    let mut teams = BTreeMap::new();
    for (_, unit) in arena.registry().units() {
        *teams.entry(unit.team.0).or_default() += 1;
    }
    teams
}

fn log_traces(report: &StepReport) {
    for (unit, tick) in &report.reports {
        for entry in &tick.trace {
            tracing::debug!(
                unit = %unit,
                label = entry.label,
                status = ?entry.status,
                info = entry.debug_info.as_deref().unwrap_or(""),
                "node"
            );
        }
    }
}
