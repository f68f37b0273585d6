//! Skirmish settings loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Knobs for one headless skirmish run.
#[derive(Clone, Debug, PartialEq)]
pub struct SkirmishConfig {
    pub seed: u64,
    pub ticks: u32,
    /// Fixed frame length in seconds.
    pub dt: f32,
    pub squad_size: usize,
    /// TOML file with AI tunables; defaults apply when unset.
    pub ai_config: Option<PathBuf>,
    /// Log the per-node inspection trace of every controller.
    pub inspect: bool,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            ticks: 600,
            dt: 0.1,
            squad_size: 3,
            ai_config: None,
            inspect: false,
        }
    }
}

impl SkirmishConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SEED` - Random seed (default: 7)
    /// - `SKIRMISH_TICKS` - Maximum frames to simulate (default: 600)
    /// - `SKIRMISH_DT` - Frame length in seconds (default: 0.1)
    /// - `SKIRMISH_SQUAD_SIZE` - Riflemen per team (default: 3)
    /// - `SKIRMISH_CONFIG` - Path to an AI tunables TOML file (optional)
    /// - `SKIRMISH_INSPECT` - Log inspection traces (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("SKIRMISH_SEED") {
            config.seed = seed;
        }
        if let Some(ticks) = read_env::<u32>("SKIRMISH_TICKS") {
            config.ticks = ticks;
        }
        if let Some(dt) = read_env::<f32>("SKIRMISH_DT").filter(|dt| *dt > 0.0) {
            config.dt = dt;
        }
        if let Some(size) = read_env::<usize>("SKIRMISH_SQUAD_SIZE") {
            config.squad_size = size.max(1);
        }

        config.ai_config = env::var("SKIRMISH_CONFIG").ok().map(PathBuf::from);

        if let Some(inspect) = read_env::<bool>("SKIRMISH_INSPECT") {
            config.inspect = inspect;
        } else if env::var("SKIRMISH_INSPECT").is_ok() {
            // A bare variable counts as "true"
            config.inspect = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
