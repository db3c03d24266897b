use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::model::{ProfileData, parse_profile_json};
use crate::sample_data;

const DEFAULT_TICK_MS: u64 = 250;
const MIN_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashConfig {
    pub data_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub tick_rate: Duration,
}

impl DashConfig {
    /// Reads `.env.local`/`.env` (if present) and the process environment.
    /// A first CLI argument overrides `PROFILE_DATA`.
    pub fn from_env(cli_data_path: Option<PathBuf>) -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(cli_data_path, |key| env::var(key).ok())
    }

    pub fn from_lookup(
        cli_data_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let data_path = cli_data_path.or_else(|| non_empty(lookup("PROFILE_DATA")).map(PathBuf::from));
        let log_path = non_empty(lookup("PROFILE_DASH_LOG")).map(PathBuf::from);
        let tick_ms = lookup("PROFILE_TICK_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .max(MIN_TICK_MS);
        Self {
            data_path,
            log_path,
            tick_rate: Duration::from_millis(tick_ms),
        }
    }
}

fn non_empty(val: Option<String>) -> Option<String> {
    val.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn load_profile(path: &Path) -> Result<ProfileData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read profile data {}", path.display()))?;
    let data = parse_profile_json(&raw)
        .with_context(|| format!("parse profile data {}", path.display()))?;
    info!(
        path = %path.display(),
        rankings = data.rankings.len(),
        milestones = data.milestones.len(),
        badges = data.badges.len(),
        teams = data.team_history.len(),
        "loaded profile data"
    );
    Ok(data)
}

/// Profile from the configured data file, or generated demo data when none is set.
pub fn resolve_profile(config: &DashConfig) -> Result<ProfileData> {
    match &config.data_path {
        Some(path) => load_profile(path),
        None => {
            warn!("no PROFILE_DATA configured; using demo profile");
            Ok(sample_data::demo_profile(&mut rand::thread_rng()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = DashConfig::from_lookup(None, lookup_from(&[]));
        assert_eq!(cfg.data_path, None);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.tick_rate, Duration::from_millis(DEFAULT_TICK_MS));
    }

    #[test]
    fn cli_path_wins_and_tick_is_floored() {
        let cfg = DashConfig::from_lookup(
            Some(PathBuf::from("cli.json")),
            lookup_from(&[
                ("PROFILE_DATA", "env.json"),
                ("PROFILE_DASH_LOG", "  "),
                ("PROFILE_TICK_MS", "5"),
            ]),
        );
        assert_eq!(cfg.data_path, Some(PathBuf::from("cli.json")));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.tick_rate, Duration::from_millis(MIN_TICK_MS));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_profile(Path::new("does/not/exist.json")).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}
