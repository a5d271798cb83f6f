//! Runtime settings read from the environment.
//!
//! Every variable is optional; unset or unparsable values fall back to the
//! defaults so the game always starts.
//!
//! - `GRIDWALK_TICK_MS`: animation tick interval (default 50, minimum 10)
//! - `GRIDWALK_EXIT_POLICY`: `passthrough` (default) or `block`
//! - `GRIDWALK_LOG_PATH`: log file (default `gridwalk.log`); `-` logs
//!   warnings to stderr instead

use std::path::PathBuf;
use std::time::Duration;

use crate::core::{ExitPolicy, GameRules};
use crate::types::{MIN_TICK_MS, TICK_MS};

pub const DEFAULT_LOG_PATH: &str = "gridwalk.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_ms: u32,
    pub exit_policy: ExitPolicy,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            exit_policy: ExitPolicy::default(),
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("GRIDWALK_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_TICK_MS))
            .unwrap_or(defaults.tick_ms);

        let exit_policy = lookup("GRIDWALK_EXIT_POLICY")
            .and_then(|s| ExitPolicy::from_str(&s))
            .unwrap_or(defaults.exit_policy);

        let log_path = match lookup("GRIDWALK_LOG_PATH").as_deref().map(str::trim) {
            Some("-") => None,
            Some(s) if !s.is_empty() => Some(PathBuf::from(s)),
            _ => defaults.log_path,
        };

        Self {
            tick_ms,
            exit_policy,
            log_path,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            exit_policy: self.exit_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.tick(), Duration::from_millis(50));
        assert_eq!(cfg.rules().exit_policy, ExitPolicy::PassThrough);
        assert_eq!(cfg.log_path, Some(PathBuf::from(DEFAULT_LOG_PATH)));
    }

    #[test]
    fn dash_log_path_means_stderr() {
        let cfg = Config::from_lookup(lookup(&[("GRIDWALK_LOG_PATH", "-")]));
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("GRIDWALK_TICK_MS", "100"),
            ("GRIDWALK_EXIT_POLICY", "block"),
            ("GRIDWALK_LOG_PATH", " /tmp/gridwalk.log "),
        ]));
        assert_eq!(cfg.tick_ms, 100);
        assert_eq!(cfg.exit_policy, ExitPolicy::Block);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/gridwalk.log")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[
            ("GRIDWALK_TICK_MS", "fast"),
            ("GRIDWALK_EXIT_POLICY", "sometimes"),
            ("GRIDWALK_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn tick_is_clamped_to_minimum() {
        let cfg = Config::from_lookup(lookup(&[("GRIDWALK_TICK_MS", "1")]));
        assert_eq!(cfg.tick_ms, MIN_TICK_MS);
    }
}
