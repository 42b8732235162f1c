//! Environment-driven configuration.

use std::path::PathBuf;
use std::str::FromStr;

use pantry_core::{DomainError, DomainResult};
use pantry_inventory::InsightsConfig;
use pantry_observability::LogFormat;

pub const SNAPSHOT_VAR: &str = "PANTRY_SNAPSHOT";
pub const EXPIRING_WINDOW_VAR: &str = "PANTRY_EXPIRING_WINDOW_DAYS";
pub const TOP_CATEGORIES_VAR: &str = "PANTRY_TOP_CATEGORIES";
pub const LOG_FORMAT_VAR: &str = "PANTRY_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub snapshot_path: PathBuf,
    pub insights: InsightsConfig,
    pub log_format: LogFormat,
}

impl ReportConfig {
    /// Read configuration from the process environment.
    ///
    /// `snapshot_arg` (the first CLI argument) wins over `PANTRY_SNAPSHOT`.
    pub fn from_env(snapshot_arg: Option<PathBuf>) -> DomainResult<Self> {
        Self::from_lookup(snapshot_arg, |key| std::env::var(key).ok())
    }

    /// Same as [`ReportConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(
        snapshot_arg: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> DomainResult<Self> {
        let snapshot_path = snapshot_arg
            .or_else(|| lookup(SNAPSHOT_VAR).map(PathBuf::from))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "snapshot path missing: pass it as the first argument or set {SNAPSHOT_VAR}"
                ))
            })?;

        let defaults = InsightsConfig::default();
        let insights = InsightsConfig {
            expiring_window_days: parse_or(&lookup, EXPIRING_WINDOW_VAR, defaults.expiring_window_days)?,
            top_categories: parse_or(&lookup, TOP_CATEGORIES_VAR, defaults.top_categories)?,
        };
        insights.validate()?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| DomainError::validation(format!("{LOG_FORMAT_VAR}: {e}")))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            snapshot_path,
            insights,
            log_format,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> DomainResult<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| DomainError::validation(format!("{key}={raw:?}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_path_given() {
        let cfg = ReportConfig::from_lookup(None, lookup(&[(SNAPSHOT_VAR, "pantry.json")])).unwrap();
        assert_eq!(cfg.snapshot_path, PathBuf::from("pantry.json"));
        assert_eq!(cfg.insights, InsightsConfig::default());
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn cli_argument_wins_over_env() {
        let cfg = ReportConfig::from_lookup(
            Some(PathBuf::from("arg.json")),
            lookup(&[(SNAPSHOT_VAR, "env.json")]),
        )
        .unwrap();
        assert_eq!(cfg.snapshot_path, PathBuf::from("arg.json"));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = ReportConfig::from_lookup(
            Some(PathBuf::from("p.json")),
            lookup(&[
                (EXPIRING_WINDOW_VAR, " 7 "),
                (TOP_CATEGORIES_VAR, "2"),
                (LOG_FORMAT_VAR, "pretty"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.insights.expiring_window_days, 7);
        assert_eq!(cfg.insights.top_categories, 2);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_path_is_a_validation_error() {
        let err = ReportConfig::from_lookup(None, lookup(&[])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn malformed_values_are_rejected() {
        for (key, value) in [
            (EXPIRING_WINDOW_VAR, "soon"),
            (EXPIRING_WINDOW_VAR, "-2"),
            (TOP_CATEGORIES_VAR, "0"),
            (LOG_FORMAT_VAR, "xml"),
        ] {
            let err = ReportConfig::from_lookup(Some(PathBuf::from("p.json")), lookup(&[(key, value)]))
                .unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("Expected Validation error for {key}={value}, got {other:?}"),
            }
        }
    }
}
