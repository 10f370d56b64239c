//! Site configuration.
//!
//! Every field has a default matching the live site, so an empty JSON
//! object (`{}`) is a valid config file:
//!
//! ```json
//! {
//!   "timings": { "submission_delay_ms": 500 },
//!   "catalog_path": "content/catalog.json",
//!   "simulated_outcome": "fail"
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{SiteError, SiteResult};

/// Delays used by the flows, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Simulated backend round trip
    pub submission_delay_ms: u64,
    /// Inline message lifetime
    pub message_ttl_ms: u64,
    /// Donation modal auto-close after a successful submission
    pub donation_close_ms: u64,
    /// Volunteer modal auto-close after a successful submission
    pub volunteer_close_ms: u64,
    /// Delay before a toast slides in
    pub toast_enter_ms: u64,
    /// How long a toast stays fully visible
    pub toast_visible_ms: u64,
    /// Slide-out transition
    pub toast_exit_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submission_delay_ms: 2000,
            message_ttl_ms: 5000,
            donation_close_ms: 3000,
            volunteer_close_ms: 4000,
            toast_enter_ms: 100,
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
        }
    }
}

impl Timings {
    /// All delays zero, for scripted runs that should not wait
    pub fn instant() -> Self {
        Self {
            submission_delay_ms: 0,
            message_ttl_ms: 0,
            donation_close_ms: 0,
            volunteer_close_ms: 0,
            toast_enter_ms: 0,
            toast_visible_ms: 0,
            toast_exit_ms: 0,
        }
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    pub fn donation_close(&self) -> Duration {
        Duration::from_millis(self.donation_close_ms)
    }

    pub fn volunteer_close(&self) -> Duration {
        Duration::from_millis(self.volunteer_close_ms)
    }

    pub fn toast_enter(&self) -> Duration {
        Duration::from_millis(self.toast_enter_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }
}

/// What the simulated backend answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatedOutcome {
    #[default]
    Succeed,
    Fail,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timings: Timings,
    /// Replace the built-in catalog with this JSON file
    pub catalog_path: Option<PathBuf>,
    pub simulated_outcome: SimulatedOutcome,
}

impl SiteConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SiteError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> SiteResult<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Catalog named by `catalog_path`, or the built-in one.
    ///
    /// A relative `catalog_path` is taken as-is (relative to the working
    /// directory).
    pub fn catalog(&self) -> SiteResult<Catalog> {
        match &self.catalog_path {
            Some(p) => Catalog::from_json_file(p),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_site() {
        let t = Timings::default();
        assert_eq!(t.submission_delay(), Duration::from_secs(2));
        assert_eq!(t.message_ttl(), Duration::from_secs(5));
        assert_eq!(t.donation_close(), Duration::from_secs(3));
        assert_eq!(t.volunteer_close(), Duration::from_secs(4));
        assert_eq!(t.toast_exit(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        std::fs::write(
            &path,
            r#"{ "timings": { "submission_delay_ms": 10 }, "simulated_outcome": "fail" }"#,
        )
        .unwrap();

        let config = SiteConfig::from_json_file(&path).unwrap();
        assert_eq!(config.timings.submission_delay_ms, 10);
        assert_eq!(config.timings.message_ttl_ms, 5000);
        assert_eq!(config.simulated_outcome, SimulatedOutcome::Fail);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::from_json_file(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(SiteConfig::load(None).unwrap(), SiteConfig::default());
    }
}
