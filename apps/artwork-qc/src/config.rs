//! Review configuration
//!
//! Everything a run depends on is carried in one `ReviewConfig` value that is
//! passed down explicitly; nothing is read from process-wide state. Values
//! come from an optional TOML file and are then overridden by CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexicon_engine::{Domain, Market, OverlapPolicy, ScanOptions};
use serde::{Deserialize, Serialize};

/// Run configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Identifier of the model used by the external extraction step,
    /// recorded in reports and the saved session
    pub model_id: String,
    /// Only apply rules for this product domain (plus general rules)
    pub domain: Option<Domain>,
    /// Only apply rules for this market (plus general rules)
    pub market: Option<Market>,
    pub overlap_policy: OverlapPolicy,
    /// Rule catalog to use instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Where the review session is persisted
    pub session_path: PathBuf,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            domain: None,
            market: None,
            overlap_policy: OverlapPolicy::default(),
            catalog_path: None,
            session_path: PathBuf::from(".artwork-qc/session.json"),
        }
    }
}

fn default_model_id() -> String {
    "default".to_string()
}

impl ReviewConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use artwork_qc::config::ReviewConfig;
    /// use lexicon_engine::Domain;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ReviewConfig::from_str(r#"
    ///     model_id = "vision-large"
    ///     domain = "cosmetics"
    /// "#)?;
    /// assert_eq!(config.domain, Some(Domain::Cosmetics));
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            domain: self.domain,
            market: self.market,
            overlap_policy: self.overlap_policy,
        }
    }
}
