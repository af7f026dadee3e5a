//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`USTUDY_*` prefix)
//! 2. `u-study.toml` in the working directory
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::DEFAULT_OUTPUT_PATH;

/// Project-local config file name.
pub const CONFIG_FILE: &str = "u-study.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "USTUDY_";

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyConfig {
    /// Where the JSON report is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl StudyConfig {
    /// Load configuration from the default sources.
    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment() -> Figment {
        Self::figment_from(Path::new(CONFIG_FILE))
    }

    /// Provider chain reading the TOML layer from `path`.
    pub fn figment_from(path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Replaces the output path when one is given.
    pub fn with_output_override(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }
}
