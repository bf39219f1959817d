//! Configuration file and command-line overrides.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "jsmin.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsminConfig {
    pub quiet: bool,
    pub verbose: bool,
    pub debug: bool,
    pub server: ServerConfig,
    /// Remote path prefix → local directory.
    pub routes: BTreeMap<String, String>,
    pub unmanaged: UnmanagedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnmanagedConfig {
    pub copy: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 9090,
            root: PathBuf::from("."),
        }
    }
}

impl JsminConfig {
    /// Load from `path`, which must exist, or from [`DEFAULT_CONFIG_PATH`],
    /// which may be missing.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("No such configuration: {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Configuration is not valid: {}", path.display()))?;
        Ok(config)
    }

    /// Write the default configuration to `path`, which must not exist yet.
    pub fn init(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            anyhow::bail!(
                "A config file already exists at: {}. Remove it to init a new config file.",
                path.display()
            );
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("Could not write configuration: {}", path.display()))?;
        Ok(())
    }

    /// Apply verbosity flags. Quiet overrides verbose and debug.
    pub fn apply_flags(&mut self, quiet: bool, verbose: bool, debug: bool) {
        self.quiet |= quiet;
        self.verbose = (self.verbose || verbose) && !self.quiet;
        self.debug = (self.debug || debug) && !self.quiet;
    }

    /// Default `tracing` filter for the configured verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.debug {
            "trace"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
