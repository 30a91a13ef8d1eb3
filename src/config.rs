//! Configuration management for the strx command-line tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Layered TOML configuration (user < project < explicit file < CLI)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::cli::Command;

/// File name searched for in the current directory and its ancestors
pub const PROJECT_CONFIG_FILE: &str = ".strx.toml";

/// Command-line arguments for strx
#[derive(Debug, Parser)]
#[command(name = "strx")]
#[command(about = "String validation and conversion helpers")]
#[command(version)]
pub struct Args {
    /// Explicit configuration file, applied over user and project config
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Log level filter
    #[arg(
        long,
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub log_level: Option<String>,
    /// Named regular expressions for `strx match --name`
    pub patterns: BTreeMap<String, String>,
}

impl FileConfig {
    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Overlay `other` on top of `self`; `other` wins on conflicts
    fn merge(&mut self, other: FileConfig) {
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
        self.patterns.extend(other.patterns);
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log level from the CLI or a config file; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,
    /// Named patterns from all config files
    pub patterns: BTreeMap<String, String>,
    /// Config files that were applied, lowest priority first
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from parsed arguments, the user config
    /// directory and the current working directory
    pub fn from_args(args: &Args) -> Result<Self> {
        let user_config = dirs::config_dir().map(|dir| dir.join("strx").join("config.toml"));
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::resolve(args, user_config.as_deref(), &cwd)
    }

    /// Create configuration from explicit locations (useful for testing)
    pub fn resolve(args: &Args, user_config: Option<&Path>, start_dir: &Path) -> Result<Self> {
        let mut merged = FileConfig::default();
        let mut sources = Vec::new();

        if let Some(path) = user_config.filter(|p| p.is_file()) {
            merged.merge(FileConfig::load(path)?);
            sources.push(path.to_path_buf());
        }

        if let Some(path) = find_project_config(start_dir) {
            merged.merge(FileConfig::load(&path)?);
            sources.push(path);
        }

        // Unlike the discovered files, an explicit path must exist.
        if let Some(path) = &args.config {
            merged.merge(FileConfig::load(path)?);
            sources.push(path.clone());
        }

        Ok(Config {
            log_level: args.log_level.clone().or(merged.log_level),
            patterns: merged.patterns,
            sources,
        })
    }

    /// Whether any configuration file was applied
    pub fn has_file_config(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Look up a named pattern
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(String::as_str)
    }
}

/// Walk up from `start_dir` looking for [`PROJECT_CONFIG_FILE`]
pub fn find_project_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}
