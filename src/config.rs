use crate::case::CaseType;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_case")]
    pub default_case: CaseType,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_case() -> CaseType {
    CaseType::Snake
}

fn default_color() -> bool {
    true
}

/// One config file; fields it does not mention stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    default_case: Option<CaseType>,
    ignore_patterns: Option<Vec<String>>,
    color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_case: default_case(),
            ignore_patterns: Vec::new(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(case: Option<CaseType>, cli_patterns: Vec<String>) -> Result<Self> {
        Self::load_from(
            Self::global_config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            case,
            cli_patterns,
        )
    }

    fn load_from(
        global_path: Option<PathBuf>,
        local_path: &Path,
        case: Option<CaseType>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        if local_path.exists() {
            debug!("loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(local_path)?);
        }

        if let Some(case) = case {
            config.default_case = case;
        }
        config.ignore_patterns.extend(cli_patterns);

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.default_case {
            self.default_case = case;
        }
        if let Some(patterns) = layer.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    /// Compile the ignore patterns, skipping any that are not valid regexes.
    pub fn compiled_patterns(&self) -> Vec<Regex> {
        let mut patterns = Vec::new();
        for pattern in &self.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => patterns.push(re),
                Err(e) => warn!("Invalid regex pattern '{}': {}", pattern, e),
            }
        }
        patterns
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
