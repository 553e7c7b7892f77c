//! careerfit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use careerfit_core::profile::Profile;

/// Top-level careerfit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerfitConfig {
    /// Catalog file or directory; the built-in catalog when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Where submissions and results pages are saved.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Refuse submissions with unanswered questions or the wrong answer count.
    #[serde(default = "default_true")]
    pub strict_answers: bool,
    /// The student's profile.
    #[serde(default)]
    pub profile: Profile,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./careerfit-results")
}
fn default_true() -> bool {
    true
}

impl Default for CareerfitConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            output_dir: default_output_dir(),
            strict_answers: true,
            profile: Profile::default(),
        }
    }
}

impl CareerfitConfig {
    /// The profile city, if one was entered.
    pub fn city(&self) -> Option<&str> {
        let city = self.profile.city.trim();
        (!city.is_empty()).then_some(city)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `careerfit.toml` in the current directory
/// 2. `~/.config/careerfit/config.toml`
///
/// Environment variable overrides: `CAREERFIT_CATALOG`, `CAREERFIT_CITY`.
pub fn load_config_from(path: Option<&Path>) -> Result<CareerfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("careerfit.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<CareerfitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => CareerfitConfig::default(),
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

fn apply_env_overrides(config: &mut CareerfitConfig) {
    if let Ok(catalog) = std::env::var("CAREERFIT_CATALOG") {
        if !catalog.is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }
    if let Ok(city) = std::env::var("CAREERFIT_CITY") {
        if !city.is_empty() {
            config.profile.city = city;
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("careerfit"))
}
