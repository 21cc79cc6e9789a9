use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use ticklist_types::{Priority, PriorityParseError, ui::UiOptions};

/// Fade-out length when the config does not set one.
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

/// Longest fade accepted from config; anything above is clamped.
const MAX_FADE_MS: u64 = 10_000;

const REDUCED_MOTION_ENV: &str = "TICKLIST_REDUCED_MOTION";

/// Contents of `~/.ticklist/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
///
/// [tasks]
/// default_priority = "medium"
/// fade_ms = 500
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TicklistConfig {
    pub app: Option<AppConfig>,
    pub tasks: Option<TasksConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: PriorityParseError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for checkboxes and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Skip the removal fade.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TasksConfig {
    /// Initial draft priority: "high", "medium" or "low".
    pub default_priority: Option<String>,
    /// Removal fade length in milliseconds. Default: 500.
    pub fade_ms: Option<u64>,
}

impl TicklistConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        if let Err(err) = config.default_priority() {
            tracing::warn!("Invalid config at {:?}: {}", path, err);
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                source: err,
            });
        }

        Ok(Some(config))
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The configured initial draft priority, validated.
    pub fn default_priority(&self) -> Result<Option<Priority>, PriorityParseError> {
        self.tasks
            .as_ref()
            .and_then(|tasks| tasks.default_priority.as_deref())
            .map(str::parse::<Priority>)
            .transpose()
    }
}

/// Effective settings after config and environment are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub ui_options: UiOptions,
    pub default_priority: Priority,
    pub fade_duration: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_options: UiOptions::default(),
            default_priority: Priority::default(),
            fade_duration: DEFAULT_FADE,
        }
    }
}

impl AppSettings {
    #[must_use]
    pub fn from_config(config: Option<&TicklistConfig>) -> Self {
        let mut settings = Self::default();
        let Some(config) = config else {
            return settings;
        };

        if let Some(app) = config.app.as_ref() {
            settings.ui_options = UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            };
        }

        match config.default_priority() {
            Ok(Some(priority)) => settings.default_priority = priority,
            Ok(None) => {}
            Err(err) => tracing::warn!("Ignoring default_priority: {err}"),
        }

        if let Some(ms) = config.tasks.as_ref().and_then(|tasks| tasks.fade_ms) {
            if ms > MAX_FADE_MS {
                tracing::warn!("fade_ms {ms} exceeds {MAX_FADE_MS}, clamping");
            }
            settings.fade_duration = Duration::from_millis(ms.min(MAX_FADE_MS));
        }

        settings
    }

    /// Apply `TICKLIST_REDUCED_MOTION` from the process environment.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        let raw = env::var(REDUCED_MOTION_ENV).ok();
        if let Some(reduced) = parse_env_flag(raw.as_deref()) {
            self.ui_options.reduced_motion = reduced;
        }
        self
    }

    /// Fade length actually used for removals.
    #[must_use]
    pub fn effective_fade(&self) -> Duration {
        if self.ui_options.reduced_motion {
            Duration::ZERO
        } else {
            self.fade_duration
        }
    }
}

fn parse_env_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ticklist").join("config.toml"))
}
