use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `TRACKSPLIT__`) over an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKSPLIT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.split.serial_threshold == 0 {
            return Err("split.serial_threshold must be >= 1".to_string());
        }
        if self.split.workers_per_core == 0 {
            return Err("split.workers_per_core must be >= 1".to_string());
        }
        if self.split.workers == Some(0) {
            return Err("split.workers must be >= 1 when set".to_string());
        }
        if !self.tracklist.delimiter.is_ascii() {
            return Err(format!(
                "tracklist.delimiter must be an ASCII character, got '{}'",
                self.tracklist.delimiter
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `TRACKSPLIT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKSPLIT_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tracksplit/config.toml`
/// or `~/.config/tracksplit/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tracksplit").join("config.toml"))
}
