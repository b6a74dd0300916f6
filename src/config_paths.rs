//! Where maskedit looks for its mask config and writes logs
//!
//! The config file is resolved in order:
//! 1. an explicit path (the `--config` flag)
//! 2. `$MASKEDIT_CONFIG`
//! 3. `config.yaml` in the config directory
//!
//! The config directory is `$XDG_CONFIG_HOME/maskedit` or `~/.config/maskedit`
//! on Unix/macOS and `%APPDATA%\maskedit` on Windows. Logs go to `logs/`
//! inside it.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "maskedit";

/// Environment variable naming a config file to use instead of the default
pub const CONFIG_ENV: &str = "MASKEDIT_CONFIG";

/// File name prefix for the daily rolling log
pub const LOG_FILE_PREFIX: &str = "maskedit.log";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Default mask config: `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// The config file to load, given an optional path from the command line
pub fn resolve_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    choose_config_file(explicit, env::var_os(CONFIG_ENV).map(PathBuf::from))
}

fn choose_config_file(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|path| !path.as_os_str().is_empty()))
        .or_else(config_file)
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let chosen = choose_config_file(
            Some(Path::new("/tmp/flag.yaml")),
            Some(PathBuf::from("/tmp/env.yaml")),
        );
        assert_eq!(chosen, Some(PathBuf::from("/tmp/flag.yaml")));
    }

    #[test]
    fn test_env_path_before_default() {
        let chosen = choose_config_file(None, Some(PathBuf::from("/tmp/env.yaml")));
        assert_eq!(chosen, Some(PathBuf::from("/tmp/env.yaml")));
    }

    #[test]
    fn test_empty_env_falls_back_to_default() {
        assert_eq!(choose_config_file(None, Some(PathBuf::new())), config_file());
        assert_eq!(choose_config_file(None, None), config_file());
    }
}
