use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::content::DEFAULT_CONTENT_FILE;

/// Environment override for the config/data directory
pub const CONFIG_DIR_ENV: &str = "ACCORDION_CONFIG_DIR";
/// Environment override for the content file
pub const CONTENT_ENV: &str = "ACCORDION_CONTENT";

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (ACCORDION_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));

        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Platform paths:
/// - Linux: ~/.config/accordion/{name}
/// - macOS: ~/Library/Application Support/accordion/{name}
/// - Windows: %APPDATA%\accordion\{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    get_config_dir(config).join(name)
}

/// Get path to a data file (logs)
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    get_data_dir(config).join(name)
}

/// Ensure that configuration and data directories exist
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = get_config_dir(config);
    let data_dir = get_data_dir(config);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    }

    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }

    Ok(())
}

/// Resolve the content file.
///
/// Priority:
/// 1. CLI positional argument
/// 2. ACCORDION_CONTENT environment variable
/// 3. buttons.json next to the executable, if it exists
/// 4. buttons.json in the current directory
pub fn resolve_content_path(cli_path: Option<PathBuf>) -> PathBuf {
    let env_path = std::env::var(CONTENT_ENV).ok().map(PathBuf::from);
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    pick_content_path(cli_path, env_path, exe_dir.as_deref())
}

fn pick_content_path(cli_path: Option<PathBuf>, env_path: Option<PathBuf>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_path.or(env_path) {
        return path;
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(DEFAULT_CONTENT_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(DEFAULT_CONTENT_FILE)
}

fn get_config_dir(config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Some(dir) = dirs_next::config_dir() {
        return dir.join("accordion");
    }

    PathBuf::from(".")
}

fn get_data_dir(config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Some(dir) = dirs_next::data_dir() {
        return dir.join("accordion");
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = config_file("test.json", &config);
        assert_eq!(path, PathBuf::from("/custom/test.json"));
    }

    #[test]
    fn test_data_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = data_file("accordion.log", &config);
        assert_eq!(path, PathBuf::from("/custom/accordion.log"));
    }

    #[test]
    fn test_cli_dir_wins_over_env() {
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/from/cli")));
        assert_eq!(config.config_dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_ensure_dirs_creates_custom_dir() {
        let dir = std::env::temp_dir().join(format!("accordion_cfg_{}", std::process::id()));
        let config = PathConfig {
            config_dir: Some(dir.clone()),
        };
        ensure_dirs(&config).unwrap();
        assert!(dir.is_dir());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_content_path_priority() {
        let cli = Some(PathBuf::from("cli.json"));
        let env = Some(PathBuf::from("env.json"));

        assert_eq!(pick_content_path(cli.clone(), env.clone(), None), PathBuf::from("cli.json"));
        assert_eq!(pick_content_path(None, env, None), PathBuf::from("env.json"));
        assert_eq!(pick_content_path(None, None, None), PathBuf::from(DEFAULT_CONTENT_FILE));
    }

    #[test]
    fn test_content_path_next_to_executable() {
        let dir = std::env::temp_dir().join(format!("accordion_exe_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        // Missing file falls through to the working directory
        assert_eq!(pick_content_path(None, None, Some(&dir)), PathBuf::from(DEFAULT_CONTENT_FILE));

        let file = dir.join(DEFAULT_CONTENT_FILE);
        std::fs::write(&file, "[]").unwrap();
        assert_eq!(pick_content_path(None, None, Some(&dir)), file);

        std::fs::remove_dir_all(dir).ok();
    }
}
