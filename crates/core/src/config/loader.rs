use crate::board::BoardOptions;
use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use crate::zettel::scanner::ScanLimits;
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file and resolve the active profile.
    ///
    /// Used by commands that need a notes directory (`find`, `doctor`).
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let cf = parse_file(&path)?;

        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, cf.board, cf.logging)
    }

    /// Load only the settings the board filter needs.
    ///
    /// The board pipeline is a pure stdin-to-stdout filter, so a missing
    /// default config file resolves to defaults instead of an error. An
    /// explicitly provided `--config` path must still exist and parse.
    pub fn load_board(
        config_path: Option<&Path>,
    ) -> Result<(BoardOptions, LoggingConfig), ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    return Ok((BoardOptions::default(), LoggingConfig::default()));
                }
                p
            }
        };

        let cf = parse_file(&path)?;
        Ok((cf.board, cf.logging))
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        board: BoardOptions,
        logging: LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let notes_root = expand_path(&prof.notes_root)?;

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            notes_root,
            scan: ScanLimits {
                max_title_search_lines: prof.max_title_search_lines,
                max_context_lines: prof.max_context_lines,
            },
            min_query_length: prof.min_query_length,
            board,
            logging,
        })
    }
}

fn parse_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let s = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

    let cf: ConfigFile = toml::from_str(&s)
        .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

    if cf.version != 1 {
        return Err(ConfigError::BadVersion(cf.version));
    }

    Ok(cf)
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("notekit").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("notekit").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
