//! Configuration file support.
//!
//! ```toml
//! user = "amy"
//! host = "box"
//! cwd = "/home/user"
//! banner = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub user: Option<String>,
    pub host: Option<String>,
    pub cwd: Option<String>,
    pub banner: Option<bool>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Whether the welcome banner is shown (on unless disabled).
    pub fn show_banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = Config::parse("user = \"amy\"\nhost = \"box\"\ncwd = \"/etc\"\nbanner = false\n").unwrap();
        assert_eq!(config.user.as_deref(), Some("amy"));
        assert_eq!(config.host.as_deref(), Some("box"));
        assert_eq!(config.cwd.as_deref(), Some("/etc"));
        assert!(!config.show_banner());
    }

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.show_banner());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
