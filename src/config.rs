//! Native runtime configuration
//!
//! Read from the environment:
//! - `ABSENSI_DATA_DIR`: directory holding one JSON file per storage key

use std::env;
use std::path::PathBuf;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "absensi-data";

/// Environment variable overriding the data directory
pub const DATA_DIR_VAR: &str = "ABSENSI_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source (lets tests avoid touching the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config::from_lookup(|name| {
            (name == DATA_DIR_VAR).then(|| " /var/lib/absensi ".to_string())
        });
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/absensi"));

        let blank = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(blank.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
