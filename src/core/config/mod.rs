use std::fmt;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Settings read from `~/.huskrc` (or the file given with `--config`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: bool,
    pub banner: bool,
    pub history: bool,
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: true,
            banner: true,
            history: true,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl Config {
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        ConfigLoader::new(paths).load()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(String),
    MalformedLine { line: usize, text: String },
    InvalidValue { line: usize, key: String, value: String },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::MalformedLine { line, text } => {
                write!(f, "line {}: expected 'key = value', got '{}'", line, text)
            }
            ConfigError::InvalidValue { line, key, value } => {
                write!(f, "line {}: invalid value '{}' for '{}'", line, value, key)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
