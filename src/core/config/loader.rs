use std::fs;

use log::{debug, warn};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Defaults when the rc file is absent, unless it was asked for explicitly.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            debug!("no home directory, using default config");
            return Ok(Config::default());
        };
        if !path.exists() {
            if self.paths.explicit {
                return Err(ConfigError::ConfigFileNotFound(path.display().to_string()));
            }
            debug!("no rc file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        debug!("loading rc file {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        for (index, line) in content.lines().enumerate() {
            Self::process_line(index + 1, line, &mut config)?;
        }
        Ok(config)
    }

    fn process_line(number: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::MalformedLine {
            line: number,
            text: line.to_string(),
        })?;
        let key = key.trim();
        let mut value = value.trim();

        // Remove quotes if present
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        let invalid = || ConfigError::InvalidValue {
            line: number,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "color" => config.color = parse_bool(value).ok_or_else(invalid)?,
            "banner" => config.banner = parse_bool(value).ok_or_else(invalid)?,
            "history" => config.history = parse_bool(value).ok_or_else(invalid)?,
            "history_size" => {
                config.history_size = value
                    .parse()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(invalid)?
            }
            other => warn!("line {}: ignoring unknown setting '{}'", number, other),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
