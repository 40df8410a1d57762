// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::{path::Path, str::FromStr};

use log::{debug, warn};
use serde::Deserialize;

use crate::{errors::ParseError, types::OutputFormat};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    display: DisplayConfig,
}

impl Config {
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}

impl FromStr for Config {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(ParseError::ConfigParseError)
    }
}

#[derive(Debug, Deserialize, Default, Copy, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads the configuration at `path`, falling back to defaults when the file
/// is missing or unusable.
pub fn open_config_file(path: &Path) -> Config {
    if let Ok(c) = std::fs::read_to_string(path) {
        match c.parse::<Config>() {
            Ok(config) => {
                debug!("Loaded config file {}", path.display());
                config
            }
            Err(e) => {
                warn!("Unable to parse config file {}, using defaults: {e}", path.display());
                Config::default()
            }
        }
    } else {
        debug!("Unable to read config file {}, using defaults", path.display());
        Config::default()
    }
}
