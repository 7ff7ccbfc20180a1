// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, and resolves the
//! backend base URL from the environment and that file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_API_URL;

pub(crate) const CONFIG_NAME: &str = "plexdash";

/// Environment variable selecting the backend base URL.
pub(crate) const API_URL_ENV: &str = "PLEXDASH_API_URL";

const DEFAULT_HISTORY_LIMIT: u32 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_url: Option<String>,
    pub history_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Resolves the backend base URL.
    ///
    /// The environment variable wins over the config file, and the local
    /// development backend is used when neither is set.
    pub(crate) fn api_url(&self) -> String {
        resolve_api_url(std::env::var(API_URL_ENV).ok(), self.api_url.as_deref())
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the application log, next to the configuration file.
pub(crate) fn log_file_path() -> Option<PathBuf> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None).ok()?;
    Some(config_path.with_file_name(format!("{CONFIG_NAME}.log")))
}

fn resolve_api_url(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|url| !url.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_config_file() {
        let url = resolve_api_url(Some("http://nas:8000/api".to_string()), Some("http://other/api"));
        assert_eq!(url, "http://nas:8000/api");
    }

    #[test]
    fn config_file_used_without_environment() {
        assert_eq!(resolve_api_url(None, Some("http://other/api")), "http://other/api");
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        assert_eq!(resolve_api_url(Some("  ".to_string()), Some("")), DEFAULT_API_URL);
        assert_eq!(resolve_api_url(None, None), DEFAULT_API_URL);
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.api_url, None);
    }
}
