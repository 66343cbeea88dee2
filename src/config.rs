// SPDX-License-Identifier: MIT

use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::book::Variant;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base of the catalog API; the variant picks the endpoint under it.
    pub api_base_url: String,
    /// Base under which the backend serves cover images by filename.
    pub image_base_url: String,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "https://bibliotecaetecmaua.azurewebsites.net/api".to_string(),
            image_base_url: "https://bibliotecaetecmaua.azurewebsites.net/Content/Images"
                .to_string(),
            variant: Variant::default(),
        }
    }
}

/// Loads the config from the TOML file named on the command line, falling
/// back to the defaults when no file is given or it cannot be used.
pub fn load_config() -> Config {
    let Some(path) = env::args().nth(1) else {
        tracing::info!("no config file provided, using default values");
        return Config::default();
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(error = %err, path = %path, "couldn't read config file, using defaults");
            return Config::default();
        }
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, path = %path, "couldn't parse config file, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_catalog() {
        let config = Config::default();
        assert_eq!(
            config.api_base_url,
            "https://bibliotecaetecmaua.azurewebsites.net/api"
        );
        assert_eq!(
            config.image_base_url,
            "https://bibliotecaetecmaua.azurewebsites.net/Content/Images"
        );
        assert_eq!(config.variant, Variant::Sede);
    }

    #[test]
    fn parses_a_config_file() {
        let config: Config = toml::from_str(
            r#"
            api_base_url = "https://biblioteca.example/api"
            image_base_url = "https://biblioteca.example/Content/Images"
            variant = "biblioteca"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://biblioteca.example/api");
        assert_eq!(config.variant, Variant::Biblioteca);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str(r#"variant = "biblioteca""#).unwrap();
        assert_eq!(config.variant, Variant::Biblioteca);
        assert_eq!(
            config.api_base_url,
            "https://bibliotecaetecmaua.azurewebsites.net/api"
        );
    }
}
