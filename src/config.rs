use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-1.5-flash-latest".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NutritionixConfig {
    pub app_id: String,
    pub app_key: String,
    pub endpoint: String,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            endpoint: "https://trackapi.nutritionix.com".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub dataset_path: PathBuf,
    pub recommendation_count: usize,
    pub gemini: GeminiConfig,
    pub nutritionix: NutritionixConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            dataset_path: PathBuf::from("data/foods.csv"),
            recommendation_count: 5,
            gemini: GeminiConfig::default(),
            nutritionix: NutritionixConfig::default(),
        }
    }
}

impl AppConfig {
    /// Applies overrides from `lookup` (normally the process environment).
    /// Secrets usually arrive this way rather than through the config file.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(p) => self.port = p,
                Err(_) => warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Some(path) = lookup("DATASET_PATH") {
            self.dataset_path = PathBuf::from(path);
        }
        if let Some(key) = lookup("GEMINI_API_KEY").or_else(|| lookup("API_KEY")) {
            self.gemini.api_key = key;
        }
        if let Some(id) = lookup("NUTRITIONIX_APP_ID") {
            self.nutritionix.app_id = id;
        }
        if let Some(key) = lookup("NUTRITIONIX_APP_KEY") {
            self.nutritionix.app_key = key;
        }
    }
}

/// Loads the config file, falling back to defaults when it does not exist,
/// then applies environment overrides.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let mut config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config file at {}, using defaults", path);
            AppConfig::default()
        }
        Err(e) => return Err(e.into()),
    };
    config.apply_overrides(|key| std::env::var(key).ok().filter(|v| !v.is_empty()));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 8080, "gemini": {{ "model": "gemini-pro" }} }}"#).unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.recommendation_count, 5);
        assert!(config.nutritionix.endpoint.starts_with("https://"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_config(path.to_str().unwrap()).is_ok());
    }

    #[test]
    fn malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ port: ").unwrap();
        let err = load_config(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_take_precedence() {
        let env: HashMap<&str, &str> = [
            ("PORT", "7000"),
            ("API_KEY", "legacy-key"),
            ("NUTRITIONIX_APP_ID", "app"),
            ("NUTRITIONIX_APP_KEY", "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.port, 7000);
        assert_eq!(config.gemini.api_key, "legacy-key");
        assert_eq!(config.nutritionix.app_id, "app");
        assert_eq!(config.nutritionix.app_key, "secret");
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|k| (k == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.port, 5000);
    }
}
