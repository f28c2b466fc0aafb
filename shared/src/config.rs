use url::Url;

use crate::ConfigError;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Where the classification service lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    api_base: Url,
    predict: Url,
    health: Url,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let invalid = |source| ConfigError::InvalidBaseUrl {
            value: api_base.to_string(),
            source,
        };

        // Without a trailing slash `join` would replace the last segment.
        let mut normalized = api_base.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base = Url::parse(&normalized).map_err(invalid)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: api_base.to_string(),
                scheme: base.scheme().to_string(),
            });
        }

        Ok(Self {
            predict: base.join("predict").map_err(invalid)?,
            health: base.join("health").map_err(invalid)?,
            api_base: base,
        })
    }

    /// Builds the config from an optional override, falling back to the
    /// default base when the override is missing or unusable.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Self::new(value).unwrap_or_else(|e| {
                log::warn!("{}; using {}", e, DEFAULT_API_BASE);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn predict_url(&self) -> &str {
        self.predict.as_str()
    }

    pub fn health_url(&self) -> &str {
        self.health.as_str()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE).expect("default API base is a valid URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.predict_url(), "http://localhost:5000/predict");
        assert_eq!(config.health_url(), "http://localhost:5000/health");
    }

    #[test]
    fn keeps_base_path_segments() {
        let config = ClientConfig::new("https://derma.example.org/api").unwrap();
        assert_eq!(config.predict_url(), "https://derma.example.org/api/predict");

        let config = ClientConfig::new("https://derma.example.org/api/").unwrap();
        assert_eq!(config.health_url(), "https://derma.example.org/api/health");
    }

    #[test]
    fn rejects_bad_bases() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://files.example.org"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn env_value_falls_back_to_default() {
        assert_eq!(ClientConfig::from_env_value(None), ClientConfig::default());
        assert_eq!(ClientConfig::from_env_value(Some("  ")), ClientConfig::default());
        assert_eq!(ClientConfig::from_env_value(Some("::bad")), ClientConfig::default());

        let config = ClientConfig::from_env_value(Some("http://10.0.0.5:8080"));
        assert_eq!(config.predict_url(), "http://10.0.0.5:8080/predict");
    }
}
