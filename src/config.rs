use crate::i18n::Locale;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Registration endpoint
    pub registration_base_url: String,
    pub registration_path: String,
    pub request_timeout_secs: Option<u64>,

    // Display
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Registration endpoint
            registration_base_url: std::env::var("REGISTRATION_BASE_URL")
                .context("REGISTRATION_BASE_URL not set")?,
            registration_path: std::env::var("REGISTRATION_PATH")
                .unwrap_or_else(|_| "/api/1.0/users".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),

            // Display
            default_locale: match std::env::var("DEFAULT_LOCALE") {
                Ok(code) => Locale::from_code(&code).context("Invalid DEFAULT_LOCALE")?,
                Err(_) => Locale::canonical(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "REGISTRATION_BASE_URL",
        "REGISTRATION_PATH",
        "REQUEST_TIMEOUT_SECS",
        "DEFAULT_LOCALE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("REGISTRATION_BASE_URL", "http://localhost:8080");

        let config = Config::from_env().expect("Should load");

        assert_eq!(config.registration_base_url, "http://localhost:8080");
        assert_eq!(config.registration_path, "/api/1.0/users");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.default_locale, Locale::EN);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("REGISTRATION_BASE_URL", "https://api.example.com");
        std::env::set_var("REGISTRATION_PATH", "/users");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "15");
        std::env::set_var("DEFAULT_LOCALE", "pt-BR");

        let config = Config::from_env().expect("Should load");

        assert_eq!(config.registration_path, "/users");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.default_locale, Locale::PT_BR);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_base_url() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("REGISTRATION_BASE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_locale() {
        clear_env();
        std::env::set_var("REGISTRATION_BASE_URL", "http://localhost:8080");
        std::env::set_var("DEFAULT_LOCALE", "fr");

        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparseable_timeout() {
        clear_env();
        std::env::set_var("REGISTRATION_BASE_URL", "http://localhost:8080");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "soon");

        assert_eq!(Config::from_env().unwrap().request_timeout_secs, None);
        clear_env();
    }
}
