//! Locale registry: Single source of truth for all supported display locales.
//!
//! This module provides a centralized registry of every locale the sign-up form
//! can be rendered in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use crate::i18n::strings::{ENGLISH_STRINGS, PORTUGUESE_BR_STRINGS};
use crate::i18n::LocaleStrings;
use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its code, names,
/// enabled status, whether it's the canonical locale, and its string table.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// BCP 47 locale code sent as `Accept-Language` (e.g., "en", "pt-BR")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Portuguese (Brazil)")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "Português (Brasil)")
    pub native_name: &'static str,

    /// Whether this is the canonical/fallback locale (only one should be true)
    pub is_canonical: bool,

    /// Whether this locale can be selected
    pub enabled: bool,

    /// Display strings for this locale
    pub strings: &'static LocaleStrings,
}

/// Global locale registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its exact code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registration order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the canonical locale configuration.
    ///
    /// # Panics
    /// Panics if no canonical locale is found or if multiple canonical
    /// locales are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LocaleConfig {
        let canonical: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical locale found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical locales found in registry"),
        }
    }
}

/// Default locale configurations: English (canonical) and Brazilian Portuguese.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LocaleConfig {
            code: "pt-BR",
            name: "Portuguese (Brazil)",
            native_name: "Português (Brasil)",
            is_canonical: false,
            enabled: true,
            strings: &PORTUGUESE_BR_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
        assert!(config.enabled);
        assert_eq!(config.strings.sign_up, "Sign Up");
    }

    #[test]
    fn test_get_by_code_portuguese() {
        let config = LocaleRegistry::get()
            .get_by_code("pt-BR")
            .expect("Portuguese should be registered");

        assert_eq!(config.native_name, "Português (Brasil)");
        assert!(!config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        // Codes are matched exactly as they go out in Accept-Language
        assert!(LocaleRegistry::get().get_by_code("pt-br").is_none());
        assert!(LocaleRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_contains_both_locales() {
        let enabled = LocaleRegistry::get().list_enabled();

        assert_eq!(enabled.len(), 2);
        assert_eq!(enabled[0].code, "en");
        assert_eq!(enabled[1].code, "pt-BR");
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LocaleRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
    }
}
