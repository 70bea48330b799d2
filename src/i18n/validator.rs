//! Catalog completeness validation.
//!
//! Checks that every enabled locale provides a usable value for each catalog
//! key, so no label renders blank after a locale switch.

use crate::i18n::{LocaleRegistry, LocaleStrings};

/// Keys whose value is legitimately identical across locales.
const SHARED_KEYS: &[&str] = &["email"];

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys with missing or empty values
    pub errors: Vec<String>,

    /// Keys that look untranslated (same text as the canonical locale)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale string catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate one catalog against the canonical one.
    pub fn validate(
        code: &str,
        strings: &LocaleStrings,
        canonical: &LocaleStrings,
        is_canonical: bool,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in LocaleStrings::KEYS {
            match strings.get(key) {
                Some(value) if !value.trim().is_empty() => {
                    if !is_canonical
                        && !SHARED_KEYS.contains(&key)
                        && canonical.get(key) == Some(value)
                    {
                        report
                            .warnings
                            .push(format!("{}: '{}' is identical to canonical text", code, key));
                    }
                }
                Some(_) => report.errors.push(format!("{}: '{}' is empty", code, key)),
                None => report.errors.push(format!("{}: '{}' is missing", code, key)),
            }
        }

        report
    }

    /// Validate every enabled locale in the registry and merge the results.
    pub fn validate_registry() -> ValidationReport {
        let registry = LocaleRegistry::get();
        let canonical = registry.canonical().strings;
        let mut report = ValidationReport::new();

        for locale in registry.list_enabled() {
            let single = Self::validate(locale.code, locale.strings, canonical, locale.is_canonical);
            report.errors.extend(single.errors);
            report.warnings.extend(single.warnings);
        }

        report
    }
}
