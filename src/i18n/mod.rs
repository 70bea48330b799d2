//! Internationalization (i18n) module for the sign-up form.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe `Locale` validated against the registry
//! - `strings`: Localized display strings, one table per locale
//! - `switch`: Process-wide current locale shared by renderers and the request builder
//! - `validator`: Catalog completeness checks
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_form::i18n::{Locale, LocaleSwitch};
//!
//! let switch = LocaleSwitch::new(Locale::EN);
//! switch.set_locale_code("pt-BR")?;
//! assert_eq!(switch.strings().sign_up, "Cadastrar");
//! ```

mod locale;
mod registry;
mod strings;
mod switch;
mod validator;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::LocaleStrings;
pub use switch::LocaleSwitch;
pub use validator::{CatalogValidator, ValidationReport};
