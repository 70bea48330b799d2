//! Process-wide current-locale state.
//!
//! A `LocaleSwitch` is a cheap, cloneable handle. All clones share one value:
//! whoever holds a clone can switch the locale, and every reader (string
//! lookups, the outgoing `Accept-Language` header) sees the change on its
//! next read.

use crate::i18n::{Locale, LocaleStrings};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LocaleSwitch {
    current: Arc<watch::Sender<Locale>>,
}

impl LocaleSwitch {
    /// Create a switch starting at `initial`.
    pub fn new(initial: Locale) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            current: Arc::new(tx),
        }
    }

    /// The locale currently selected.
    pub fn current(&self) -> Locale {
        *self.current.borrow()
    }

    /// Display strings of the current locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        self.current().strings()
    }

    /// Switch to `locale`. Selecting the current locale is a no-op.
    pub fn set_locale(&self, locale: Locale) {
        let previous = self.current.send_replace(locale);
        if previous != locale {
            info!("Locale switched: {} -> {}", previous, locale);
        }
    }

    /// Switch by code, rejecting unknown or disabled locales.
    pub fn set_locale_code(&self, code: &str) -> Result<Locale> {
        let locale = Locale::from_code(code)?;
        self.set_locale(locale);
        Ok(locale)
    }

    /// Receiver notified on every locale switch.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.current.subscribe()
    }
}

impl Default for LocaleSwitch {
    fn default() -> Self {
        Self::new(Locale::canonical())
    }
}
