//! Client-side sign-up form: field state, local and server-side validation,
//! single in-flight registration request and localized status display.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod runtime;
pub mod security;
