//! Sign-up form controller.
//!
//! Owns the [`FormState`] for one form lifetime and enforces the submission
//! rules: at most one request in flight, server field errors replaced wholesale
//! on every validation rejection and cleared field-by-field on edit, and no
//! failure ever leaving the form stuck in `Pending`.
//!
//! Derived values (`button_enabled`, `mismatch_message`, `view`) are computed
//! from the state on every call and never cached.

use crate::api::{RegistrationEndpoint, RegistrationRequest, Submission};
use crate::error::RegistrationError;
use crate::form::view::{ButtonView, FormView, InputKind, SignUpView, TextInputView};
use crate::form::{Field, FieldErrors, FormState, SubmissionStatus};
use crate::i18n::LocaleSwitch;
use crate::security::secrets_match;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct SignUpController {
    state: FormState,
    locale: LocaleSwitch,
}

impl SignUpController {
    pub fn new(locale: LocaleSwitch) -> Self {
        Self {
            state: FormState::new(),
            locale,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.value(field)
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.state.field_errors.get(field)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.state.field_errors
    }

    pub fn locale(&self) -> &LocaleSwitch {
        &self.locale
    }

    /// Update a field value and drop that field's error.
    ///
    /// Allowed while a request is pending. Ignored once the form has been
    /// replaced by the confirmation view.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.state.status.is_terminal() {
            debug!("Ignoring edit of {} after successful registration", field);
            return;
        }

        *self.state.value_mut(field) = value.into();
        if self.state.field_errors.remove(field).is_some() {
            debug!("Cleared server error for {}", field);
        }
    }

    /// Password and repeat-password are equal (two empty values count as equal).
    pub fn passwords_match(&self) -> bool {
        secrets_match(&self.state.password, &self.state.password_repeat)
    }

    pub fn button_enabled(&self) -> bool {
        !self.state.status.is_pending() && self.passwords_match()
    }

    pub fn spinner_visible(&self) -> bool {
        self.state.status.is_pending()
    }

    /// Localized mismatch message, only when both passwords are filled in
    /// and differ.
    pub fn mismatch_message(&self) -> Option<&'static str> {
        let both_filled =
            !self.state.password.is_empty() && !self.state.password_repeat.is_empty();
        if both_filled && !self.passwords_match() {
            Some(self.locale.strings().password_mismatch_validation)
        } else {
            None
        }
    }

    /// Move to `Pending` and build the outgoing submission.
    ///
    /// Returns `None` without touching the state when the button is not
    /// enabled: a request is already in flight, the passwords differ, or the
    /// registration already succeeded.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.state.status.is_pending() {
            debug!("Submit ignored: a registration request is already pending");
            return None;
        }
        if self.state.status.is_terminal() {
            debug!("Submit ignored: registration already succeeded");
            return None;
        }
        if !self.passwords_match() {
            debug!("Submit ignored: passwords do not match");
            return None;
        }

        self.state.status = SubmissionStatus::Pending;
        let submission = Submission {
            body: RegistrationRequest {
                username: self.state.username.clone(),
                email: self.state.email.clone(),
                password: self.state.password.clone(),
            },
            locale: self.locale.current(),
        };

        info!(
            "Submitting registration for '{}' (locale {})",
            submission.body.username, submission.locale
        );
        Some(submission)
    }

    /// Apply the outcome of the pending request.
    pub fn complete_submit(&mut self, result: Result<(), RegistrationError>) {
        if !self.state.status.is_pending() {
            warn!(
                "Ignoring registration result while {:?}: no request pending",
                self.state.status
            );
            return;
        }

        match result {
            Ok(()) => {
                info!("Registration accepted");
                self.state.status = SubmissionStatus::Succeeded;
            }
            Err(RegistrationError::Validation(errors)) => {
                info!("Registration rejected with {} field error(s)", errors.len());
                self.state.field_errors = errors;
                self.state.status = SubmissionStatus::Failed;
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                self.state.status = SubmissionStatus::Failed;
            }
        }
    }

    /// Run one full submission against `endpoint`.
    ///
    /// Returns `false` when the submit was ignored and nothing was sent.
    pub async fn submit<E>(&mut self, endpoint: &E) -> bool
    where
        E: RegistrationEndpoint + ?Sized,
    {
        let Some(submission) = self.begin_submit() else {
            return false;
        };
        let result = endpoint.register(submission).await;
        self.complete_submit(result);
        true
    }

    /// Snapshot of what should currently be on screen.
    pub fn view(&self) -> SignUpView {
        let strings = self.locale.strings();

        if self.state.status.is_terminal() {
            return SignUpView::Confirmation(strings.account_activation_notification.to_string());
        }

        let mismatch = self.mismatch_message();
        let inputs = Field::ALL
            .into_iter()
            .map(|field| {
                let label = match field {
                    Field::Username => strings.username,
                    Field::Email => strings.email,
                    Field::Password => strings.password,
                    Field::PasswordRepeat => strings.repeat_password,
                };
                let mut help = self.field_error(field).map(str::to_string);
                if field == Field::PasswordRepeat && help.is_none() {
                    help = mismatch.map(str::to_string);
                }
                TextInputView {
                    field,
                    label,
                    value: self.value(field).to_string(),
                    kind: if field.is_secret() {
                        InputKind::Password
                    } else {
                        InputKind::Text
                    },
                    help,
                }
            })
            .collect();

        SignUpView::Form(FormView {
            heading: strings.sign_up,
            inputs,
            button: ButtonView {
                label: strings.sign_up,
                enabled: self.button_enabled(),
            },
            spinner_visible: self.spinner_visible(),
        })
    }
}
