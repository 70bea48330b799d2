//! Render-ready snapshot of the sign-up form.
//!
//! These are plain data handed to whatever draws the page: a text input with
//! optional help text, a button and a spinner flag, or the confirmation
//! message that replaces the form after a successful registration.

use crate::form::Field;

/// How an input displays its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub kind: InputKind,
    /// Message shown below the input
    pub help: Option<String>,
}

impl TextInputView {
    /// An input carrying help text is drawn in its invalid state.
    pub fn is_invalid(&self) -> bool {
        self.help.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub inputs: Vec<TextInputView>,
    pub button: ButtonView,
    pub spinner_visible: bool,
}

impl FormView {
    pub fn input(&self, field: Field) -> Option<&TextInputView> {
        self.inputs.iter().find(|input| input.field == field)
    }

    /// Find an input by its visible label.
    pub fn input_by_label(&self, label: &str) -> Option<&TextInputView> {
        self.inputs.iter().find(|input| input.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpView {
    Form(FormView),
    Confirmation(String),
}

impl SignUpView {
    pub fn form(&self) -> Option<&FormView> {
        match self {
            SignUpView::Form(form) => Some(form),
            SignUpView::Confirmation(_) => None,
        }
    }

    pub fn confirmation(&self) -> Option<&str> {
        match self {
            SignUpView::Form(_) => None,
            SignUpView::Confirmation(message) => Some(message),
        }
    }
}
