//! The sign-up form: state, controller and render-ready views.

mod controller;
mod state;
mod view;

pub use controller::SignUpController;
pub use state::{Field, FieldErrors, FormState, SubmissionStatus};
pub use view::{ButtonView, FormView, InputKind, SignUpView, TextInputView};
