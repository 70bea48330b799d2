/// All localized user-facing strings of the sign-up form for one locale.
///
/// Field names are the snake_case form of the catalog keys; [`LocaleStrings::get`]
/// resolves the camelCase keys used by the localization contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStrings {
    // ==================== Headings & Buttons ====================
    /// Page heading and submit button label (`signUp`)
    pub sign_up: &'static str,

    // ==================== Field Labels ====================
    /// Label of the username input (`username`)
    pub username: &'static str,

    /// Label of the e-mail input (`email`)
    pub email: &'static str,

    /// Label of the password input (`password`)
    pub password: &'static str,

    /// Label of the repeat-password input (`repeatPassword`)
    pub repeat_password: &'static str,

    // ==================== Messages ====================
    /// Shown under the repeat-password input when both passwords differ
    pub password_mismatch_validation: &'static str,

    /// Replaces the form after a successful registration
    pub account_activation_notification: &'static str,
}

impl LocaleStrings {
    /// Every catalog key, in display order.
    pub const KEYS: [&'static str; 7] = [
        "signUp",
        "username",
        "email",
        "password",
        "repeatPassword",
        "passwordMismatchValidation",
        "accountActivationNotification",
    ];

    /// Look up a string by its catalog key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "signUp" => Some(self.sign_up),
            "username" => Some(self.username),
            "email" => Some(self.email),
            "password" => Some(self.password),
            "repeatPassword" => Some(self.repeat_password),
            "passwordMismatchValidation" => Some(self.password_mismatch_validation),
            "accountActivationNotification" => Some(self.account_activation_notification),
            _ => None,
        }
    }

    /// Iterate over `(key, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        Self::KEYS
            .iter()
            .filter_map(move |key| self.get(key).map(|value| (*key, value)))
    }
}

// ==================== English Strings ====================

/// English strings (canonical)
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    sign_up: "Sign Up",
    username: "Username",
    email: "E-mail",
    password: "Password",
    repeat_password: "Repeat Password",
    password_mismatch_validation: "Password mismatch",
    account_activation_notification: "Please check your e-mail to activate your account",
};

// ==================== Portuguese (Brazil) Strings ====================

/// Brazilian Portuguese strings
pub const PORTUGUESE_BR_STRINGS: LocaleStrings = LocaleStrings {
    sign_up: "Cadastrar",
    username: "Nome de usuário",
    email: "E-mail",
    password: "Senha",
    repeat_password: "Repetir senha",
    password_mismatch_validation: "As senhas não coincidem",
    account_activation_notification: "Verifique seu e-mail para ativar sua conta",
};
