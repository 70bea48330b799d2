use subtle::ConstantTimeEq;

/// Compare a password with its confirmation without leaking, through timing,
/// how long the common prefix is.
///
/// Two empty values are equal. A length difference returns early, which only
/// reveals that the lengths differ.
pub fn secrets_match(secret: &str, confirmation: &str) -> bool {
    let (secret, confirmation) = (secret.as_bytes(), confirmation.as_bytes());
    secret.len() == confirmation.len() && bool::from(secret.ct_eq(confirmation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_secrets_match() {
        assert!(secrets_match("myPassword@123", "myPassword@123"));
    }

    #[test]
    fn test_different_secrets() {
        assert!(!secrets_match("myPassword@123", "myPassword@124"));
        assert!(!secrets_match("myPassword@123", "myPassword@12"));
        assert!(!secrets_match("", "myPassword@123"));
    }

    #[test]
    fn test_empty_secrets_match() {
        assert!(secrets_match("", ""));
    }

    #[test]
    fn test_multibyte_secrets() {
        assert!(secrets_match("señha", "señha"));
        assert!(!secrets_match("senha", "señh"));
    }
}
