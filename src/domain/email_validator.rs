//! src/domain/email_validator.rs
use super::UserEmail;
use regex::Regex;

/// Local part and domain, each made of the usual address characters,
/// joined by a single `@`.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$";

/// Decides which strings are email addresses.
///
/// The pattern is matched against the whole candidate string.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        // The pattern has to stand on its own before it is anchored,
        // otherwise `a)|(b` would turn into a valid alternation.
        Regex::new(pattern)?;
        let pattern = Regex::new(&format!(r"\A(?:{})\z", pattern))?;
        Ok(Self { pattern })
    }

    pub fn parse(&self, s: String) -> Result<UserEmail, String> {
        if self.pattern.is_match(&s) {
            Ok(UserEmail::new(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_PATTERN).expect("Failed to compile the built-in email pattern")
    }
}
