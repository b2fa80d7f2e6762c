//! src/domain/mod.rs
mod email_validator;
mod user_email;

pub use email_validator::{EmailValidator, DEFAULT_EMAIL_PATTERN};
pub use user_email::UserEmail;
