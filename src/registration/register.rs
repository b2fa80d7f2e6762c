use super::{error_chain_fmt, UserStore};
use crate::domain::{EmailValidator, UserEmail};

#[derive(thiserror::Error)]
pub enum RegistrationError {
    #[error("Regex Error: {0}")]
    Pattern(#[source] regex::Error),
    #[error("No email was entered.")]
    MissingInput,
    #[error("Failed to read the email from input.")]
    Input(#[source] std::io::Error),
    #[error("Invalid email format.")]
    InvalidEmail(String),
    #[error("DB Error: {0}")]
    Database(#[source] sqlx::Error),
}

impl std::fmt::Debug for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Validate `raw` and, only if it is an email, hand it to `store`.
#[tracing::instrument(
    name = "Registering a new user email",
    skip(validator, store, raw),
    fields(user_email = %raw)
)]
pub async fn register_email<S>(
    validator: &EmailValidator,
    store: &S,
    raw: String,
) -> Result<UserEmail, RegistrationError>
where
    S: UserStore + ?Sized,
{
    let email = validator.parse(raw).map_err(|e| {
        tracing::info!("Rejected input: {}", e);
        RegistrationError::InvalidEmail(e)
    })?;

    store
        .insert_email(&email)
        .await
        .map_err(RegistrationError::Database)?;

    tracing::info!("User email has been saved");
    Ok(email)
}
