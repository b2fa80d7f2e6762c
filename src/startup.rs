//! src/startup.rs
use crate::configuration::Settings;
use crate::domain::{EmailValidator, UserEmail};
use crate::registration::{read_email, register_email, RegistrationError, SqlUserStore};
use std::io::{BufRead, Write};
use tracing::Instrument;
use uuid::Uuid;

pub struct Application {
    validator: EmailValidator,
    store: SqlUserStore,
    prompt: String,
}

impl Application {
    /// Nothing touches the database until [`Application::run`] has a valid email.
    pub fn build(configuration: Settings) -> Result<Self, RegistrationError> {
        let validator = EmailValidator::new(&configuration.registration.email_pattern)
            .map_err(|e| {
                tracing::error!("Failed to compile the email pattern: {}", e);
                RegistrationError::Pattern(e)
            })?;
        let store = SqlUserStore::new(configuration.database.connection_string());

        Ok(Self {
            validator,
            store,
            prompt: configuration.registration.prompt,
        })
    }

    pub async fn run<R, W>(&self, input: R, output: W) -> Result<UserEmail, RegistrationError>
    where
        R: BufRead,
        W: Write,
    {
        let span = tracing::info_span!("Email registration", run_id = %Uuid::new_v4());
        async move {
            let raw = read_email(input, output, &self.prompt)
                .map_err(RegistrationError::Input)?
                .ok_or(RegistrationError::MissingInput)?;
            register_email(&self.validator, &self.store, raw).await
        }
        .instrument(span)
        .await
    }
}

/// Tell the user how it went and pick the process exit status.
/// Only a saved email counts as success.
pub fn report<W: Write>(
    result: Result<UserEmail, RegistrationError>,
    mut output: W,
) -> std::io::Result<u8> {
    match result {
        Ok(_) => {
            writeln!(output, "Email is valid and saved to DB.")?;
            Ok(0)
        }
        Err(e) => {
            if !matches!(e, RegistrationError::InvalidEmail(_)) {
                tracing::error!(error.cause_chain = ?e, error.message = %e, "Registration failed");
            }
            writeln!(output, "{}", e)?;
            Ok(1)
        }
    }
}
