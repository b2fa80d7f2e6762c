use crate::domain::UserEmail;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use sqlx::AnyConnection;
use sqlx::Connection;

/// Somewhere validated emails end up.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_email(&self, email: &UserEmail) -> Result<(), sqlx::Error>;
}

/// Writes to the `users` table of a SQL database.
///
/// Every insert opens its own connection and closes it afterwards.
pub struct SqlUserStore {
    connection_string: Secret<String>,
}

impl SqlUserStore {
    pub fn new(connection_string: Secret<String>) -> Self {
        sqlx::any::install_default_drivers();
        Self { connection_string }
    }

    #[tracing::instrument(name = "Opening a database connection", skip(self))]
    async fn connect(&self) -> Result<AnyConnection, sqlx::Error> {
        AnyConnection::connect(self.connection_string.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to the database: {:?}", e);
                e
            })
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    #[tracing::instrument(name = "Saving new user email in the database", skip(self, email))]
    async fn insert_email(&self, email: &UserEmail) -> Result<(), sqlx::Error> {
        let mut connection = self.connect().await?;

        let result = sqlx::query(r#"INSERT INTO users (email) VALUES (?)"#)
            .bind(email.as_ref().to_owned())
            .execute(&mut connection)
            .await;

        // Close regardless of how the insert went.
        if let Err(e) = connection.close().await {
            tracing::warn!("Failed to close the database connection: {:?}", e);
        }

        let result = result.map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        tracing::info!("Inserted {} row(s)", result.rows_affected());
        Ok(())
    }
}
