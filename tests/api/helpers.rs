use emailreg::configuration::{get_configuration, Settings};
use emailreg::domain::UserEmail;
use emailreg::registration::RegistrationError;
use emailreg::startup::Application;
use emailreg::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use sqlx::AnyConnection;
use sqlx::Connection;
use std::path::PathBuf;
use uuid::Uuid;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise telemetry");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise telemetry");
    };
});

pub const USERS_TABLE: &str = "CREATE TABLE users (email TEXT NOT NULL)";

pub struct TestApp {
    pub configuration: Settings,
    pub database_url: String,
    directory: PathBuf,
}

pub struct Registration {
    pub result: Result<UserEmail, RegistrationError>,
    pub output: String,
}

impl TestApp {
    /// Feed `input` to a freshly built application, as if typed on stdin.
    pub async fn register(&self, input: &str) -> Registration {
        let application =
            Application::build(self.configuration.clone()).expect("Failed to build application.");
        let mut output = Vec::new();
        let result = application.run(input.as_bytes(), &mut output).await;
        Registration {
            result,
            output: String::from_utf8(output).expect("Output was not UTF-8"),
        }
    }

    pub async fn saved_emails(&self) -> Vec<String> {
        let mut connection = AnyConnection::connect(&self.database_url)
            .await
            .expect("Failed to connect to the test database");
        let emails = sqlx::query_scalar::<_, String>("SELECT email FROM users")
            .fetch_all(&mut connection)
            .await
            .expect("Failed to fetch saved emails");
        connection
            .close()
            .await
            .expect("Failed to close the test database connection");
        emails
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.directory);
    }
}

/// A test application backed by its own SQLite database with a `users` table.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_schema(Some(USERS_TABLE)).await
}

pub async fn spawn_app_with_schema(schema: Option<&str>) -> TestApp {
    Lazy::force(&TRACING);

    // Randomise the database location per test
    let directory = std::env::temp_dir().join(format!("emailreg-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&directory).expect("Failed to create the test directory");
    let database_url = format!(
        "sqlite://{}?mode=rwc",
        directory.join("registrations.db").display()
    );

    if let Some(schema) = schema {
        configure_database(&database_url, schema).await;
    }

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.database.url = Some(Secret::new(database_url.clone()));
        c
    };

    TestApp {
        configuration,
        database_url,
        directory,
    }
}

async fn configure_database(database_url: &str, schema: &str) {
    sqlx::any::install_default_drivers();
    let mut connection = AnyConnection::connect(database_url)
        .await
        .expect("Failed to connect to the test database");
    sqlx::query(schema)
        .execute(&mut connection)
        .await
        .expect("Failed to create the users table");
    connection
        .close()
        .await
        .expect("Failed to close the test database connection");
}
