use emailreg::configuration::get_configuration;
use emailreg::startup::{report, Application};
use emailreg::telemetry::{get_subscriber, init_subscriber};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // stdout belongs to the prompt and the outcome message.
    let subscriber = get_subscriber("emailreg".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let configuration = get_configuration()?;
    let result = match Application::build(configuration) {
        Ok(application) => {
            application
                .run(std::io::stdin().lock(), std::io::stdout())
                .await
        }
        Err(e) => Err(e),
    };

    let code = report(result, std::io::stdout())?;
    Ok(ExitCode::from(code))
}
