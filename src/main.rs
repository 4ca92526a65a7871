use loginform::configuration::get_configuration;
use loginform::startup::build;
use loginform::telemetry::{get_subscriber, init_subscriber};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Drives the login page headlessly: every line on stdin is typed into the
/// email input and submitted, and the resulting status text is printed.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("loginform".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let config = get_configuration()?;
    let app = build(config)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut status = app.status().subscribe();
        app.email_input().set_value(line);

        if !app.submit().default_prevented() {
            tracing::warn!("Submit was not intercepted, the page would reload");
            continue;
        }

        status.changed().await?;
        println!("{}", *status.borrow());
    }

    Ok(())
}
