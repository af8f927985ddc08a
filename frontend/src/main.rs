use std::sync::Arc;

use leave_calendar_backend::config::Config;
use leave_calendar_backend::utils::time::format_month;
use leave_calendar_frontend::pages::calendar::{CalendarViewModel, Outcome};
use leave_calendar_frontend::state::leave::LeaveStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the calendar listing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "leave_calendar_backend=info,leave_calendar_frontend=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    tracing::info!(
        storage_backend = ?config.storage_backend,
        storage_dir = %config.storage_dir.display(),
        storage_key = %config.storage_key,
        create_delay_ms = config.create_delay_ms,
        default_user_id = %config.default_user_id,
        time_zone = %config.time_zone,
        "Loaded configuration from environment/.env"
    );

    let repository = Arc::new(config.leave_repository());
    let store = LeaveStore::starting_today(repository, &config.time_zone);
    let mut view_model = CalendarViewModel::new(store, config.default_user_id.clone());

    let mut changes = view_model.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let snapshot = changes.borrow_and_update().clone();
            tracing::debug!(
                version = snapshot.version,
                month = %format_month(snapshot.current_month),
                count = snapshot.leaves.len(),
                "Store changed"
            );
        }
    });

    print_lines(&view_model.refresh().await?);
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match view_model.handle_line(&line).await {
            Ok(Outcome::Render(output)) => print_lines(&output),
            Ok(Outcome::Quit) => break,
            Err(err) => {
                tracing::warn!(code = err.code(), "Command failed: {}", err);
                eprintln!("error: {err}");
            }
        }
    }

    Ok(())
}
