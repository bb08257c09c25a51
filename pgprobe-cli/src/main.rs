use color_eyre::eyre::Result;
use pgprobe_client::check::{self, CheckOutcome};
use pgprobe_core::ProductQuery;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let query = ProductQuery::first_with_group();
    info!("running connectivity check: {}", query.to_sql());

    // The check itself never escapes: one report line, exit status untouched.
    let outcome = check::run_env(&query).await;
    match &outcome {
        CheckOutcome::Success(_) => println!("{}", outcome),
        CheckOutcome::Failure(_) => eprintln!("{}", outcome),
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
