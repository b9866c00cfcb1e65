//! headstart-cli — smoke driver for a running Head Start inference service.
//!
//! Usage:
//!   headstart-cli health                     Liveness probe (no auth)
//!   headstart-cli predict [user]             Current migraine-risk prediction
//!   headstart-cli insights [user]            Trigger insights
//!   headstart-cli coach [user] [context]     Coaching recommendations
//!   headstart-cli ingest <events.json>       Submit a JSON array of telemetry events

use std::process;

use headstart_client::{HeadStartClient, Result, TelemetryEvent};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2..]).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"headstart-cli — Head Start service smoke driver

USAGE:
    headstart-cli <COMMAND> [ARGS]

COMMANDS:
    health                      Liveness probe (no auth header)
    predict [user]              Current migraine-risk prediction
    insights [user]             Trigger insights
    coach [user] [context]      Coaching recommendations
    ingest <events.json>        Submit a JSON array of telemetry events
    help                        Show this help message

ENVIRONMENT:
    HEADSTART_BASE_URL          Service base URL (default http://localhost:8000)
    HEADSTART_API_KEY           API key for authenticated endpoints
    HEADSTART_USER_ID           Default user id (default user_000)
    HEADSTART_HTTP_TIMEOUT_SECS Optional per-request timeout"#
    );
}

async fn run(command: &str, args: &[String]) -> Result<()> {
    let client = HeadStartClient::builder().build()?;
    let default_user = client.config().user_id().to_string();
    let user = args.first().map(String::as_str).unwrap_or(&default_user);

    match command {
        "health" => {
            let value = client.health().await?;
            print_json(&value);
        }
        "predict" => {
            let value = client.predict(user).await?;
            print_json(&value);
        }
        "insights" => {
            let value = client.insights(user).await?;
            print_json(&value);
        }
        "coach" => {
            let context = args.get(1).map(String::as_str);
            let value = client.coach(user, context).await?;
            print_json(&value);
        }
        "ingest" => {
            let path = args.first().map(String::as_str).unwrap_or_else(|| {
                eprintln!("ingest requires a path to a JSON array of events");
                process::exit(1);
            });
            let raw = std::fs::read_to_string(path)?;
            let events: Vec<TelemetryEvent> = serde_json::from_str(&raw)?;
            let receipt = client.ingest_batch(&events).await?;
            println!("Ingested {} events.", receipt.submitted);
            print_json(&receipt.last_response);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{value}"),
    }
}
