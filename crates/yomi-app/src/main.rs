use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod events;
pub mod insert;
pub mod profile;
pub mod state;
pub mod status;

use self::cli::Cli;
use self::events::{TextRequest, handle_text_input};
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.dictionary {
        config.dictionary.enabled = true;
        config.dictionary.path = Some(path.display().to_string());
    }

    let state = AppState::new(config)?;
    state.dictionary_status.report();

    handle_text_input(&state, TextRequest::from(cli)).await
}

// stdout carries the markdown, logs go to stderr
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
