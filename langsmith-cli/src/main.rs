use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use langsmith_cli::{LangSmithClient, LangSmithConfig, LangSmithError, TimeWindow, DEFAULT_API_URL};

#[derive(Parser)]
#[command(name = "langsmith", about = "LangSmith CLI", arg_required_else_help = true)]
struct Cli {
    /// LangSmith API base URL
    #[arg(long, global = true, env = "LANGSMITH_ENDPOINT", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get all sessions
    Sessions,
    /// Get specific session
    Session { session_id: String },
    /// Get thread
    Thread {
        thread_id: String,
        #[arg(long)]
        session: String,
    },
    /// Get runs
    Runs {
        #[arg(long)]
        session: String,
        /// Time window (e.g., 5m, 15m)
        #[arg(long, default_value = "5m")]
        since: TimeWindow,
    },
    /// Get last thread automatically
    LastThread {
        #[arg(long)]
        session: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, LangSmithError> {
    let config = LangSmithConfig::from_env()?.with_api_url(cli.api_url);
    let client = LangSmithClient::new(config);

    let output: Value = match cli.command {
        Commands::Sessions => client.sessions().await,
        Commands::Session { session_id } => client.session(&session_id).await,
        Commands::Thread { thread_id, session } => client.thread(&thread_id, &session).await,
        Commands::Runs { session, since } => client.runs(&session, since).await,
        Commands::LastThread { session } => client.last_thread(&session).await,
    }?;
    serde_json::to_string_pretty(&output).map_err(|err| LangSmithError::Malformed(err.to_string()))
}
