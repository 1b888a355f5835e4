use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inngest_cli::{
    render_detail, render_events, render_runs, EventFilter, InngestClient, InngestConfig,
    InngestError, TimeWindow, DEFAULT_API_URL,
};

/// Inngest CLI - Interact with Inngest API
#[derive(Parser)]
#[command(name = "inngest", arg_required_else_help = true)]
struct Cli {
    /// Inngest API base URL
    #[arg(long, global = true, env = "INNGEST_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent events
    Events {
        /// Time window (e.g., 15m for 15 minutes)
        #[arg(long, default_value = "5m")]
        since: TimeWindow,
        /// Filter by event name
        #[arg(long)]
        name: Option<String>,
    },
    /// Get details of a specific event
    Event { internal_id: String },
    /// Get all function runs initialized by a specific event
    Runs {
        /// Event internal ID
        #[arg(long = "event")]
        event_id: String,
    },
    /// Get details of a specific function run
    Run { run_id: String },
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

async fn run(cli: Cli) -> Result<String, InngestError> {
    let client = InngestClient::new(InngestConfig::from_env(cli.api_url)?);

    match cli.command {
        Commands::Events { since, name } => {
            let filter = EventFilter {
                received_after: since.received_after(Utc::now()),
                name,
            };
            Ok(render_events(&client.list_events(&filter).await?))
        }
        Commands::Event { internal_id } => Ok(render_detail(&client.get_event(&internal_id).await?)),
        Commands::Runs { event_id } => Ok(render_runs(&client.list_event_runs(&event_id).await?)),
        Commands::Run { run_id } => Ok(render_detail(&client.get_run(&run_id).await?)),
    }
}
