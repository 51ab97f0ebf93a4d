use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prontkit::{ClientConfig, build_observed_runtime};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
/// Calls the Pront clinical-records tools from the command line
struct Args {
    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Backend base URL (falls back to PRONT_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Backend API key (falls back to PRONT_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is reachable
    Health,
    /// Print the tool catalog as function-calling specs
    Tools,
    /// Run one tool and print its text answer
    Call {
        /// Tool name, e.g. buscar_paciente_pront
        tool_name: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::resolve(args.base_url, args.api_key)
        .context("could not configure the Pront client")?;
    debug!(base_url = %config.base_url, "resolved client configuration");
    let runtime = build_observed_runtime(config).context("could not build the Pront runtime")?;

    match args.command {
        Command::Health => {
            let body = runtime
                .client()
                .health_check()
                .await
                .context("health check failed")?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&runtime.function_specs())?);
        }
        Command::Call { tool_name, args } => {
            info!(tool_name = %tool_name, "dispatching tool call");
            println!("{}", runtime.dispatch(&tool_name, &args).await);
        }
    }

    Ok(())
}
