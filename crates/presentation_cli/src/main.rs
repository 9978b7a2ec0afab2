//! Weather agent CLI
//!
//! Runs weather lookups and raw tool calls, prints the agent profile and
//! manages per-session memory.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod app;

use std::{path::PathBuf, process::ExitCode};

use application::{AgentProfile, ApplicationError, ErrorKind, WEATHER_TOOL_ID, format_reading};
use clap::{Parser, Subcommand};
use domain::SessionId;
use infrastructure::{AppConfig, init_telemetry};
use serde_json::{Value, json};

/// Session used when none is given
const DEFAULT_SESSION: &str = "default";

/// Weather agent CLI
#[derive(Debug, Parser)]
#[command(name = "weather-agent")]
#[command(author, version, about = "Current weather lookups for a conversational agent", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./weather-agent.toml if present)
    #[arg(short, long, global = true, env = "WEATHER_AGENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up current weather for a location
    ///
    /// Example: weather-agent weather "New York, NY"
    Weather {
        /// City name, optionally followed by region or country
        location: String,

        /// Session to remember the result in
        #[arg(short, long, default_value = DEFAULT_SESSION)]
        session: String,

        /// Print the reading as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Invoke a tool with raw JSON arguments, as the agent host does
    ///
    /// Example: weather-agent tool '{"input": {"location": "Paris"}}'
    Tool {
        /// JSON arguments
        args: String,

        /// Tool identifier
        #[arg(long, default_value = WEATHER_TOOL_ID)]
        id: String,

        /// Session to remember the result in
        #[arg(short, long, default_value = DEFAULT_SESSION)]
        session: String,
    },

    /// Print the agent profile and tool definitions as JSON
    Describe,

    /// Show the last lookup remembered for a session
    Recall {
        /// Session identifier
        #[arg(short, long)]
        session: String,
    },

    /// Forget everything remembered for a session
    Forget {
        /// Session identifier
        #[arg(short, long)]
        session: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render a failure as the JSON object printed on stderr
fn error_payload(err: &anyhow::Error) -> Value {
    let kind = err
        .downcast_ref::<ApplicationError>()
        .map_or(ErrorKind::Internal, ApplicationError::kind);

    json!({
        "error": {
            "kind": kind,
            "message": err.to_string(),
        }
    })
}

fn parse_session(raw: &str) -> Result<SessionId, ApplicationError> {
    Ok(SessionId::parse(raw)?)
}

fn load_config(cli: &Cli) -> Result<AppConfig, ApplicationError> {
    let mut config = AppConfig::load(cli.config.as_deref())
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
    config.validate().map_err(ApplicationError::Configuration)?;

    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }

    Ok(config)
}

fn print_profile(profile: &AgentProfile) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(profile)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_telemetry(&config.telemetry)?;

    match cli.command {
        // Needs no session store, so nothing is opened or created
        Commands::Describe => print_profile(&config.agent.profile()),
        command => run_agent_command(&config, command).await,
    }
}

async fn run_agent_command(config: &AppConfig, command: Commands) -> anyhow::Result<()> {
    let agent = app::build_agent(config)?;

    match command {
        Commands::Weather {
            location,
            session,
            json,
        } => {
            let session = parse_session(&session)?;
            let reading = agent.ask(&session, &location).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                println!("{}", format_reading(&reading));
            }
        },

        Commands::Tool { args, id, session } => {
            let session = parse_session(&session)?;
            let args: Value = serde_json::from_str(&args).map_err(|e| {
                ApplicationError::Validation(format!("Invalid JSON arguments: {e}"))
            })?;

            let output = agent.invoke_tool(&session, &id, &args).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        },

        Commands::Describe => print_profile(agent.profile())?,

        Commands::Recall { session } => {
            let session = parse_session(&session)?;
            let location = agent.last_location(&session).await?;
            let reading = agent.recall(&session).await?;

            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "session": session,
                    "lastLocation": location,
                    "lastReading": reading,
                }))?
            );
        },

        Commands::Forget { session } => {
            let session = parse_session(&session)?;
            let removed = agent.forget(&session).await?;
            println!("{}", json!({ "session": session, "removed": removed }));
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_payload(&err));
            ExitCode::FAILURE
        },
    }
}
