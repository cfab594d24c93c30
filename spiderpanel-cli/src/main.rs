use clap::{Parser, Subcommand};
use colored::Colorize;
use spiderpanel_core::{parse_base_url, CliErrorDisplay, PanelConfig, PanelError, SpiderClient};
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::{
    cmd_check_peers, cmd_functions, cmd_pause, cmd_query, cmd_resume, cmd_shutdown, cmd_status,
    handle_reservations_command, ReservationsCommand,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "spiderpanel")]
#[command(version = VERSION)]
#[command(about = "Status and control panel for a spider crawl server")]
#[command(long_about = r#"
Spiderpanel administers a running spider server over its HTTP interface.

Use 'spiderpanel status' to view uptime, cost, and request queues,
'spiderpanel functions' to list the exposed functions, and the control
subcommands (pause, resume, shutdown, reservations) to operate the server.

The server base URL is taken from --url, the SPIDER_URL environment
variable, or a spiderpanel.toml config file, in that order.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Spider server base URL")]
    url: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show server status (uptime, cost, request queues)")]
    Status {
        #[arg(
            short,
            long,
            default_value = "text",
            value_parser = ["text", "json"],
            help = "Output format"
        )]
        format: String,
    },

    #[command(about = "List exposed functions with intervals and arguments")]
    Functions {
        #[arg(
            short,
            long,
            default_value = "text",
            value_parser = ["text", "json"],
            help = "Output format"
        )]
        format: String,
    },

    #[command(about = "Force a scheduler query pass")]
    Query,

    #[command(about = "Ask the server to re-run peer discovery")]
    CheckPeers,

    #[command(about = "Pause the spider (stops issuing new requests)")]
    Pause,

    #[command(about = "Resume a paused spider")]
    Resume,

    #[command(about = "Shut the spider down (cannot be restarted from here)")]
    Shutdown {
        #[arg(short = 'y', long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Inspect and delete stored reservations")]
    Reservations {
        #[command(subcommand)]
        action: ReservationsCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PanelError>() {
                Some(panel_err) => {
                    eprintln!("{}: {}", "Error".red().bold(), CliErrorDisplay::new(panel_err))
                }
                None => eprintln!("{}: {}", "Error".red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = build_client(cli.url.as_deref())?;

    match cli.command {
        Commands::Status { format } => cmd_status(&client, &format).await,
        Commands::Functions { format } => cmd_functions(&client, &format).await,
        Commands::Query => cmd_query(&client).await,
        Commands::CheckPeers => cmd_check_peers(&client).await,
        Commands::Pause => cmd_pause(&client).await,
        Commands::Resume => cmd_resume(&client).await,
        Commands::Shutdown { yes } => cmd_shutdown(&client, yes).await,
        Commands::Reservations { action } => handle_reservations_command(&client, action).await,
    }
}

fn build_client(url_override: Option<&str>) -> anyhow::Result<SpiderClient> {
    let mut config = PanelConfig::load()?;
    if let Some(url) = url_override {
        config.server.url = parse_base_url(url)?;
    }
    Ok(SpiderClient::new(&config.server))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rejects_unknown_values() {
        let err = Cli::try_parse_from(["spiderpanel", "status", "--format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn format_accepts_text_and_json() {
        let cli = Cli::try_parse_from(["spiderpanel", "functions", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Functions { format } if format == "json"));

        let cli = Cli::try_parse_from(["spiderpanel", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status { format } if format == "text"));
    }
}
