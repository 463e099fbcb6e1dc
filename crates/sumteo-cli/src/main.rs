use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sumteo", version, about = "Sumteo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Proof-of-reading records
    Proof {
        #[command(subcommand)]
        action: commands::proof::ProofAction,
    },
    /// Reading tree minting
    Mint {
        #[command(subcommand)]
        action: commands::mint::MintAction,
    },
    /// Demo reading room
    Room {
        #[command(subcommand)]
        action: commands::room::RoomAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SUMTEO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Proof { action } => commands::proof::run(action),
        Commands::Mint { action } => commands::mint::run(action),
        Commands::Room { action } => commands::room::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
