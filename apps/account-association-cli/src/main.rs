use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cascade;
mod common;
mod membership;
mod query;

/// Administer account associations directly against the association store
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(name = "account-association")]
struct Cli {
    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Query(query::QueryArgs),
    Membership(membership::MembershipArgs),
    Cascade(cascade::CascadeArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query(query) => query.run().await,
        Commands::Membership(membership) => membership.run().await,
        Commands::Cascade(cascade) => cascade.run().await,
    }
}
