mod commands;
mod config;
mod invite;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::GlobalConfig;

#[derive(Parser)]
#[command(name = "invite")]
#[command(about = "Build iCalendar meeting invitations as .ics files or email bodies")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an invite file to an .ics file
    Render {
        /// Invite file (TOML)
        file: PathBuf,

        /// Output file (defaults to default_output from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print a MIME multipart email body carrying the invite
    Email {
        /// Invite file (TOML)
        file: PathBuf,

        /// Multipart boundary token (generated when omitted)
        #[arg(short, long)]
        boundary: Option<String>,
    },
    /// Build a single-event invite from flags
    New(commands::new::NewArgs),
    /// Write a sample invite file
    Init {
        #[arg(default_value = "invite.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            file,
            output,
            stdout,
        } => commands::render::run(&file, output, stdout, &GlobalConfig::load()?),
        Commands::Email { file, boundary } => {
            commands::email::run(&file, boundary, &GlobalConfig::load()?)
        }
        Commands::New(args) => commands::new::run(args, &GlobalConfig::load()?),
        Commands::Init { path } => commands::init::run(&path),
    }
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
