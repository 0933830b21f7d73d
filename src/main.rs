use anyhow::{Context, Result};
use clap::Parser;
use nohrs_term::core::telemetry::logging::init_logging;
use nohrs_term::{Explorer, ExplorerOptions, MenuProfile, Session};
use std::io;
use std::path::PathBuf;

/// Interactive terminal file explorer
#[derive(Parser, Debug)]
#[command(name = "nohrs-term")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to start in (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Use the reduced seven-entry menu
    #[arg(long)]
    basic: bool,

    /// Do not wait for Enter after listings, searches and permission views
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let start = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let session = Session::new(&start)
        .with_context(|| format!("Cannot start in {}", start.display()))?;

    let options = ExplorerOptions {
        profile: if args.basic {
            MenuProfile::Basic
        } else {
            MenuProfile::Full
        },
        pause: !args.no_pause,
    };
    tracing::debug!("Starting in {:?} with {:?}", session.cwd(), options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Explorer::new(session, options, stdin.lock(), stdout.lock())
        .run()
        .context("Failed to write to stdout")?;
    Ok(())
}
