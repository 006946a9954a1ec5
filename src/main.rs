mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clubcal_core::ViewMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::Session;

#[derive(Parser)]
#[command(name = "clubcal")]
#[command(about = "Browse your club's weekly classes as a week or day calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rules file to read instead of the configured one (.toml or .json)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Clone, Copy)]
struct Navigation {
    /// Go back this many weeks (or days in day view)
    #[arg(long, default_value_t = 0, conflicts_with = "next")]
    prev: u32,

    /// Go forward this many weeks (or days in day view)
    #[arg(long, default_value_t = 0)]
    next: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the classes of one week (Sunday to Saturday)
    Week {
        /// Any date inside the week (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        nav: Navigation,
    },
    /// Show the classes of a single day
    Day {
        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        nav: Navigation,

        /// Draw the day as a time grid
        #[arg(long)]
        grid: bool,
    },
    /// List every upcoming class within the horizon
    Occurrences {
        /// Only show classes from this rule
        #[arg(long)]
        rule: Option<String>,
    },
    /// Summarize the classes in a week or day
    Stats {
        /// "week" or "day" (defaults to the configured view)
        #[arg(long)]
        view: Option<ViewMode>,

        /// Any date inside the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show config paths and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Config => commands::config::run(cli.rules.as_deref()),
        Commands::Week { date, nav } => {
            let session = Session::load(cli.rules.as_deref(), cli.today.as_deref())?;
            let window = session.window(ViewMode::Week, date.as_deref(), nav.offset())?;
            commands::schedule::run(&session, window, cli.json, false)
        }
        Commands::Day { date, nav, grid } => {
            let session = Session::load(cli.rules.as_deref(), cli.today.as_deref())?;
            let window = session.window(ViewMode::Day, date.as_deref(), nav.offset())?;
            commands::schedule::run(&session, window, cli.json, grid)
        }
        Commands::Occurrences { rule } => {
            let session = Session::load(cli.rules.as_deref(), cli.today.as_deref())?;
            commands::occurrences::run(&session, rule.as_deref(), cli.json)
        }
        Commands::Stats { view, date } => {
            let session = Session::load(cli.rules.as_deref(), cli.today.as_deref())?;
            let mode = view.unwrap_or(session.config.default_view);
            let window = session.window(mode, date.as_deref(), 0)?;
            commands::stats::run(&session, window, cli.json)
        }
    }
}

impl Navigation {
    /// Signed number of steps from the reference date.
    fn offset(self) -> i64 {
        i64::from(self.next) - i64::from(self.prev)
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "clubcal=debug,clubcal_core=debug"
    } else {
        "clubcal=warn,clubcal_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
