mod commands;
mod config;
mod render;
mod session;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Plan your upcoming days: attach activities to dates and repeat them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the visible window of upcoming days
    Show,
    /// Add an activity on a date, optionally repeating until an end date
    Add {
        /// Date the activity starts on (YYYY-MM-DD)
        date: String,

        /// Activity text (1-20 characters)
        text: String,

        /// Color name, e.g. "pink" or "goldenrod"
        #[arg(short, long)]
        color: Option<String>,

        /// Icon name, e.g. "star" or "school"
        #[arg(short, long)]
        icon: Option<String>,

        /// Repeat cadence: "daily" or "weekly"
        #[arg(short, long)]
        repeat: Option<String>,

        /// Last date the repeat can land on (YYYY-MM-DD)
        #[arg(short, long)]
        until: Option<String>,
    },
    /// Update an activity (or its whole series) by id
    Update {
        /// Activity id, or a unique prefix of one
        id: String,

        /// New activity text
        #[arg(short, long)]
        text: Option<String>,

        /// New color name
        #[arg(short, long)]
        color: Option<String>,

        /// New icon name
        #[arg(short, long)]
        icon: Option<String>,

        /// Apply the change to every occurrence in the activity's series
        #[arg(short, long)]
        series: bool,
    },
    /// Remove an activity by id
    Remove {
        /// Activity id, or a unique prefix of one
        id: String,
    },
    /// Set how many upcoming days are visible
    Days { count: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show => commands::show::run().await,
        Commands::Add {
            date,
            text,
            color,
            icon,
            repeat,
            until,
        } => commands::add::run(&date, &text, color, icon, repeat, until).await,
        Commands::Update {
            id,
            text,
            color,
            icon,
            series,
        } => commands::update::run(&id, text, color, icon, series).await,
        Commands::Remove { id } => commands::remove::run(&id).await,
        Commands::Days { count } => commands::days::run(count).await,
    }
}
