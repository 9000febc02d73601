use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "silentburn-cli", version, about = "Silentburn CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Weekly stats, streak and heatmap
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Insights and forecast
    Insights {
        #[command(subcommand)]
        action: commands::insights::InsightsAction,
    },
    /// Achievement catalog
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Wellness tips
    Tips {
        #[command(subcommand)]
        action: commands::tips::TipsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Insights { action } => commands::insights::run(action),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Tips { action } => commands::tips::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
