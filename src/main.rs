use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use somno::OutputFormat;
use somno::commands;
use somno::config;
use somno::cycle::schedule::Cycles;

#[derive(Parser)]
#[command(name = "somno")]
#[command(about = "Sleep cycle calculator for bedtimes and wake-up times")]
#[command(version)]
struct Cli {
    #[arg(long, value_enum, global = true, default_value = "text", help = "Output format")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the bedtime for a target wake-up time
    Bedtime {
        #[arg(help = "Wake-up time (HH:MM, 24-hour)")]
        wake: String,
        #[arg(long, value_enum, help = "Number of 90-minute sleep cycles")]
        cycles: Option<Cycles>,
    },
    /// Compute the wake-up time for a target bedtime
    Wakeup {
        #[arg(help = "Bedtime (HH:MM, 24-hour)")]
        bed: String,
        #[arg(long, value_enum, help = "Number of 90-minute sleep cycles")]
        cycles: Option<Cycles>,
    },
    /// Plan a night interactively
    Plan,
    /// Show sleep hygiene tips
    Tips,
    /// List configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load()?;

    match &cli.command {
        Commands::Bedtime { wake, cycles } => {
            commands::plan::bedtime(&config, wake, *cycles, cli.format)?;
        }
        Commands::Wakeup { bed, cycles } => {
            commands::plan::wakeup(&config, bed, *cycles, cli.format)?;
        }
        Commands::Plan => {
            commands::interactive::plan(&config)?;
        }
        Commands::Tips => {
            commands::tips::tips()?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
