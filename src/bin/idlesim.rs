#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use idle_sim::config::SimConfig;
use idle_sim::genres::city::run_campaign;
use idle_sim::genres::report::{Summary, Termination};
use idle_sim::genres::sprint::{SprintParams, run_sprint};
use idle_sim::systems::csv_log::CsvLog;
use idle_sim::systems::grid_search::{Zone, random_search};
use idle_sim::systems::sdk::Hook;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One run without infrastructure or resets
    Sprint {
        /// Experience level of the run
        #[arg(long, default_value_t = 0.0)]
        experience: f64,
        /// Write the purchase log to this file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Prestige campaign up to the target experience
    Campaign {
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        start_experience: Option<f64>,
        #[arg(long)]
        target: Option<f64>,
        /// Stop after this many ticks in total
        #[arg(long)]
        max_ticks: Option<u64>,
        /// Write the purchase log to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Random search for the best 5x5 zoning
    Grid {
        #[arg(long, default_value_t = 10_000_000)]
        samples: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn load_config(path: Option<&PathBuf>) -> idle_sim::Result<SimConfig> {
    match path {
        Some(p) => {
            log::info!("loading config from {}", p.display());
            SimConfig::load(p)
        }
        None => Ok(SimConfig::default()),
    }
}

fn csv_hooks(path: Option<&PathBuf>, generators: usize) -> idle_sim::Result<Vec<Box<dyn Hook>>> {
    let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
    if let Some(p) = path {
        hooks.push(Box::new(CsvLog::create(p, generators)?));
    }
    Ok(hooks)
}

fn print_termination(termination: Termination) {
    match termination {
        Termination::Completed => {}
        Termination::NegativeResource { tick, resource } => {
            println!("PANIC: negative resource {resource} at tick {tick}.")
        }
        Termination::TickBudget { ticks } => println!("Tick budget exhausted after {ticks} ticks."),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Sprint { experience, csv, config } => {
            let cfg = load_config(config.as_ref())?;
            let hooks = csv_hooks(csv.as_ref(), cfg.economy.cost_factors.len())?;
            let params = SprintParams {
                experience: *experience,
                completion_level: cfg.campaign.completion_level,
                ..SprintParams::default()
            };
            let outcome = run_sprint(&cfg.economy, params, hooks)?;
            print_termination(outcome.termination);
            match Summary::from_purchases(&outcome.purchases) {
                Some(summary) => println!("\n{summary}"),
                None => println!("No purchases."),
            }
        }
        Commands::Campaign { config, start_experience, target, max_ticks, csv } => {
            let mut cfg = load_config(config.as_ref())?;
            if let Some(x) = start_experience {
                cfg.campaign.start_experience = *x;
            }
            if let Some(x) = target {
                cfg.campaign.target_experience = *x;
            }
            if max_ticks.is_some() {
                cfg.campaign.max_total_ticks = *max_ticks;
            }
            let hooks = csv_hooks(csv.as_ref(), cfg.economy.cost_factors.len())?;
            let outcome = run_campaign(&cfg, hooks)?;
            print_termination(outcome.termination);
            println!(
                "Experience {:.4e} (locked {:.4e}), city {}.",
                outcome.experience, outcome.locked_experience, outcome.city_level
            );
            match outcome.summary() {
                Some(summary) => println!("\n{summary}"),
                None => println!("No resets."),
            }
        }
        Commands::Grid { samples, seed } => {
            let outcome = random_search(*samples, *seed);
            for (zone, label) in Zone::ALL.into_iter().zip(["C", "R", "I"]) {
                if let Some((value, grid)) = outcome.best_for(zone) {
                    println!("max {label}: {value}");
                    print!("{grid}");
                }
            }
        }
    }

    Ok(())
}
