use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use indicatif::ProgressBar;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transmission_framing::{
    Result, TransmissionModel, account, compare_models, crossover_bytes, protocols::protocols_for,
    sweep::sweep,
};

#[derive(Parser)]
#[command(name = "transmission-framing")]
#[command(about = "Compare asynchronous and synchronous transmission framing overhead")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account a payload under one framing model
    Account {
        /// Payload size in bytes
        #[arg(short, long)]
        bytes: u64,
        /// Framing model
        #[arg(short, long, value_enum)]
        model: TransmissionModel,
    },
    /// Compare both framing models for one payload
    Compare {
        /// Payload size in bytes
        #[arg(short, long)]
        bytes: u64,
    },
    /// Compare both models over a range of payload sizes
    Sweep {
        /// Smallest payload size in bytes
        #[arg(long, default_value = "1")]
        from: u64,
        /// Largest payload size in bytes
        #[arg(long, default_value = "32")]
        to: u64,
    },
    /// List common protocols by framing model
    Protocols {
        /// Only list protocols using this model
        #[arg(short, long, value_enum)]
        model: Option<TransmissionModel>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=error", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Calculation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Account { bytes, model } => {
            let accounting = account(model, bytes)?;
            println!("{accounting}");
            println!("  Overhead:      {:.1}%", accounting.overhead_percent());
        }
        Commands::Compare { bytes } => {
            println!("{}", compare_models(bytes)?);
        }
        Commands::Sweep { from, to } => {
            info!(from, to, "Sweeping payload sizes");

            let result = sweep(from..=to, &ProgressBar::new(0))?;

            println!("{:>8} {:>8} {:>8} {:>8}", "bytes", "async%", "sync%", "delta");
            for c in result.comparisons() {
                println!(
                    "{:>8} {:>8.1} {:>8.1} {:>+8.1}",
                    c.num_bytes,
                    c.asynchronous.efficiency_percent(),
                    c.synchronous.efficiency_percent(),
                    c.efficiency_delta_percent
                );
            }

            match result.crossover() {
                Some(n) => println!("\nSynchronous framing pays off from {n} bytes"),
                None => println!(
                    "\nAsynchronous framing wins across the range (crossover at {} bytes)",
                    crossover_bytes()
                ),
            }
        }
        Commands::Protocols { model } => {
            let models = match model {
                Some(model) => vec![model],
                None => TransmissionModel::ALL.to_vec(),
            };

            for model in models {
                println!("{model} protocols:");
                for p in protocols_for(model) {
                    println!("  • {:12} - {}", p.name, p.usage);
                }
            }
        }
    }

    Ok(())
}
