//! tarifa - Delivery Price Model CLI
//!
//! Usage:
//!   tarifa train                       # fit on the built-in sample orders
//!   tarifa train --data orders.csv     # fit on a CSV dataset
//!   tarifa predict 0 10.0 5.0 3.0      # predict a price for one shipment

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;

use commands::{predict, train};

/// tarifa - Delivery Price Model Tool
///
/// Train a random forest pricing model and predict shipment prices.
#[derive(Parser)]
#[command(name = "tarifa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the pricing model and write the model artifact
    Train {
        /// CSV dataset with columns type,length,weight,distance,price;
        /// uses the built-in sample rows when omitted
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Output path for the model artifact
        /// (defaults to model.bin next to the executable)
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,

        /// Number of trees in the forest
        #[arg(long, default_value = "100")]
        trees: usize,

        /// Seed for reproducible training (unseeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Predict the price for one shipment
    Predict {
        /// Shipment type category code (integer)
        #[arg(value_name = "TYPE")]
        shipment_type: String,

        /// Shipment length
        #[arg(value_name = "LENGTH")]
        length: String,

        /// Shipment weight
        #[arg(value_name = "WEIGHT")]
        weight: String,

        /// Delivery distance
        #[arg(value_name = "DISTANCE")]
        distance: String,

        /// Path to the model artifact
        /// (defaults to model.bin next to the executable)
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train {
            data,
            model,
            trees,
            seed,
        } => train::run(data.as_deref(), model.as_deref(), trees, seed),

        Commands::Predict {
            shipment_type,
            length,
            weight,
            distance,
            model,
        } => predict::run(
            &shipment_type,
            &length,
            &weight,
            &distance,
            model.as_deref(),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
