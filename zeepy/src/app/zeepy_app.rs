use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use zeepy_fleet::model::filter::StatusFilter;

use super::{FleetRunOptions, RoutesRunOptions, ZeepyAppError};
use crate::config::ZeepyConfig;

/// Command line tool that animates scooter routes, claims their profit, and
/// simulates the live fleet map
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ZeepyApp {
    #[command(subcommand)]
    pub op: ZeepyOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ZeepyOperation {
    /// animate a random route on each scooter card and optionally claim the profit
    Routes {
        /// TOML file layered over the built-in configuration.
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// scooter ids to show cards for. overrides `routes.cards`.
        #[arg(long, value_delimiter = ',')]
        cards: Option<Vec<String>>,

        /// claim each card's profit once its simulation completes.
        #[arg(long)]
        claim: bool,

        /// wall-clock seconds to animate a route. overrides `routes.animation`.
        #[arg(long)]
        duration_secs: Option<f64>,

        /// seed for route selection, for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// run the live-fleet monitor: random walks inside the safe zones
    Fleet {
        /// TOML file layered over the built-in configuration.
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// number of scooters the user owns. overrides `fleet.vehicle_count`.
        #[arg(long)]
        vehicle_count: Option<usize>,

        /// which scooters to show on the map: all, active or idle.
        #[arg(long, default_value_t = StatusFilter::All)]
        filter: StatusFilter,

        /// scooter number to center the map on, such as "#3".
        #[arg(long)]
        search: Option<String>,

        /// stop after this many position ticks. runs until ctrl-c if omitted.
        #[arg(long)]
        ticks: Option<u64>,

        /// write the visible markers as GeoJSON to this file after every tick.
        #[arg(long)]
        snapshot_file: Option<String>,

        /// seed for the random walk, for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl ZeepyOperation {
    pub fn run(&self) -> Result<(), ZeepyAppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ZeepyAppError::Runtime(e.to_string()))?;
        match self {
            ZeepyOperation::Routes {
                configuration_file,
                cards,
                claim,
                duration_secs,
                seed,
            } => {
                let mut config = ZeepyConfig::load(configuration_file.as_deref().map(Path::new))?;
                if let Some(cards) = cards {
                    config.routes.cards = cards.clone();
                }
                if let Some(secs) = duration_secs {
                    config.routes.animation.simulation_duration_secs = *secs;
                    config
                        .routes
                        .animation
                        .validate()
                        .map_err(ZeepyAppError::InvalidUserInput)?;
                }
                if config.routes.cards.is_empty() {
                    return Err(ZeepyAppError::InvalidUserInput(String::from(
                        "at least one scooter card is required",
                    )));
                }
                let options = RoutesRunOptions { claim: *claim };
                runtime.block_on(super::routes::run(&config.routes, &options, build_rng(*seed)))
            }
            ZeepyOperation::Fleet {
                configuration_file,
                vehicle_count,
                filter,
                search,
                ticks,
                snapshot_file,
                seed,
            } => {
                let config = ZeepyConfig::load(configuration_file.as_deref().map(Path::new))?;
                let options = FleetRunOptions {
                    vehicle_count: vehicle_count.unwrap_or(config.fleet.vehicle_count),
                    filter: *filter,
                    search: search.clone(),
                    ticks: *ticks,
                    snapshot_file: snapshot_file.as_ref().map(PathBuf::from),
                };
                runtime.block_on(super::fleet::run(&config.fleet, &options, build_rng(*seed)))
            }
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
