use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use tokio::time::{Instant, MissedTickBehavior};
use zeepy_core::{
    model::storage::{JsonFileStore, KeyValueStore, MemoryStore},
    util::{fs::write_string_replacing, time::epoch_millis},
};
use zeepy_fleet::model::{
    filter::StatusFilter,
    monitor::{FleetConfig, FleetMonitor},
    state::RestoreOutcome,
};

use super::ZeepyAppError;

#[derive(Debug, Clone)]
pub struct FleetRunOptions {
    pub vehicle_count: usize,
    pub filter: StatusFilter,
    pub search: Option<String>,
    /// position ticks to run before exiting. None runs until ctrl-c.
    pub ticks: Option<u64>,
    pub snapshot_file: Option<PathBuf>,
}

/// runs the live-fleet monitor against the configured storage. state lives in
/// a JSON file when `storage_file` is set, otherwise in memory.
pub async fn run(
    config: &FleetConfig,
    options: &FleetRunOptions,
    rng: StdRng,
) -> Result<(), ZeepyAppError> {
    match &config.storage_file {
        Some(path) => {
            let store = JsonFileStore::open(path)?;
            log::info!("fleet state stored in {}", store.path().display());
            run_with_store(store, config, options, rng).await
        }
        None => {
            log::info!("fleet state kept in memory, it will not survive this run");
            run_with_store(MemoryStore::new(), config, options, rng).await
        }
    }
}

async fn run_with_store<S: KeyValueStore>(
    store: S,
    config: &FleetConfig,
    options: &FleetRunOptions,
    rng: StdRng,
) -> Result<(), ZeepyAppError> {
    let (mut monitor, outcome) =
        FleetMonitor::init(store, config, options.vehicle_count, rng, epoch_millis())?;
    match outcome {
        RestoreOutcome::Restored => {
            log::info!("restored {} scooters", monitor.vehicles().len())
        }
        RestoreOutcome::Regenerated(reason) => log::info!(
            "generated {} scooters ({reason})",
            monitor.vehicles().len()
        ),
    }

    if monitor.is_empty() {
        log::info!("no scooters to monitor");
        write_snapshot(&monitor, options.snapshot_file.as_deref())?;
        return Ok(());
    }

    let summary = monitor.set_filter(options.filter);
    println!(
        "{} scooters, {} active, showing {} ({})",
        monitor.vehicles().len(),
        monitor.state().active_count(),
        summary.visible,
        options.filter
    );
    if let Some(input) = &options.search {
        match monitor.search(input) {
            Some(vehicle) => println!(
                "{} at ({:.6}, {:.6})",
                vehicle.label(),
                vehicle.lat,
                vehicle.lon
            ),
            None => log::warn!("no scooter matches search '{input}'"),
        }
    }
    write_snapshot(&monitor, options.snapshot_file.as_deref())?;

    if options.ticks == Some(0) {
        monitor.persist()?;
        return Ok(());
    }

    let mut positions = tokio::time::interval_at(
        Instant::now() + config.position_interval(),
        config.position_interval(),
    );
    positions.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut statuses = tokio::time::interval_at(
        Instant::now() + config.status_interval(),
        config.status_interval(),
    );
    statuses.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut completed: u64 = 0;
    loop {
        tokio::select! {
            _ = positions.tick() => {
                match monitor.tick_positions() {
                    Ok(tick) => log::info!(
                        "tick {}: {} moved, {} turned back",
                        completed + 1,
                        tick.moved,
                        tick.reversed
                    ),
                    Err(e) => log::error!("error updating scooter positions: {e}"),
                }
                write_snapshot(&monitor, options.snapshot_file.as_deref())?;
                completed += 1;
                if options.ticks.is_some_and(|limit| completed >= limit) {
                    break;
                }
            }
            _ = statuses.tick() => {
                if monitor.check_statuses(epoch_millis()) {
                    log::info!(
                        "statuses refreshed, {} active",
                        monitor.state().active_count()
                    );
                    write_snapshot(&monitor, options.snapshot_file.as_deref())?;
                }
            }
            result = &mut ctrl_c => {
                if let Err(e) = result {
                    log::warn!("failure listening for ctrl-c: {e}");
                }
                log::info!("interrupted, saving fleet state");
                break;
            }
        }
    }

    monitor.persist()?;
    Ok(())
}

fn write_snapshot<S: KeyValueStore>(
    monitor: &FleetMonitor<S>,
    path: Option<&Path>,
) -> Result<(), ZeepyAppError> {
    let Some(path) = path else {
        return Ok(());
    };
    let json = monitor.map().snapshot_json()?;
    write_string_replacing(path, &json)?;
    log::debug!(
        "wrote {} visible markers to {}",
        monitor.map().layer.len(),
        path.display()
    );
    Ok(())
}
