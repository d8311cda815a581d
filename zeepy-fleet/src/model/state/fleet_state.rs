use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use zeepy_core::model::storage::KeyValueStore;

use super::{FleetError, Vehicle};
use crate::model::geofence::SafeZoneEngine;

pub const STORAGE_KEY: &str = "zeepyScooterState";

/// the persisted fleet blob. written in full after every position tick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetState {
    pub scooters: Vec<Vehicle>,
    /// epoch milliseconds of the last activity re-draw.
    pub last_status_update: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegenerateReason {
    Missing,
    Corrupt(String),
    CountMismatch { found: usize, expected: usize },
}

impl std::fmt::Display for RegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegenerateReason::Missing => write!(f, "no stored state"),
            RegenerateReason::Corrupt(message) => write!(f, "stored state unreadable: {message}"),
            RegenerateReason::CountMismatch { found, expected } => write!(
                f,
                "stored state has {found} scooters, expected {expected}"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    Restored,
    Regenerated(RegenerateReason),
}

impl FleetState {
    /// a fresh fleet of `count` vehicles placed uniformly inside random safe zones.
    pub fn generate(
        count: usize,
        zones: &SafeZoneEngine,
        idle_threshold: f64,
        rng: &mut StdRng,
        now: i64,
    ) -> FleetState {
        let scooters = (0..count)
            .map(|id| {
                let position = zones.sample_location(rng);
                Vehicle::spawn(id, position, idle_threshold, rng)
            })
            .collect();
        FleetState {
            scooters,
            last_status_update: now,
        }
    }

    /// restores the stored fleet when it holds exactly `expected_count` vehicles.
    /// otherwise a fresh fleet is generated and persisted immediately.
    pub fn restore_or_generate<S: KeyValueStore>(
        store: &mut S,
        key: &str,
        expected_count: usize,
        zones: &SafeZoneEngine,
        idle_threshold: f64,
        rng: &mut StdRng,
        now: i64,
    ) -> Result<(FleetState, RestoreOutcome), FleetError> {
        let reason = match store.get_json::<FleetState>(key) {
            Ok(Some(state)) if state.scooters.len() == expected_count => {
                log::info!("restored {} scooters from '{key}'", state.scooters.len());
                return Ok((state, RestoreOutcome::Restored));
            }
            Ok(Some(state)) => RegenerateReason::CountMismatch {
                found: state.scooters.len(),
                expected: expected_count,
            },
            Ok(None) => RegenerateReason::Missing,
            Err(e) => {
                log::warn!("discarding unreadable fleet state: {e}");
                RegenerateReason::Corrupt(e.to_string())
            }
        };
        log::info!("generating {expected_count} scooters ({reason:?})");
        let state = FleetState::generate(expected_count, zones, idle_threshold, rng, now);
        state.persist(store, key)?;
        Ok((state, RestoreOutcome::Regenerated(reason)))
    }

    pub fn persist<S: KeyValueStore>(&self, store: &mut S, key: &str) -> Result<(), FleetError> {
        store.set_json(key, self)?;
        Ok(())
    }

    pub fn vehicle(&self, id: usize) -> Option<&Vehicle> {
        self.scooters.iter().find(|s| s.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.scooters.iter().filter(|s| s.is_active).count()
    }
}
