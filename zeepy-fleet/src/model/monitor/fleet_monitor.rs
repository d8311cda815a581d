use rand::rngs::StdRng;
use zeepy_core::model::storage::KeyValueStore;

use super::FleetConfig;
use crate::model::{
    filter::{apply_filter, search_vehicle, FilterSummary, StatusFilter},
    geofence::SafeZoneEngine,
    layer::{FleetMap, SEARCH_ZOOM},
    state::{FleetError, FleetState, RestoreOutcome, Vehicle},
    walk::{RandomWalk, StatusRefresh, TickSummary},
};

/// the live-fleet page: persisted vehicle state, the random walk that moves
/// it, and the map it is rendered onto.
pub struct FleetMonitor<S: KeyValueStore> {
    store: S,
    storage_key: String,
    zones: SafeZoneEngine,
    walk: RandomWalk,
    status: StatusRefresh,
    state: FleetState,
    map: FleetMap,
    filter: StatusFilter,
    rng: StdRng,
}

impl<S: KeyValueStore> FleetMonitor<S> {
    /// restores or generates the fleet, builds its markers, runs the initial
    /// status check and shows every vehicle.
    pub fn init(
        mut store: S,
        config: &FleetConfig,
        expected_count: usize,
        mut rng: StdRng,
        now: i64,
    ) -> Result<(FleetMonitor<S>, RestoreOutcome), FleetError> {
        config.validate().map_err(FleetError::InvalidConfig)?;
        let zones = SafeZoneEngine::new(&config.safe_zones).map_err(FleetError::InvalidConfig)?;
        let (state, outcome) = FleetState::restore_or_generate(
            &mut store,
            &config.storage_key,
            expected_count,
            &zones,
            config.idle_threshold,
            &mut rng,
            now,
        )?;
        let map = FleetMap::new(&state.scooters);
        let mut monitor = FleetMonitor {
            store,
            storage_key: config.storage_key.clone(),
            zones,
            walk: RandomWalk::new(config.step_degrees, config.heading_jitter),
            status: StatusRefresh::new(config.status_ttl_ms(), config.idle_threshold),
            state,
            map,
            filter: StatusFilter::All,
            rng,
        };
        if !monitor.is_empty() {
            monitor.check_statuses(now);
            monitor.set_filter(StatusFilter::All);
        }
        Ok((monitor, outcome))
    }

    /// an empty fleet shows the default map and runs no timers.
    pub fn is_empty(&self) -> bool {
        self.state.scooters.is_empty()
    }

    pub fn state(&self) -> &FleetState {
        &self.state
    }

    pub fn map(&self) -> &FleetMap {
        &self.map
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.state.scooters
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// moves every active vehicle one step, updates their markers and
    /// persists the whole state.
    pub fn tick_positions(&mut self) -> Result<TickSummary, FleetError> {
        let summary = self
            .walk
            .tick(&mut self.state.scooters, &self.zones, &mut self.rng);
        for vehicle in self.state.scooters.iter() {
            self.map.sync_position(vehicle);
        }
        self.persist()?;
        log::debug!(
            "position tick: {} moved, {} reversed, {} idle",
            summary.moved,
            summary.reversed,
            summary.idle
        );
        Ok(summary)
    }

    /// re-draws statuses when they are stale. markers pick up the new icon
    /// class and the active filter is re-applied so the layer stays consistent.
    pub fn check_statuses(&mut self, now: i64) -> bool {
        if !self.status.refresh_if_due(&mut self.state, &mut self.rng, now) {
            return false;
        }
        for vehicle in self.state.scooters.iter() {
            self.map.sync_status(vehicle);
        }
        apply_filter(&self.state.scooters, &mut self.map.layer, self.filter);
        true
    }

    pub fn set_filter(&mut self, filter: StatusFilter) -> FilterSummary {
        self.filter = filter;
        let summary = apply_filter(&self.state.scooters, &mut self.map.layer, filter);
        log::debug!("filter '{filter}' shows {} scooters", summary.visible);
        summary
    }

    /// recenters the map on the vehicle named by the search input and opens
    /// its popup. unmatched input leaves the map unchanged.
    pub fn search(&mut self, input: &str) -> Option<&Vehicle> {
        let vehicle = search_vehicle(&self.state.scooters, input)?;
        self.map.view.fly_to(vehicle.position(), SEARCH_ZOOM);
        self.map.open_popup(vehicle.id);
        Some(vehicle)
    }

    pub fn persist(&mut self) -> Result<(), FleetError> {
        self.state.persist(&mut self.store, &self.storage_key)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use zeepy_core::model::storage::MemoryStore;

    use super::*;
    use crate::model::{
        layer::{MapView, STATUS_ACTIVE_CLASS, STATUS_IDLE_CLASS},
        state::{RegenerateReason, STORAGE_KEY},
    };

    const NOW: i64 = 1_700_000_000_000;

    fn monitor(count: usize) -> FleetMonitor<MemoryStore> {
        let (monitor, _) = FleetMonitor::init(
            MemoryStore::new(),
            &FleetConfig::default(),
            count,
            StdRng::seed_from_u64(17),
            NOW,
        )
        .expect("test invariant failed: monitor init");
        monitor
    }

    #[test]
    fn test_init_shows_every_vehicle() {
        let m = monitor(8);
        assert!(!m.is_empty());
        assert_eq!(m.map().layer.len(), 8);
        assert_eq!(m.map().view, MapView::fleet_default());
        for v in m.vehicles() {
            let marker = m.map().marker(v.id).expect("marker per vehicle");
            let expected = if v.is_active {
                STATUS_ACTIVE_CLASS
            } else {
                STATUS_IDLE_CLASS
            };
            assert_eq!(marker.icon_class, expected);
            assert_eq!(marker.popup, format!("Scooter #{}", v.id + 1));
        }
    }

    #[test]
    fn test_empty_fleet() {
        let m = monitor(0);
        assert!(m.is_empty());
        assert_eq!(m.map().view, MapView::empty_fleet());
        assert!(m.map().layer.is_empty());
    }

    #[test]
    fn test_tick_persists_state_and_moves_markers() {
        let mut m = monitor(10);
        let summary = m.tick_positions().expect("tick");
        assert_eq!(summary.moved + summary.reversed, m.state().active_count());
        let stored: FleetState = m
            .store()
            .get_json(STORAGE_KEY)
            .expect("read")
            .expect("stored");
        assert_eq!(&stored, m.state());
        for v in m.vehicles() {
            assert_eq!(m.map().marker(v.id).expect("marker").position, v.position());
        }
    }

    #[test]
    fn test_restart_restores_persisted_positions() {
        let mut m = monitor(6);
        m.tick_positions().expect("tick");
        let store = m.store().clone();
        let expected = m.state().clone();
        let (restored, outcome) = FleetMonitor::init(
            store,
            &FleetConfig::default(),
            6,
            StdRng::seed_from_u64(99),
            NOW + 1_000,
        )
        .expect("init");
        assert_eq!(outcome, RestoreOutcome::Restored);
        assert_eq!(restored.state(), &expected);
    }

    #[test]
    fn test_restart_with_new_count_regenerates() {
        let m = monitor(6);
        let (regenerated, outcome) = FleetMonitor::init(
            m.store().clone(),
            &FleetConfig::default(),
            7,
            StdRng::seed_from_u64(99),
            NOW + 1_000,
        )
        .expect("init");
        assert_eq!(
            outcome,
            RestoreOutcome::Regenerated(RegenerateReason::CountMismatch {
                found: 6,
                expected: 7
            })
        );
        assert_eq!(regenerated.vehicles().len(), 7);
    }

    #[test]
    fn test_status_refresh_keeps_filter_consistent() {
        let mut m = monitor(40);
        m.set_filter(StatusFilter::Active);
        assert!(!m.check_statuses(NOW + 1_000));
        assert!(m.check_statuses(NOW + 10 * 60 * 1000 + 1));
        let visible: Vec<usize> = m.map().layer.visible().collect();
        let active: Vec<usize> = m
            .vehicles()
            .iter()
            .filter(|v| v.is_active)
            .map(|v| v.id)
            .collect();
        assert_eq!(visible, active);
        for v in m.vehicles() {
            let class = m.map().marker(v.id).expect("marker").icon_class;
            assert_eq!(class == STATUS_ACTIVE_CLASS, v.is_active);
        }
    }

    #[test]
    fn test_search_recenters_and_opens_popup() {
        let mut m = monitor(5);
        let found = m.search("#3").map(|v| (v.id, v.position()));
        let (id, position) = found.expect("scooter #3 exists");
        assert_eq!(id, 2);
        assert_eq!(m.map().view.center, position);
        assert_eq!(m.map().view.zoom, SEARCH_ZOOM);
        assert!(m.map().marker(2).expect("marker").popup_open);
        assert!(!m.map().marker(1).expect("marker").popup_open);

        let view_before = m.map().view;
        assert!(m.search("#42").is_none());
        assert!(m.search("nonsense").is_none());
        assert_eq!(m.map().view, view_before);
    }

    #[test]
    fn test_snapshot_lists_visible_markers() {
        let mut m = monitor(12);
        m.set_filter(StatusFilter::Idle);
        let snapshot = m.map().snapshot();
        let idle = m.vehicles().iter().filter(|v| !v.is_active).count();
        assert_eq!(snapshot.features.len(), idle);
        for feature in snapshot.features.iter() {
            let status = feature
                .property("status")
                .and_then(|s| s.as_str())
                .expect("status property");
            assert_eq!(status, STATUS_IDLE_CLASS);
        }
        assert!(m.map().snapshot_json().expect("serialize").contains("FeatureCollection"));
    }
}
