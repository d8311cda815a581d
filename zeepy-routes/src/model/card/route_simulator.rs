use std::{collections::BTreeMap, time::Instant};

use rand::rngs::StdRng;

use super::{
    BalanceDisplay, CardDisplay, SimulationError, SimulationState, CLAIM_LABEL, PROCESSING_LABEL,
};
use crate::model::{
    animation::{AnimationConfig, RouteAnimation},
    claim::{ClaimError, ClaimRequest, ProfitClaimant},
    dataset::RouteCatalog,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    /// no completed simulation exists for the card.
    Skipped,
    Credited { new_balance: f64 },
}

#[derive(Debug, Default)]
struct Card {
    display: CardDisplay,
    simulation: Option<SimulationState>,
}

/// manages the simulation of every scooter card on the page. cards are keyed by
/// scooter id and share one route catalog.
pub struct RouteSimulator {
    catalog: RouteCatalog,
    config: AnimationConfig,
    cards: BTreeMap<String, Card>,
}

impl RouteSimulator {
    pub fn new(catalog: RouteCatalog, config: AnimationConfig) -> RouteSimulator {
        RouteSimulator {
            catalog,
            config,
            cards: BTreeMap::new(),
        }
    }

    /// registers the cards and puts each of them in its initial state.
    pub fn initialize<I, S>(&mut self, scooter_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in scooter_ids {
            let id = id.into();
            self.cards.entry(id.clone()).or_default();
            self.reset(&id);
        }
        log::debug!("initialized {} scooter cards", self.cards.len());
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    pub fn display(&self, scooter_id: &str) -> Option<&CardDisplay> {
        self.cards.get(scooter_id).map(|c| &c.display)
    }

    pub fn simulation(&self, scooter_id: &str) -> Option<&SimulationState> {
        self.cards.get(scooter_id)?.simulation.as_ref()
    }

    pub fn is_running(&self, scooter_id: &str) -> bool {
        self.simulation(scooter_id)
            .map(|s| s.is_running)
            .unwrap_or(false)
    }

    /// true while any card still needs animation frames.
    pub fn any_running(&self) -> bool {
        self.cards
            .values()
            .any(|c| c.simulation.as_ref().is_some_and(|s| s.is_running))
    }

    /// starts a simulation on a random route and renders its first frame.
    pub fn start(
        &mut self,
        scooter_id: &str,
        rng: &mut StdRng,
        now: Instant,
    ) -> Result<StartOutcome, SimulationError> {
        let card = self
            .cards
            .get_mut(scooter_id)
            .ok_or_else(|| SimulationError::UnknownCard(scooter_id.to_string()))?;
        if card.simulation.as_ref().is_some_and(|s| s.is_running) {
            log::warn!("simulation for scooter {scooter_id} is already running");
            return Ok(StartOutcome::AlreadyRunning);
        }

        let route = self
            .catalog
            .random_route(rng)
            .ok_or_else(|| SimulationError::NoRouteAvailable(scooter_id.to_string()))?
            .clone();
        let animation = RouteAnimation::new(route, &self.config);
        log::info!(
            "scooter {scooter_id} starts route {} ({:.2} km, {} vertices, profit {:.2})",
            animation.route().index,
            animation.totals().distance_km(),
            animation.route().len(),
            animation.totals().profit
        );
        card.display.begin(&animation);
        card.simulation = Some(SimulationState::new(animation, now));

        self.animate(scooter_id, now)?;
        Ok(StartOutcome::Started)
    }

    /// renders one animation frame. returns true when another frame is needed.
    /// a card without a running simulation needs no frames.
    pub fn animate(&mut self, scooter_id: &str, now: Instant) -> Result<bool, SimulationError> {
        let card = self
            .cards
            .get_mut(scooter_id)
            .ok_or_else(|| SimulationError::UnknownCard(scooter_id.to_string()))?;
        let Some(simulation) = card.simulation.as_mut().filter(|s| s.is_running) else {
            return Ok(false);
        };

        let frame = simulation.frame_at(now);
        card.display.render_frame(&simulation.animation, &frame);

        if frame.progress.is_complete() {
            simulation.is_running = false;
            simulation.frame_scheduled = false;
            card.display.set_claim_button(true, CLAIM_LABEL);
            log::info!(
                "scooter {scooter_id} finished its route, {:.2} ready to claim",
                simulation.total_profit()
            );
            Ok(false)
        } else {
            simulation.frame_scheduled = true;
            Ok(true)
        }
    }

    /// cancels any pending frame, drops the map and simulation, and restores
    /// the card's placeholders. unknown cards are ignored.
    pub fn reset(&mut self, scooter_id: &str) {
        if let Some(card) = self.cards.get_mut(scooter_id) {
            if let Some(simulation) = card.simulation.take() {
                if simulation.frame_scheduled {
                    log::debug!("cancelled pending frame for scooter {scooter_id}");
                }
            }
            card.display = CardDisplay::idle();
        }
    }

    /// locks the claim control and builds the claim for a completed simulation.
    /// returns None when there is nothing to claim.
    pub fn begin_claim(&mut self, scooter_id: &str) -> Option<ClaimRequest> {
        let card = self.cards.get_mut(scooter_id)?;
        let simulation = card.simulation.as_ref().filter(|s| !s.is_running)?;
        if !card.display.claim_button.enabled {
            log::debug!("claim for scooter {scooter_id} is already in flight");
            return None;
        }
        let request = ClaimRequest {
            scooter_id: scooter_id.to_string(),
            profit_amount: simulation.total_profit(),
        };
        card.display.set_claim_button(false, PROCESSING_LABEL);
        Some(request)
    }

    /// applies a claim result. success credits the balance and resets the card,
    /// failure re-enables the claim control with its original label.
    pub fn complete_claim(
        &mut self,
        scooter_id: &str,
        result: Result<f64, ClaimError>,
        balance: &mut BalanceDisplay,
    ) -> Result<ClaimOutcome, ClaimError> {
        match result {
            Ok(new_balance) => {
                balance.set(new_balance);
                self.reset(scooter_id);
                log::info!("scooter {scooter_id} claim credited, balance {}", balance.text());
                Ok(ClaimOutcome::Credited { new_balance })
            }
            Err(e) => {
                log::error!("claiming profit for scooter {scooter_id} failed: {e}");
                if let Some(card) = self.cards.get_mut(scooter_id) {
                    card.display.set_claim_button(true, CLAIM_LABEL);
                }
                Err(e)
            }
        }
    }

    /// submits the profit of a completed simulation. no retry is attempted.
    pub async fn claim<C: ProfitClaimant>(
        &mut self,
        scooter_id: &str,
        claimant: &C,
        balance: &mut BalanceDisplay,
    ) -> Result<ClaimOutcome, ClaimError> {
        let Some(request) = self.begin_claim(scooter_id) else {
            return Ok(ClaimOutcome::Skipped);
        };
        let result = claimant
            .claim(&request)
            .await
            .map(|response| response.new_balance);
        self.complete_claim(scooter_id, result, balance)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, time::Duration};

    use rand::prelude::*;
    use zeepy_core::util::geo_utils::lat_lon;

    use super::*;
    use crate::model::{
        card::{EN_ROUTE_LABEL, PROCESSING_LABEL},
        claim::ClaimResponse,
        dataset::Route,
    };

    struct FakeClaimant {
        response: Result<ClaimResponse, ClaimError>,
        requests: RefCell<Vec<ClaimRequest>>,
    }

    impl FakeClaimant {
        fn new(response: Result<ClaimResponse, ClaimError>) -> FakeClaimant {
            FakeClaimant {
                response,
                requests: RefCell::new(vec![]),
            }
        }
    }

    impl ProfitClaimant for FakeClaimant {
        async fn claim(&self, request: &ClaimRequest) -> Result<ClaimResponse, ClaimError> {
            self.requests.borrow_mut().push(request.clone());
            self.response.clone()
        }
    }

    fn simulator() -> RouteSimulator {
        let path = (0..11)
            .map(|i| lat_lon(31.2 + i as f64 * 0.002, 121.5))
            .collect();
        let route = Route::new(0, path).expect("test invariant failed: route should be valid");
        let mut sim = RouteSimulator::new(RouteCatalog::new(vec![route]), AnimationConfig::default());
        sim.initialize(["1", "2"]);
        sim
    }

    fn completed(sim: &mut RouteSimulator, id: &str) -> Instant {
        let mut rng = StdRng::seed_from_u64(1);
        let t0 = Instant::now();
        sim.start(id, &mut rng, t0).expect("start");
        let done = t0 + Duration::from_secs(30);
        assert!(!sim.animate(id, done).expect("animate"));
        done
    }

    #[test]
    fn test_initialize_resets_cards() {
        let sim = simulator();
        let display = sim.display("1").expect("card 1 registered");
        assert_eq!(*display, CardDisplay::idle());
        assert_eq!(display.distance_text, "-- km");
        assert_eq!(display.duration_text, "-- min");
        assert_eq!(display.profit_text, "€ --");
        assert!(!display.claim_button.enabled);
        assert!(display.start_visible);
    }

    #[test]
    fn test_start_and_animate_to_completion() {
        let mut sim = simulator();
        let mut rng = StdRng::seed_from_u64(1);
        let t0 = Instant::now();
        assert_eq!(sim.start("1", &mut rng, t0), Ok(StartOutcome::Started));

        let display = sim.display("1").expect("card").clone();
        assert!(!display.start_visible);
        assert_eq!(display.claim_button.label, EN_ROUTE_LABEL);
        assert!(!display.claim_button.enabled);
        assert_eq!(display.progress_percent, 0.0);
        let map = display.map.expect("map is created on start");
        assert_eq!(map.trail.len(), 1);

        assert!(sim.animate("1", t0 + Duration::from_secs(15)).expect("animate"));
        let halfway = sim.display("1").expect("card").clone();
        assert_eq!(halfway.progress_percent, 50.0);
        assert_eq!(halfway.map.expect("map").trail.len(), 6);

        assert!(!sim.animate("1", t0 + Duration::from_secs(31)).expect("animate"));
        let done = sim.display("1").expect("card");
        assert_eq!(done.progress_percent, 100.0);
        assert!(done.claim_button.enabled);
        assert_eq!(done.claim_button.label, CLAIM_LABEL);
        assert!(!sim.is_running("1"));
        assert!(!sim.any_running());
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut sim = simulator();
        let mut rng = StdRng::seed_from_u64(1);
        let t0 = Instant::now();
        sim.start("1", &mut rng, t0).expect("start");
        let again = sim.start("1", &mut rng, t0 + Duration::from_secs(5));
        assert_eq!(again, Ok(StartOutcome::AlreadyRunning));
        let state = sim.simulation("1").expect("still simulating");
        assert_eq!(state.started_at, t0);
    }

    #[test]
    fn test_start_errors() {
        let mut sim = simulator();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            sim.start("99", &mut rng, Instant::now()),
            Err(SimulationError::UnknownCard("99".to_string()))
        );
        let mut empty = RouteSimulator::new(RouteCatalog::new(vec![]), AnimationConfig::default());
        empty.initialize(["1"]);
        assert_eq!(
            empty.start("1", &mut rng, Instant::now()),
            Err(SimulationError::NoRouteAvailable("1".to_string()))
        );
        assert!(empty.display("1").expect("card").start_visible);
    }

    #[test]
    fn test_displayed_stats_scale_with_progress() {
        let mut sim = simulator();
        let mut rng = StdRng::seed_from_u64(3);
        let t0 = Instant::now();
        sim.start("2", &mut rng, t0).expect("start");
        let totals = *sim.simulation("2").expect("sim").animation.totals();
        for secs in [0u64, 6, 12, 18, 24] {
            sim.animate("2", t0 + Duration::from_secs(secs)).expect("animate");
            let p = secs as f64 / 30.0;
            let display = sim.display("2").expect("card");
            let km = parse_stat(&display.distance_text, " km");
            assert!((km - totals.distance_km() * p).abs() <= 0.05 + 1e-9);
            let profit = parse_stat(display.profit_text.trim_start_matches("€ "), "");
            assert!((profit - totals.profit * p).abs() <= 0.005 + 1e-9);
            let minutes = parse_stat(&display.duration_text, " min");
            assert!((minutes - (totals.duration_seconds() * p / 60.0)).abs() < 1.0 + 1e-9);
        }
    }

    fn parse_stat(text: &str, suffix: &str) -> f64 {
        text.trim_end_matches(suffix)
            .parse()
            .expect("test invariant failed: stat text should be numeric")
    }

    #[test]
    fn test_reset_cancels_simulation() {
        let mut sim = simulator();
        let mut rng = StdRng::seed_from_u64(1);
        let t0 = Instant::now();
        sim.start("1", &mut rng, t0).expect("start");
        sim.reset("1");
        assert!(sim.simulation("1").is_none());
        assert_eq!(*sim.display("1").expect("card"), CardDisplay::idle());
        assert!(!sim.animate("1", t0 + Duration::from_secs(1)).expect("animate"));
    }

    #[test]
    fn test_begin_claim_requires_completed_simulation() {
        let mut sim = simulator();
        assert!(sim.begin_claim("1").is_none());
        let mut rng = StdRng::seed_from_u64(1);
        sim.start("1", &mut rng, Instant::now()).expect("start");
        assert!(sim.begin_claim("1").is_none());
    }

    #[test]
    fn test_claim_in_flight_disables_control() {
        let mut sim = simulator();
        completed(&mut sim, "1");
        let expected_profit = sim.simulation("1").expect("sim").total_profit();
        let request = sim.begin_claim("1").expect("claimable");
        assert_eq!(request.scooter_id, "1");
        assert_eq!(request.profit_amount, expected_profit);
        let button = &sim.display("1").expect("card").claim_button;
        assert!(!button.enabled);
        assert_eq!(button.label, PROCESSING_LABEL);
        // a second click while in flight produces no request
        assert!(sim.begin_claim("1").is_none());
    }

    #[tokio::test]
    async fn test_claim_success_credits_balance_and_resets() {
        let mut sim = simulator();
        completed(&mut sim, "1");
        let claimant = FakeClaimant::new(Ok(ClaimResponse { new_balance: 42.5 }));
        let mut balance = BalanceDisplay::new(Some(40.0));
        let outcome = sim.claim("1", &claimant, &mut balance).await;
        assert_eq!(outcome, Ok(ClaimOutcome::Credited { new_balance: 42.5 }));
        assert_eq!(balance.text(), "$42.50");
        assert_eq!(*sim.display("1").expect("card"), CardDisplay::idle());
        assert_eq!(claimant.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_claim_failure_restores_control() {
        let mut sim = simulator();
        completed(&mut sim, "1");
        let rejection = ClaimError::Rejected {
            status: 400,
            message: "already claimed".to_string(),
        };
        let claimant = FakeClaimant::new(Err(rejection.clone()));
        let mut balance = BalanceDisplay::new(Some(40.0));
        let outcome = sim.claim("1", &claimant, &mut balance).await;
        assert_eq!(outcome, Err(rejection));
        assert_eq!(outcome.unwrap_err().to_string(), "already claimed");

        let display = sim.display("1").expect("card");
        assert!(display.claim_button.enabled);
        assert_eq!(display.claim_button.label, CLAIM_LABEL);
        assert!(sim.simulation("1").is_some());
        assert_eq!(balance.text(), "$40.00");
    }

    #[tokio::test]
    async fn test_claim_without_simulation_is_skipped() {
        let mut sim = simulator();
        let claimant = FakeClaimant::new(Ok(ClaimResponse { new_balance: 1.0 }));
        let mut balance = BalanceDisplay::default();
        let outcome = sim.claim("2", &claimant, &mut balance).await;
        assert_eq!(outcome, Ok(ClaimOutcome::Skipped));
        assert!(claimant.requests.borrow().is_empty());
        assert_eq!(balance.text(), "$--");
    }
}
