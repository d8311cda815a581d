use std::time::Instant;

use rand::rngs::StdRng;
use tokio::time::MissedTickBehavior;
use zeepy_routes::model::{
    card::{BalanceDisplay, ClaimOutcome, RouteSimulator},
    claim::HttpClaimClient,
    dataset::RouteCatalog,
};

use super::{
    render::{alert, CardBars, DATASET_ALERT},
    ZeepyAppError,
};
use crate::config::RoutesConfig;

#[derive(Debug, Clone, Default)]
pub struct RoutesRunOptions {
    /// claim each card's profit once its route completes.
    pub claim: bool,
}

/// loads the route dataset, animates one random route per card until every
/// simulation completes, and optionally claims the earned profit.
pub async fn run(
    config: &RoutesConfig,
    options: &RoutesRunOptions,
    mut rng: StdRng,
) -> Result<(), ZeepyAppError> {
    config.validate().map_err(ZeepyAppError::InvalidUserInput)?;
    let client = reqwest::Client::new();

    let catalog = match RouteCatalog::load(&config.dataset, &client).await {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("error loading route dataset: {e}");
            alert(DATASET_ALERT);
            return Err(e.into());
        }
    };

    let mut simulator = RouteSimulator::new(catalog, config.animation.clone());
    simulator.initialize(config.cards.iter().cloned());
    let card_ids: Vec<String> = simulator.card_ids().map(String::from).collect();
    let mut bars = CardBars::new(card_ids.iter().map(String::as_str))?;

    let now = Instant::now();
    for id in card_ids.iter() {
        if let Err(e) = simulator.start(id, &mut rng, now) {
            alert(&e.to_string());
        }
        if let Some(display) = simulator.display(id) {
            bars.draw(id, display)?;
        }
    }

    let mut frames = tokio::time::interval(config.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    while simulator.any_running() {
        frames.tick().await;
        let now = Instant::now();
        for id in card_ids.iter() {
            if !simulator.is_running(id) {
                continue;
            }
            simulator.animate(id, now)?;
            if let Some(display) = simulator.display(id) {
                bars.draw(id, display)?;
            }
        }
    }
    bars.finish();

    let mut balance = BalanceDisplay::new(config.balance);
    if options.claim {
        let claimant = HttpClaimClient::new(client, &config.base_url, config.csrf_token())?;
        log::info!("claiming profit at {}", claimant.endpoint());
        for id in card_ids.iter() {
            match simulator.claim(id, &claimant, &mut balance).await {
                Ok(ClaimOutcome::Credited { new_balance }) => {
                    println!("scooter {id}: claimed, balance {new_balance:.2}");
                }
                Ok(ClaimOutcome::Skipped) => {
                    log::debug!("scooter {id}: nothing to claim");
                }
                Err(e) => alert(&format!("Error: {e}")),
            }
        }
    } else {
        for id in card_ids.iter() {
            if let Some(display) = simulator.display(id) {
                println!(
                    "scooter {id}: {} | {} | {}",
                    display.distance_text, display.duration_text, display.profit_text
                );
            }
        }
    }
    println!("balance: {}", balance.text());
    Ok(())
}
