use kdam::{term, Bar, BarExt};
use zeepy_routes::model::card::CardDisplay;

use super::ZeepyAppError;

pub const DATASET_ALERT: &str = "Failed to load simulation data. Please refresh the page.";

/// surfaces a message to the user the way the dashboard raises an alert.
pub fn alert(message: &str) {
    log::error!("{message}");
    eprintln!("alert: {message}");
}

/// one terminal progress bar per scooter card, stacked in card order.
pub struct CardBars {
    bars: Vec<(String, Bar)>,
}

impl CardBars {
    pub fn new<'a, I>(scooter_ids: I) -> Result<CardBars, ZeepyAppError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        term::init(false);
        let bars = scooter_ids
            .into_iter()
            .enumerate()
            .map(|(position, id)| {
                let bar = Bar::builder()
                    .desc(format!("scooter {id}"))
                    .total(100)
                    .unit("%")
                    .position(position as u16)
                    .build()
                    .map_err(|e| {
                        ZeepyAppError::Render(format!("failure building progress bar: {e}"))
                    })?;
                Ok((id.to_string(), bar))
            })
            .collect::<Result<Vec<_>, ZeepyAppError>>()?;
        Ok(CardBars { bars })
    }

    /// draws the card's progress and statistics.
    pub fn draw(&mut self, scooter_id: &str, display: &CardDisplay) -> Result<(), ZeepyAppError> {
        let Some((_, bar)) = self.bars.iter_mut().find(|(id, _)| id == scooter_id) else {
            return Ok(());
        };
        bar.set_postfix(format!(
            "{} | {} | {} | {}",
            display.distance_text,
            display.duration_text,
            display.profit_text,
            display.claim_button.label
        ));
        bar.update_to(display.progress_percent.floor() as usize)
            .map_err(|e| ZeepyAppError::Render(e.to_string()))?;
        Ok(())
    }

    /// moves the cursor below the stacked bars.
    pub fn finish(&self) {
        for _ in self.bars.iter() {
            eprintln!();
        }
    }
}
