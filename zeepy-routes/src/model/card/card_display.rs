use geo::Coord;

use crate::model::animation::{AnimationFrame, RouteAnimation};

pub const CLAIM_LABEL: &str = "Claim profit";
pub const EN_ROUTE_LABEL: &str = "En route...";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const CARD_MAP_ZOOM: u8 = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimButton {
    pub enabled: bool,
    pub label: String,
}

/// per-card map: the marker, the polyline drawn behind it, and the panned center.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMap {
    pub center: Coord<f64>,
    pub zoom: u8,
    pub marker: Coord<f64>,
    pub trail: Vec<Coord<f64>>,
}

/// everything a scooter card renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDisplay {
    pub distance_text: String,
    pub duration_text: String,
    pub profit_text: String,
    pub progress_percent: f64,
    pub claim_button: ClaimButton,
    pub start_visible: bool,
    pub map: Option<CardMap>,
}

impl Default for CardDisplay {
    fn default() -> Self {
        CardDisplay::idle()
    }
}

impl CardDisplay {
    /// the state a card returns to on reset.
    pub fn idle() -> CardDisplay {
        CardDisplay {
            distance_text: String::from("-- km"),
            duration_text: String::from("-- min"),
            profit_text: String::from("€ --"),
            progress_percent: 0.0,
            claim_button: ClaimButton {
                enabled: false,
                label: CLAIM_LABEL.to_string(),
            },
            start_visible: true,
            map: None,
        }
    }

    /// hides the start control, locks the claim control and opens the map at
    /// the first vertex of the route.
    pub fn begin(&mut self, animation: &RouteAnimation) {
        let first = animation.route().first();
        self.start_visible = false;
        self.claim_button = ClaimButton {
            enabled: false,
            label: EN_ROUTE_LABEL.to_string(),
        };
        self.map = Some(CardMap {
            center: first,
            zoom: CARD_MAP_ZOOM,
            marker: first,
            trail: vec![],
        });
    }

    pub fn render_frame(&mut self, animation: &RouteAnimation, frame: &AnimationFrame) {
        let covered = &frame.covered;
        self.distance_text = format!("{:.1} km", covered.distance_km());
        self.duration_text = format!("{} min", covered.duration_whole_minutes());
        self.profit_text = format!("€ {:.2}", covered.profit);
        self.progress_percent = frame.progress.percent();
        if let Some(map) = self.map.as_mut() {
            map.marker = frame.position;
            map.center = frame.position;
            map.trail = animation.trail(frame).to_vec();
        }
    }

    pub fn set_claim_button(&mut self, enabled: bool, label: &str) {
        self.claim_button = ClaimButton {
            enabled,
            label: label.to_string(),
        };
    }
}
