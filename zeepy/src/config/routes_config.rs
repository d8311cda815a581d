use std::time::Duration;

use serde::{Deserialize, Serialize};
use zeepy_routes::model::{
    animation::AnimationConfig,
    claim::{cookie_value, CSRF_COOKIE_NAME},
    dataset::RouteSource,
};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RoutesConfig {
    /// GeoJSON FeatureCollection of routes, either a URL or a local file.
    pub dataset: RouteSource,
    /// dashboard origin the claim-profit endpoint is resolved against.
    pub base_url: String,
    /// cookie string carrying the csrf token, as the browser would send it.
    #[serde(default)]
    pub cookie: Option<String>,
    /// scooter ids with a card on the page.
    #[serde(default = "default_cards")]
    pub cards: Vec<String>,
    /// balance shown before any claim succeeds.
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl RoutesConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.cookie
            .as_deref()
            .and_then(|c| cookie_value(c, CSRF_COOKIE_NAME))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.frame_interval_ms == 0 {
            return Err(String::from("frame_interval_ms must be greater than zero"));
        }
        self.animation.validate()
    }
}

fn default_cards() -> Vec<String> {
    vec![String::from("1")]
}

fn default_frame_interval_ms() -> u64 {
    50
}
