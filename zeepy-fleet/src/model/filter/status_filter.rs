use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::{layer::MarkerLayer, state::Vehicle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Idle,
}

impl StatusFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => vehicle.is_active,
            StatusFilter::Idle => !vehicle.is_active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "idle" => Ok(StatusFilter::Idle),
            other => Err(format!(
                "unknown status filter '{other}', expected one of all, active, idle"
            )),
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Idle => "idle",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub visible: usize,
    pub added: usize,
    pub removed: usize,
}

/// scans every vehicle, adding markers that should be visible and are not on
/// the layer, and removing markers that should be hidden and are.
pub fn apply_filter(
    vehicles: &[Vehicle],
    layer: &mut MarkerLayer,
    filter: StatusFilter,
) -> FilterSummary {
    let mut summary = FilterSummary::default();
    for vehicle in vehicles.iter() {
        let should_be_visible = filter.matches(vehicle);
        let on_layer = layer.has_layer(vehicle.id);
        if should_be_visible {
            summary.visible += 1;
            if !on_layer {
                layer.add_layer(vehicle.id);
                summary.added += 1;
            }
        } else if on_layer {
            layer.remove_layer(vehicle.id);
            summary.removed += 1;
        }
    }
    summary
}
