//! Presentation model for the trip screen.
//!
//! Turns [`TripState`] into plain rows and labels. Hosts only decide how to
//! draw them.

use crate::api::{MinutePack, TripStatus, TripSummary};
use crate::host::Popup;
use crate::trip::{TripPhase, TripState};

const MISSING: &str = "—";

/// Minute-pack panel at the top of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinutePackPanel {
    Available {
        name: String,
        time_left: String,
        duration: String,
    },
    Unavailable,
}

impl MinutePackPanel {
    pub fn from_pack(pack: &MinutePack) -> Self {
        if !pack.has_minute_pack {
            return Self::Unavailable;
        }
        Self::Available {
            name: pack.pack_name.clone().unwrap_or_default(),
            time_left: pack.time_left().unwrap_or_default(),
            duration: pack.duration.clone().unwrap_or_default(),
        }
    }
}

/// One label/value row of the active trip card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Main area: either the running trip or the code entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    ActiveTrip {
        rows: Vec<InfoRow>,
    },
    CodeEntry {
        code: String,
        submit_label: &'static str,
        can_submit: bool,
        input_locked: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripView {
    /// `None` until the first minute-pack poll succeeds.
    pub minute_pack: Option<MinutePackPanel>,
    pub title: &'static str,
    pub body: ViewBody,
    pub error: Option<String>,
}

impl TripView {
    pub fn from_state(state: &TripState, currency: &str) -> Self {
        let minute_pack = state.minute_pack.as_ref().map(MinutePackPanel::from_pack);

        let (title, body) = match &state.phase {
            TripPhase::Active(trip) => (
                "Trip in progress",
                ViewBody::ActiveTrip {
                    rows: trip_rows(trip, currency),
                },
            ),
            TripPhase::Idle => (
                "Start a trip",
                ViewBody::CodeEntry {
                    code: state.code_input.clone(),
                    submit_label: if state.is_busy() { "Starting..." } else { "Go!" },
                    can_submit: state.can_submit_code(),
                    input_locked: state.is_busy(),
                },
            ),
        };

        Self {
            minute_pack,
            title,
            body,
            error: state.error.clone(),
        }
    }
}

fn trip_rows(trip: &TripStatus, currency: &str) -> Vec<InfoRow> {
    let mut rows = vec![
        InfoRow {
            label: "Scooter",
            value: text_or_missing(trip.device_code().as_deref()),
        },
        InfoRow {
            label: "Time",
            value: text_or_missing(trip.duration_formatted().as_deref()),
        },
        InfoRow {
            label: "Battery",
            value: trip
                .battery_level()
                .map(|level| format!("{}%", level))
                .unwrap_or_else(|| MISSING.to_string()),
        },
        InfoRow {
            label: "Speed mode",
            value: text_or_missing(trip.speed_mode().as_deref()),
        },
    ];

    if let Some(distance) = trip.distance().filter(|d| *d > 0.0) {
        rows.push(InfoRow {
            label: "Distance",
            value: format!("{} km", distance),
        });
    }

    if let Some(cost) = trip.current_cost().filter(|c| *c > 0.0) {
        rows.push(InfoRow {
            label: "Current cost",
            value: format_cost(cost, currency),
        });
    }

    rows
}

fn text_or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

/// Minor currency units to major units, shortest decimal form
/// (`15000` → `150`, `1250` → `12.5`).
pub fn format_amount(minor: f64) -> String {
    format!("{}", minor / 100.0)
}

pub fn format_cost(minor: f64, currency: &str) -> String {
    format!("{} {}", format_amount(minor), currency)
}

/// Popup shown once a trip has been completed.
pub fn completion_popup(summary: &TripSummary, currency: &str) -> Popup {
    Popup {
        title: "Trip finished".to_string(),
        message: format!(
            "Duration: {}\nDistance: {} km\nCost: {}",
            summary.duration_formatted,
            summary.distance,
            format_cost(summary.final_cost, currency)
        ),
    }
}
