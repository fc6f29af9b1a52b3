//! Wire types for the trip API.
//!
//! Payloads are deliberately lenient: the backend omits fields depending on
//! whether a trip is active, sends ids and numbers as strings or numbers, and
//! adds fields over time.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Messages the backend uses to say "the user has no active trip".
const NO_ACTIVE_TRIP_MESSAGES: &[&str] = &["Нет активных поездок", "No active trips"];

/// Trip statuses reported once a trip has been settled server-side.
const SETTLED_STATUSES: &[&str] = &["None", "COMPLETED"];

/// Snapshot of a trip as reported by `/api/trip_info` or `/api/start_trip`.
///
/// Holds the JSON object exactly as received. Accessors read fields
/// leniently, so a field of an unexpected type reads as missing instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripStatus(Map<String, Value>);

impl TripStatus {
    /// `active_trip` as sent; `true`, `"true"` and `1` all count.
    pub fn is_active(&self) -> bool {
        self.flag("active_trip")
    }

    /// Trip id in textual form; numeric ids are rendered as digits.
    pub fn trip_id(&self) -> Option<String> {
        self.text("trip_id").filter(|id| !id.is_empty())
    }

    pub fn device_code(&self) -> Option<String> {
        self.text("device_code")
    }

    pub fn duration_formatted(&self) -> Option<String> {
        self.text("duration_formatted")
    }

    pub fn battery_level(&self) -> Option<f64> {
        self.number("battery_level")
    }

    pub fn speed_mode(&self) -> Option<String> {
        self.text("speed_mode")
    }

    /// Distance in kilometres.
    pub fn distance(&self) -> Option<f64> {
        self.number("distance")
    }

    /// Running cost in minor currency units.
    pub fn current_cost(&self) -> Option<f64> {
        self.number("current_cost")
    }

    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    pub fn message(&self) -> Option<String> {
        self.text("message")
    }

    fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
            Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            _ => false,
        }
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Why the backend considers the user to have no trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactiveReason {
    /// No trip exists for the user.
    NoActiveTrip,
    /// The trip was just completed and the backend reports a settled status.
    Settled,
}

/// Interpretation of a `/api/trip_info` response.
#[derive(Debug, Clone, PartialEq)]
pub enum TripReport {
    Active(TripStatus),
    Inactive(InactiveReason),
    /// Inactive without a recognized reason; local state is kept.
    Unrecognized,
}

impl TripReport {
    pub fn classify(payload: TripStatus) -> Self {
        if payload.is_active() {
            return TripReport::Active(payload);
        }

        if payload
            .message()
            .is_some_and(|message| NO_ACTIVE_TRIP_MESSAGES.contains(&message.as_str()))
        {
            return TripReport::Inactive(InactiveReason::NoActiveTrip);
        }

        if payload.status().as_deref().is_some_and(is_settled_status) {
            return TripReport::Inactive(InactiveReason::Settled);
        }

        TripReport::Unrecognized
    }
}

fn is_settled_status(status: &str) -> bool {
    SETTLED_STATUSES.contains(&status)
}

/// Prepaid minute balance from `/api/minute_pack`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MinutePack {
    #[serde(default)]
    pub has_minute_pack: bool,
    #[serde(default)]
    pub pack_name: Option<String>,
    #[serde(default)]
    pub formatted_time_left: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default)]
    pub minutes_left: Option<u64>,
    #[serde(default)]
    pub seconds_left: Option<u64>,
}

impl MinutePack {
    /// Remaining time for display: the server's own text, else built from
    /// the raw minute and second counts.
    pub fn time_left(&self) -> Option<String> {
        if let Some(text) = self.formatted_time_left.as_deref().filter(|t| !t.is_empty()) {
            return Some(text.to_string());
        }
        match (self.minutes_left, self.seconds_left) {
            (Some(minutes), Some(seconds)) => Some(format!("{minutes} min {seconds} sec")),
            (Some(minutes), None) => Some(format!("{minutes} min")),
            (None, Some(seconds)) => Some(format!("{seconds} sec")),
            (None, None) => None,
        }
    }
}

/// Decoded `/api/start_trip` response.
///
/// On success the whole payload becomes the local trip status, so `trip`
/// holds every field including `success` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct StartTripResponse {
    pub success: bool,
    pub detail: Option<String>,
    pub message: Option<String>,
    pub trip: TripStatus,
}

impl StartTripResponse {
    /// Fails only when the body is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let trip: TripStatus = serde_json::from_value(value)?;
        Ok(Self {
            success: trip.flag("success"),
            detail: trip.text("detail"),
            message: trip.message(),
            trip,
        })
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.message.as_deref())
    }
}

/// Decoded `/api/end_trip` response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EndTripResponse {
    #[serde(default)]
    pub success: bool,
    /// `Some(None)` when the backend sent an explicit `null` status.
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<String>>,
    #[serde(default)]
    pub duration_formatted: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    /// Final cost in minor currency units.
    #[serde(default)]
    pub final_cost: Option<f64>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EndTripResponse {
    /// Stand-in for a body that could not be decoded.
    pub fn malformed() -> Self {
        Self {
            success: false,
            detail: Some("Malformed server response".to_string()),
            ..Self::default()
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.message.as_deref())
    }

    /// A rejected completion whose status shows the trip is already over.
    pub fn reports_settled_trip(&self) -> bool {
        if self.success {
            return false;
        }
        match &self.status {
            Some(None) => true,
            Some(Some(status)) => is_settled_status(status),
            None => false,
        }
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary {
            duration_formatted: self.duration_formatted.clone().unwrap_or_default(),
            distance: self.distance.unwrap_or_default(),
            final_cost: self.final_cost.unwrap_or_default(),
        }
    }
}

/// Totals of a completed trip, shown to the user once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripSummary {
    pub duration_formatted: String,
    pub distance: f64,
    pub final_cost: f64,
}

/// Body of `/api/refresh_tokens`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RefreshTokensResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepts strings and numbers, yielding the textual form.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// Distinguishes an explicit `null` from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
