// --- File: crates/littlelemon_booking/src/logic.rs ---
use chrono::{Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use little_lemon_common::services::{SharedAvailabilityService, SharedReservationService};
use little_lemon_common::ReservationRequest;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Time zone used for "today" when none is configured.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Chicago;

/// Dinner service, Monday to Friday.
pub const WEEKDAY_SLOTS: [&str; 6] = ["17:00", "18:00", "19:00", "20:00", "21:00", "22:00"];

/// Lunch and dinner service on Saturday and Sunday.
pub const WEEKEND_SLOTS: [&str; 12] = [
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "17:00", "18:00", "19:00", "20:00",
    "21:00", "22:00",
];

pub const REJECTED_MESSAGE: &str = "Failed to submit booking. Please try again.";
pub const ERRORED_MESSAGE: &str =
    "An error occurred while submitting your booking. Please try again.";

// --- Data Structures ---

/// Ordered time-of-day strings offered for one date.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotList(Vec<String>);

impl SlotList {
    pub fn new(slots: Vec<String>) -> Self {
        Self(slots)
    }

    pub fn from_static(slots: &[&str]) -> Self {
        Self(slots.iter().map(|slot| slot.to_string()).collect())
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.0.iter().any(|offered| offered == slot)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for SlotList {
    fn from(slots: Vec<String>) -> Self {
        Self(slots)
    }
}

impl<'a> IntoIterator for &'a SlotList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of one submission attempt.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    /// User-facing failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Raw collaborator error, for logs only.
    #[serde(skip)]
    pub diagnostic: Option<String>,
}

impl SubmissionResult {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
            diagnostic: None,
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: Some(REJECTED_MESSAGE.to_string()),
            diagnostic: None,
        }
    }

    pub fn errored(diagnostic: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(ERRORED_MESSAGE.to_string()),
            diagnostic: Some(diagnostic.into()),
        }
    }
}

// --- Availability Logic ---

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Slots offered when no availability service is configured or it fails.
pub fn default_slots(date: NaiveDate) -> SlotList {
    if is_weekend(date) {
        SlotList::from_static(&WEEKEND_SLOTS)
    } else {
        SlotList::from_static(&WEEKDAY_SLOTS)
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Resolve a configured IANA zone name, falling back to [`DEFAULT_TIME_ZONE`].
pub fn resolve_time_zone(name: Option<&str>) -> Tz {
    name.and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(DEFAULT_TIME_ZONE)
}

/// Current calendar date at the restaurant.
pub fn today_in(time_zone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&time_zone).date_naive()
}

/// Resolves a date to the list of bookable slots.
#[derive(Clone, Default)]
pub struct AvailabilityProvider {
    source: Option<SharedAvailabilityService>,
}

impl AvailabilityProvider {
    pub fn new(source: Option<SharedAvailabilityService>) -> Self {
        Self { source }
    }

    /// Provider that always answers from the weekday/weekend table.
    pub fn fallback_only() -> Self {
        Self { source: None }
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Slots for `date`. Never fails: a missing or failing source yields [`default_slots`].
    pub async fn get_slots(&self, date: NaiveDate) -> SlotList {
        let Some(source) = &self.source else {
            debug!(%date, "No availability service configured, using default slots");
            return default_slots(date);
        };

        match source.fetch_slots(date).await {
            Ok(slots) => {
                debug!(%date, count = slots.len(), "Slots from availability service");
                SlotList::new(slots)
            }
            Err(e) => {
                warn!(%date, error = %e, "Availability lookup failed, using default slots");
                default_slots(date)
            }
        }
    }
}

// --- Submission Logic ---

/// Hands completed reservations to the reservation service, if any.
#[derive(Clone, Default)]
pub struct SubmissionGateway {
    sink: Option<SharedReservationService>,
}

impl SubmissionGateway {
    pub fn new(sink: Option<SharedReservationService>) -> Self {
        Self { sink }
    }

    /// Gateway that accepts every reservation locally.
    pub fn local_only() -> Self {
        Self { sink: None }
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Submit one reservation. Collaborator errors are logged and folded into the result.
    pub async fn submit(&self, request: &ReservationRequest) -> SubmissionResult {
        let submission_id = Uuid::new_v4();
        let span = info_span!(
            "submission",
            %submission_id,
            date = %request.date,
            time = %request.time,
            guests = request.guests
        );

        async move {
            let Some(sink) = &self.sink else {
                info!(
                    occasion = %request.occasion,
                    seating = %request.seating,
                    "No reservation service configured, booking accepted locally"
                );
                return SubmissionResult::accepted();
            };

            match sink.submit_reservation(request.clone()).await {
                Ok(true) => {
                    info!("Reservation accepted");
                    SubmissionResult::accepted()
                }
                Ok(false) => {
                    warn!("Reservation rejected by reservation service");
                    SubmissionResult::rejected()
                }
                Err(e) => {
                    error!(error = %e, "Reservation service failed");
                    SubmissionResult::errored(e.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }
}
