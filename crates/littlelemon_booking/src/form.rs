// --- File: crates/littlelemon_booking/src/form.rs ---
//! In-progress reservation form: field values, the offered slot list and the
//! submission state machine (`Idle -> Submitting -> {Confirmed | Failed}`).

use chrono::NaiveDate;
use little_lemon_common::{Occasion, ReservationRequest, Seating, MAX_GUESTS, MIN_GUESTS};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::error::BookingError;
use crate::logic::{parse_date, SlotList, SubmissionResult};

pub const DATE_REQUIRED: &str = "Please select a date";
pub const DATE_INVALID: &str = "Please enter a valid date";
pub const DATE_IN_PAST: &str = "Please select today or a later date";
pub const TIME_REQUIRED: &str = "Please select a time";
pub const TIME_UNAVAILABLE: &str = "Please select an available time";
pub const GUESTS_REQUIRED: &str = "Please select number of guests";
pub const GUESTS_NOT_WHOLE: &str = "Number of guests must be a whole number";
pub const GUESTS_OUT_OF_RANGE: &str = "Number of guests must be between 1 and 10";
pub const OCCASION_INVALID: &str = "Please select a valid occasion";
pub const SEATING_INVALID: &str = "Please select a valid seating preference";

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Time,
    Guests,
    Occasion,
    Seating,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Guests => "guests",
            Field::Occasion => "occasion",
            Field::Seating => "seating",
        }
    }
}

/// Per-field validation messages, in form order.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}

/// Raw field values as typed by the user. Nothing here is validated yet.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-14"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "17:00"))]
    pub time: String,
    #[serde(deserialize_with = "string_or_number")]
    #[cfg_attr(feature = "openapi", schema(example = "4"))]
    pub guests: String,
    pub occasion: String,
    pub seating: String,
}

// A number input may arrive as `4` or `"4"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Whole(i64),
        Fractional(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Whole(n)) => n.to_string(),
        Some(Raw::Fractional(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Confirmed,
    Failed { message: String },
}

/// Identifies one date change. Only the newest ticket may replace the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTicket {
    pub date: NaiveDate,
    generation: u64,
}

/// Check a guest count against the bookable range.
pub fn validate_guest_count(guests: i64) -> Result<u8, &'static str> {
    if (i64::from(MIN_GUESTS)..=i64::from(MAX_GUESTS)).contains(&guests) {
        Ok(guests as u8)
    } else {
        Err(GUESTS_OUT_OF_RANGE)
    }
}

fn validate_guests(raw: &str) -> Result<u8, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GUESTS_REQUIRED);
    }
    if let Ok(whole) = raw.parse::<i64>() {
        return validate_guest_count(whole);
    }
    // "4.0" and "1e1" are whole numbers too. The cast saturates, so huge
    // values still land outside the range.
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 => validate_guest_count(n as i64),
        _ => Err(GUESTS_NOT_WHOLE),
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    values: FormValues,
    slots: SlotList,
    generation: u64,
    min_date: Option<NaiveDate>,
    status: SubmissionStatus,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form that rejects dates before `min_date`.
    pub fn with_min_date(min_date: NaiveDate) -> Self {
        Self {
            min_date: Some(min_date),
            ..Self::default()
        }
    }

    pub fn set_min_date(&mut self, min_date: NaiveDate) {
        self.min_date = Some(min_date);
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn slots(&self) -> &SlotList {
        &self.slots
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    // --- Slot list ---

    /// Install the slot list computed when the view is first shown.
    pub fn initialize(&mut self, slots: SlotList) {
        debug!(count = slots.len(), "Initializing slot list");
        self.replace_slots(slots);
    }

    /// Install the slot list for a newly selected date.
    pub fn update(&mut self, slots: SlotList) {
        debug!(count = slots.len(), "Updating slot list after date change");
        self.replace_slots(slots);
    }

    fn replace_slots(&mut self, slots: SlotList) {
        self.slots = slots;
    }

    /// Record a new date and hand out the ticket for its slot lookup.
    ///
    /// The generation moves on even when the date does not parse, so any
    /// lookup still in flight for an earlier date is discarded.
    pub fn begin_date_change(&mut self, raw: &str) -> Result<SlotTicket, BookingError> {
        self.ensure_editable()?;
        self.generation += 1;
        self.values.date = raw.to_string();
        let date = parse_date(raw).ok_or_else(|| BookingError::InvalidDate(raw.to_string()))?;
        Ok(SlotTicket {
            date,
            generation: self.generation,
        })
    }

    /// Apply the slots fetched for `ticket`. Returns `false` if a newer date
    /// change has superseded it.
    pub fn apply_slots(&mut self, ticket: &SlotTicket, slots: SlotList) -> bool {
        if ticket.generation != self.generation {
            debug!(
                date = %ticket.date,
                ticket = ticket.generation,
                current = self.generation,
                "Discarding slot list for superseded date"
            );
            return false;
        }
        self.update(slots);
        true
    }

    // --- Field edits ---

    pub fn set_time(&mut self, time: impl Into<String>) -> Result<(), BookingError> {
        self.ensure_editable()?;
        self.values.time = time.into();
        Ok(())
    }

    pub fn set_guests(&mut self, guests: impl Into<String>) -> Result<(), BookingError> {
        self.ensure_editable()?;
        self.values.guests = guests.into();
        Ok(())
    }

    pub fn set_occasion(&mut self, occasion: impl Into<String>) -> Result<(), BookingError> {
        self.ensure_editable()?;
        self.values.occasion = occasion.into();
        Ok(())
    }

    pub fn set_seating(&mut self, seating: impl Into<String>) -> Result<(), BookingError> {
        self.ensure_editable()?;
        self.values.seating = seating.into();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), BookingError> {
        match self.status {
            SubmissionStatus::Submitting => Err(BookingError::FormLocked),
            SubmissionStatus::Confirmed => Err(BookingError::AlreadyConfirmed),
            _ => Ok(()),
        }
    }

    // --- Validation ---

    /// Validate every field and build the request that would be submitted.
    pub fn validate(&self) -> Result<ReservationRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let values = &self.values;

        let date = if values.date.trim().is_empty() {
            errors.insert(Field::Date, DATE_REQUIRED);
            None
        } else {
            match parse_date(&values.date) {
                None => {
                    errors.insert(Field::Date, DATE_INVALID);
                    None
                }
                Some(date) if self.min_date.is_some_and(|min| date < min) => {
                    errors.insert(Field::Date, DATE_IN_PAST);
                    None
                }
                Some(date) => Some(date),
            }
        };

        let time = values.time.trim();
        if time.is_empty() {
            errors.insert(Field::Time, TIME_REQUIRED);
        } else if !self.slots.contains(time) {
            errors.insert(Field::Time, TIME_UNAVAILABLE);
        }

        let guests = validate_guests(&values.guests)
            .map_err(|message| errors.insert(Field::Guests, message))
            .ok();

        let occasion = values
            .occasion
            .trim()
            .parse::<Occasion>()
            .map_err(|_| errors.insert(Field::Occasion, OCCASION_INVALID))
            .ok();

        let seating = values
            .seating
            .trim()
            .parse::<Seating>()
            .map_err(|_| errors.insert(Field::Seating, SEATING_INVALID))
            .ok();

        match (date, guests, occasion, seating) {
            (Some(date), Some(guests), Some(occasion), Some(seating)) if errors.is_empty() => {
                Ok(ReservationRequest {
                    date,
                    time: time.to_string(),
                    guests,
                    occasion,
                    seating,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.validate().err().unwrap_or_default()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Confirmed
        ) && self.validate().is_ok()
    }

    /// Inputs are disabled while a submission is in flight.
    pub fn is_locked(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    // --- Submission ---

    /// Move to `Submitting` and return the request to deliver.
    pub fn begin_submit(&mut self) -> Result<ReservationRequest, BookingError> {
        self.ensure_editable()?;
        let request = self.validate().map_err(BookingError::NotSubmittable)?;
        self.status = SubmissionStatus::Submitting;
        Ok(request)
    }

    /// Record the outcome of the attempt started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: &SubmissionResult) {
        if !self.is_locked() {
            debug!(status = ?self.status, "No submission in flight, ignoring result");
            return;
        }
        self.status = if result.success {
            SubmissionStatus::Confirmed
        } else {
            SubmissionStatus::Failed {
                message: result
                    .message
                    .clone()
                    .unwrap_or_else(|| crate::logic::REJECTED_MESSAGE.to_string()),
            }
        };
    }

    /// Close the inline failure banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, SubmissionStatus::Failed { .. }) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Clear everything but the minimum date, for a new reservation.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.slots = SlotList::default();
        self.status = SubmissionStatus::Idle;
        self.generation += 1;
    }
}
