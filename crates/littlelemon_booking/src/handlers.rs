// File: crates/littlelemon_booking/src/handlers.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use little_lemon_common::services::ServiceFactory;
use little_lemon_common::{
    LittleLemonError, Occasion, ReservationRequest, Seating, MAX_GUESTS, MIN_GUESTS,
};
use little_lemon_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::flow::{BookingFlow, View};
use crate::form::{BookingForm, FieldErrors, FormValues};
use crate::logic::{
    parse_date, resolve_time_zone, today_in, AvailabilityProvider, SlotList, SubmissionGateway,
};

pub const CONFIRMED_MESSAGE: &str = "Booking confirmed.";
pub const INVALID_FORM_MESSAGE: &str = "Please correct the highlighted fields.";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format (YYYY-MM-DD)";

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub provider: AvailabilityProvider,
    pub gateway: SubmissionGateway,
    pub time_zone: Tz,
}

impl BookingState {
    pub fn new(
        config: Arc<AppConfig>,
        provider: AvailabilityProvider,
        gateway: SubmissionGateway,
    ) -> Self {
        let time_zone = resolve_time_zone(
            config
                .booking
                .as_ref()
                .and_then(|booking| booking.time_zone.as_deref()),
        );
        Self {
            config,
            provider,
            gateway,
            time_zone,
        }
    }

    /// Wire the collaborators supplied by `factory`; missing ones fall back to local policy.
    pub fn from_factory(config: Arc<AppConfig>, factory: &dyn ServiceFactory) -> Self {
        Self::new(
            config,
            AvailabilityProvider::new(factory.availability_service()),
            SubmissionGateway::new(factory.reservation_service()),
        )
    }

    /// Today's date at the restaurant.
    pub fn today(&self) -> NaiveDate {
        today_in(self.time_zone)
    }

    fn flow(&self) -> BookingFlow {
        BookingFlow::new(self.provider.clone(), self.gateway.clone())
    }
}

// --- Request / response types ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// `YYYY-MM-DD`; today when omitted.
    pub date: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub slots: SlotList,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingOptionsResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub min_date: NaiveDate,
    pub min_guests: u8,
    pub max_guests: u8,
    pub occasions: Vec<Choice>,
    pub seating: Vec<Choice>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationRequest>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    /// Page to show next.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl BookingResponse {
    fn confirmed(reservation: ReservationRequest, next: View) -> Self {
        Self {
            success: true,
            message: CONFIRMED_MESSAGE.to_string(),
            reservation: Some(reservation),
            errors: FieldErrors::default(),
            next: Some(next.path().to_string()),
        }
    }

    fn invalid(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: INVALID_FORM_MESSAGE.to_string(),
            reservation: None,
            errors,
            next: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            reservation: None,
            errors: FieldErrors::default(),
            next: None,
        }
    }
}

// --- Handlers ---

/// Handler returning the slots offered for a date.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    let date = match query.date.as_deref().map(str::trim) {
        None | Some("") => state.today(),
        Some(raw) => parse_date(raw)
            .ok_or_else(|| (StatusCode::BAD_REQUEST, INVALID_DATE_FORMAT.to_string()))?,
    };

    let slots = state.provider.get_slots(date).await;
    Ok(Json(AvailabilityResponse { date, slots }))
}

/// Handler returning the choices the booking form offers.
#[axum::debug_handler]
pub async fn get_booking_options_handler(
    State(state): State<Arc<BookingState>>,
) -> Json<BookingOptionsResponse> {
    Json(BookingOptionsResponse {
        min_date: state.today(),
        min_guests: MIN_GUESTS,
        max_guests: MAX_GUESTS,
        occasions: Occasion::ALL
            .iter()
            .map(|occasion| Choice {
                value: occasion.as_str().to_string(),
                label: occasion.label().to_string(),
            })
            .collect(),
        seating: Seating::ALL
            .iter()
            .map(|seating| Choice {
                value: seating.as_str().to_string(),
                label: seating.label().to_string(),
            })
            .collect(),
    })
}

fn fill_form(form: &mut BookingForm, values: FormValues) -> Result<(), BookingError> {
    form.set_time(values.time)?;
    form.set_guests(values.guests)?;
    form.set_occasion(values.occasion)?;
    form.set_seating(values.seating)
}

/// Handler to validate and submit a reservation.
#[axum::debug_handler]
pub async fn book_handler(
    State(state): State<Arc<BookingState>>,
    Json(values): Json<FormValues>,
) -> Result<(StatusCode, Json<BookingResponse>), LittleLemonError> {
    let mut flow = state.flow();
    flow.form_mut().set_min_date(state.today());
    flow.navigate(View::Booking);

    // An unparsable date is kept in the form and reported by validation.
    if let Err(e) = flow.change_date(&values.date).await {
        debug!(error = %e, "Date change rejected");
    }
    fill_form(flow.form_mut(), values)?;

    let reservation = match flow.form().validate() {
        Ok(reservation) => reservation,
        Err(errors) => {
            info!(%errors, "Booking form has errors");
            return Ok((StatusCode::BAD_REQUEST, Json(BookingResponse::invalid(errors))));
        }
    };

    let result = flow.submit().await?;
    if result.success {
        Ok((
            StatusCode::OK,
            Json(BookingResponse::confirmed(reservation, flow.view())),
        ))
    } else {
        let message = result
            .message
            .unwrap_or_else(|| crate::logic::REJECTED_MESSAGE.to_string());
        warn!(%message, "Booking not confirmed");
        Ok((StatusCode::BAD_GATEWAY, Json(BookingResponse::failed(message))))
    }
}
