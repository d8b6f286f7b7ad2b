// File: crates/littlelemon_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::form::{Field, FieldErrors, FormValues};
use crate::handlers::{
    AvailabilityQuery, AvailabilityResponse, BookingOptionsResponse, BookingResponse, Choice,
};
use little_lemon_common::{Occasion, ReservationRequest, Seating};

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("date" = Option<String>, Query, description = "Date in YYYY-MM-DD format, today when omitted", example = "2025-06-14", format = "date")
    ),
    responses(
        (status = 200, description = "Slots offered on the date", body = AvailabilityResponse,
         example = json!({
             "date": "2025-06-14",
             "slots": ["10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
                       "17:00", "18:00", "19:00", "20:00", "21:00", "22:00"]
         })
        ),
        (status = 400, description = "Invalid date format",
         example = json!("Invalid date format (YYYY-MM-DD)")
        )
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    get,
    path = "/booking/options",
    responses(
        (status = 200, description = "Choices offered by the booking form", body = BookingOptionsResponse)
    )
)]
fn doc_get_booking_options_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = FormValues, example = json!({
        "date": "2025-06-14",
        "time": "17:00",
        "guests": 4,
        "occasion": "",
        "seating": ""
    })),
    responses(
        (status = 200, description = "Booking confirmed", body = BookingResponse,
         example = json!({
             "success": true,
             "message": "Booking confirmed.",
             "reservation": {"date": "2025-06-14", "time": "17:00", "guests": 4, "occasion": "", "seating": ""},
             "next": "/confirmed"
         })
        ),
        (status = 400, description = "Form has errors", body = BookingResponse,
         example = json!({
             "success": false,
             "message": "Please correct the highlighted fields.",
             "errors": {"guests": "Number of guests must be between 1 and 10"}
         })
        ),
        (status = 502, description = "Reservation service rejected or failed", body = BookingResponse,
         example = json!({
             "success": false,
             "message": "Failed to submit booking. Please try again."
         })
        )
    )
)]
fn doc_book_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_get_booking_options_handler,
        doc_book_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityResponse,
            BookingOptionsResponse,
            BookingResponse,
            Choice,
            Field,
            FieldErrors,
            FormValues,
            Occasion,
            ReservationRequest,
            Seating
        )
    ),
    tags(
        (name = "booking", description = "Little Lemon table reservations")
    ),
    servers(
        (url = "/api", description = "Little Lemon API server")
    )
)]
pub struct BookingApiDoc;
