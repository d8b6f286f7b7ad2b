// --- File: crates/littlelemon_booking/src/routes.rs ---

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{
    book_handler, get_availability_handler, get_booking_options_handler, BookingState,
};

/// Creates a router containing all routes for the booking feature.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/booking/options", get(get_booking_options_handler))
        .route("/book", post(book_handler))
        .with_state(state)
}
