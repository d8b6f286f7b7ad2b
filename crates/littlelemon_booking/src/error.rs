// --- File: crates/littlelemon_booking/src/error.rs ---
use little_lemon_common::{validation_error, LittleLemonError};
use thiserror::Error;

use crate::form::FieldErrors;

/// Errors raised by the booking workflow itself.
///
/// Collaborator failures never show up here: availability falls back to the
/// default slots and submission failures become a failed `SubmissionResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("The booking form is locked while a submission is in flight")]
    FormLocked,
    #[error("This booking has already been confirmed")]
    AlreadyConfirmed,
    #[error("The booking form has errors: {0}")]
    NotSubmittable(FieldErrors),
}

impl From<BookingError> for LittleLemonError {
    fn from(err: BookingError) -> Self {
        validation_error(err)
    }
}
