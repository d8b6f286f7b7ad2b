// --- File: crates/littlelemon_booking/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod error;
pub mod flow;
pub mod form;
#[cfg(test)]
mod form_test;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
pub mod service;

pub use error::BookingError;
pub use flow::{BookingFlow, View};
pub use form::{BookingForm, Field, FieldErrors, FormValues, SubmissionStatus};
pub use logic::{default_slots, AvailabilityProvider, SlotList, SubmissionGateway, SubmissionResult};
