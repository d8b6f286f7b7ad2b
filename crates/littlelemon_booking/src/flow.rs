// --- File: crates/littlelemon_booking/src/flow.rs ---
//! Drives one visitor through home, booking and confirmation.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::BookingError;
use crate::form::BookingForm;
use crate::logic::{AvailabilityProvider, SubmissionGateway, SubmissionResult};

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Booking,
    Confirmation,
}

impl View {
    /// Route of the page showing this view.
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Booking => "/booking",
            View::Confirmation => "/confirmed",
        }
    }
}

pub struct BookingFlow {
    provider: AvailabilityProvider,
    gateway: SubmissionGateway,
    form: BookingForm,
    view: View,
}

impl BookingFlow {
    pub fn new(provider: AvailabilityProvider, gateway: SubmissionGateway) -> Self {
        Self {
            provider,
            gateway,
            form: BookingForm::new(),
            view: View::Home,
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            debug!(from = self.view.path(), to = view.path(), "Navigating");
            self.view = view;
        }
    }

    /// Show the booking view with the slots offered for `today`.
    pub async fn mount(&mut self, today: NaiveDate) {
        self.form.set_min_date(today);
        let slots = self.provider.get_slots(today).await;
        self.form.initialize(slots);
        self.navigate(View::Booking);
    }

    /// Select a new date and refresh the slot list.
    ///
    /// Returns `Ok(false)` when the lookup was superseded before it resolved.
    pub async fn change_date(&mut self, raw: &str) -> Result<bool, BookingError> {
        let ticket = self.form.begin_date_change(raw)?;
        let slots = self.provider.get_slots(ticket.date).await;
        Ok(self.form.apply_slots(&ticket, slots))
    }

    /// Submit the form. Delivery failures come back as an unsuccessful result;
    /// only a form that cannot be submitted yields an error.
    pub async fn submit(&mut self) -> Result<SubmissionResult, BookingError> {
        let request = self.form.begin_submit()?;
        let result = self.gateway.submit(&request).await;
        self.form.finish_submit(&result);
        if result.success {
            info!(date = %request.date, time = %request.time, "Booking confirmed");
            self.navigate(View::Confirmation);
        }
        Ok(result)
    }

    /// "Make another reservation": fresh form, back on the booking view.
    pub async fn start_over(&mut self, today: NaiveDate) {
        self.form.reset();
        self.mount(today).await;
    }
}
