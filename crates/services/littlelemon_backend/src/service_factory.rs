// --- File: crates/services/littlelemon_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the optional availability and reservation collaborators from the
//! runtime configuration. A collaborator that is disabled, unconfigured or
//! fails to initialize is left out and the booking workflow falls back to its
//! local policy.
use little_lemon_booking::service::{RemoteAvailabilityService, RemoteReservationService};
use little_lemon_common::services::{
    share_availability, share_reservation, ServiceFactory, SharedAvailabilityService,
    SharedReservationService,
};
use little_lemon_common::{is_remote_availability_enabled, is_remote_submission_enabled};
use little_lemon_config::AppConfig;
use tracing::{error, info};

pub struct LittleLemonServiceFactory {
    availability_service: Option<SharedAvailabilityService>,
    reservation_service: Option<SharedReservationService>,
}

impl LittleLemonServiceFactory {
    /// Create a new service factory with the given configuration.
    pub fn new(config: &AppConfig) -> Self {
        let mut factory = Self::with_services(None, None);
        let booking = config.booking.clone().unwrap_or_default();

        if is_remote_availability_enabled(config) {
            match RemoteAvailabilityService::from_config(&booking) {
                Ok(service) => {
                    factory.availability_service = Some(share_availability(service));
                    info!("✅ Remote availability service initialized.");
                }
                Err(e) => {
                    error!("🚨 Failed to initialize remote availability service: {}. Using default slots.", e);
                }
            }
        } else {
            info!("ℹ️ Remote availability disabled, using the default slot table.");
        }

        if is_remote_submission_enabled(config) {
            match RemoteReservationService::from_config(&booking) {
                Ok(service) => {
                    factory.reservation_service = Some(share_reservation(service));
                    info!("✅ Remote reservation service initialized.");
                }
                Err(e) => {
                    error!("🚨 Failed to initialize remote reservation service: {}. Accepting bookings locally.", e);
                }
            }
        } else {
            info!("ℹ️ Remote submission disabled, bookings are accepted locally.");
        }

        factory
    }

    /// Factory handing out the given collaborators as-is.
    pub fn with_services(
        availability_service: Option<SharedAvailabilityService>,
        reservation_service: Option<SharedReservationService>,
    ) -> Self {
        Self {
            availability_service,
            reservation_service,
        }
    }
}

impl ServiceFactory for LittleLemonServiceFactory {
    fn availability_service(&self) -> Option<SharedAvailabilityService> {
        self.availability_service.clone()
    }

    fn reservation_service(&self) -> Option<SharedReservationService> {
        self.reservation_service.clone()
    }
}
