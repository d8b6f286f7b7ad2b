// --- File: crates/services/littlelemon_backend/src/app_state.rs ---
use little_lemon_booking::handlers::BookingState;
use little_lemon_common::services::ServiceFactory;
use little_lemon_config::AppConfig;
use std::sync::Arc;

use crate::service_factory::LittleLemonServiceFactory;

/// Application state that is shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Source of the optional collaborators.
    pub service_factory: Arc<dyn ServiceFactory>,

    /// State of the booking routes, wired from `service_factory`.
    pub booking_state: Arc<BookingState>,
}

impl AppState {
    /// Create a new AppState, building the collaborators from `config`.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(LittleLemonServiceFactory::new(&config));
        Self::with_service_factory(config, service_factory)
    }

    /// Create a new AppState around an existing service factory.
    pub fn with_service_factory(
        config: Arc<AppConfig>,
        service_factory: Arc<dyn ServiceFactory>,
    ) -> Self {
        let booking_state = Arc::new(BookingState::from_factory(
            config.clone(),
            service_factory.as_ref(),
        ));
        Self {
            config,
            service_factory,
            booking_state,
        }
    }
}
