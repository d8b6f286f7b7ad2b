// --- File: crates/littlelemon_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod features; // Runtime feature checks
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Shared reservation data model
pub mod services; // Collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error,
    validation_error,
    Context,
    HttpStatusCode,
    LittleLemonError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_file, init_with_level, log_result, parse_level};

pub use features::{
    is_feature_enabled,
    is_remote_availability_enabled,
    is_remote_submission_enabled,
};

pub use models::{Occasion, ReservationRequest, Seating, UnknownChoice, MAX_GUESTS, MIN_GUESTS};
