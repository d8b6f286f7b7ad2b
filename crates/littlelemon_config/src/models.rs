// --- File: crates/littlelemon_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built front-end (home, booking and confirmation pages).
    #[serde(default)]
    pub static_dir: Option<String>,
}

// --- Booking Config ---
// Endpoints of the optional availability/submission collaborators.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BookingConfig {
    pub availability_url: Option<String>, // GET ?date=YYYY-MM-DD
    pub submit_url: Option<String>,       // POST reservation JSON
    pub request_timeout_secs: Option<u64>,
    /// IANA name of the restaurant's time zone, used for "today".
    pub time_zone: Option<String>,
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub directory: Option<String>, // daily rolling file when set
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_remote_availability: bool,
    #[serde(default)]
    pub use_remote_submission: bool,

    // --- Optional Sections ---
    #[serde(default)]
    pub booking: Option<BookingConfig>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl AppConfig {
    /// Minimal configuration with both collaborators disabled.
    pub fn local(host: &str, port: u16) -> Self {
        Self {
            server: ServerConfig {
                host: host.to_string(),
                port,
                static_dir: None,
            },
            use_remote_availability: false,
            use_remote_submission: false,
            booking: None,
            logging: None,
        }
    }
}
