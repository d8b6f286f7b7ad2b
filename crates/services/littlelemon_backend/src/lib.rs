// --- File: crates/services/littlelemon_backend/src/lib.rs ---
use axum::{extract::State, routing::get, Json, Router};
use little_lemon_booking::routes as booking_routes;
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod app_state;
pub mod service_factory;

pub use app_state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Little Lemon API!";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub remote_availability: bool,
    pub remote_submission: bool,
}

#[axum::debug_handler]
async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        remote_availability: state.service_factory.availability_service().is_some(),
        remote_submission: state.service_factory.reservation_service().is_some(),
    })
}

/// Assemble the whole application: `/api` routes, docs and the static front-end.
pub fn build_app(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .route("/status", get(status_handler))
        .with_state(state.clone())
        .merge(booking_routes::routes(state.booking_state.clone()));

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use little_lemon_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Little Lemon API",
                version = "0.1.0",
                description = "Little Lemon table reservation API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("📖 Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    // Home, booking and confirmation pages; unknown paths get the SPA entry point.
    let app = match state.config.server.static_dir.as_deref() {
        Some(dir) => {
            info!("Serving static files from {}", dir);
            let index = ServeFile::new(format!("{dir}/index.html"));
            app.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}
