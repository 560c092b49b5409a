mod handlers;

pub use handlers::{ContactErrorResponse, ContactResponse, GalleryQuery, ThemeResponse};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::contact::ContactForwarder;
use crate::db::Database;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: Arc<Catalog>,
    pub contact: ContactForwarder,
}

impl AppState {
    pub fn new(db: Database, catalog: Catalog, contact: ContactForwarder) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
            contact,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Gallery
        .route("/projects", get(handlers::list_projects))
        .route("/tags", get(handlers::list_tags))
        // Theme
        .route("/theme", get(handlers::get_theme).put(handlers::set_theme))
        .route("/theme/toggle", post(handlers::toggle_theme))
        // Contact
        .route("/contact", post(handlers::submit_contact))
        // Health
        .route("/health", get(handlers::health));

    let router = Router::new()
        .route("/", get(handlers::page))
        .route("/theme/toggle", post(handlers::toggle_theme_page))
        .route("/contact", post(handlers::submit_contact_page))
        .nest("/api/v1", api)
        .with_state(state);

    with_service_layers(router)
}

/// Tracing, CORS and panic recovery shared by every route.
pub fn with_service_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
