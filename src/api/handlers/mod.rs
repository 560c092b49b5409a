use std::any::Any;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::catalog::{Catalog, ALL};
use crate::contact::SubmitError;
use crate::gallery::{GalleryController, GalleryView, PAGE_SIZE};
use crate::models::*;
use crate::render::{render_page, GalleryRenderer, HtmlGallery, PageContext};

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Turn a handler panic into the same generic 500 as any internal error.
pub(super) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    internal_error(format!("handler panicked: {}", detail)).into_response()
}

fn bad_request(e: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = e.to_string();
    tracing::warn!("Validation error: {}", msg);
    (StatusCode::BAD_REQUEST, msg)
}

// ============================================================
// Gallery
// ============================================================

/// Query parameters selecting a gallery view.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    /// Filter tag; `all` when omitted.
    pub filter: Option<String>,
    /// Pages revealed, counting the first; 1 when omitted.
    pub page: Option<u32>,
}

/// Rebuild the gallery a visitor would see after selecting `filter` and
/// pressing "load more" `page - 1` times.
fn replay<'a, R: GalleryRenderer>(
    catalog: &'a Catalog,
    renderer: R,
    query: &GalleryQuery,
) -> Result<(GalleryController<'a, R>, GalleryView), (StatusCode, String)> {
    let mut controller = GalleryController::new(catalog, renderer);
    let filter = query.filter.as_deref().unwrap_or(ALL);
    let mut view = controller.select_filter(filter).map_err(bad_request)?;

    // Pages past the last match reveal nothing new.
    let max_pages = (catalog.len() / PAGE_SIZE + 1) as u32;
    let pages = query.page.unwrap_or(1).clamp(1, max_pages);
    for _ in 1..pages {
        view = controller.load_more();
    }
    Ok((controller, view))
}

async fn render_gallery_page(
    state: &AppState,
    query: &GalleryQuery,
    notification: Option<Notification>,
) -> Result<Html<String>, (StatusCode, String)> {
    let theme = state.db.get_theme().map_err(internal_error)?.theme;
    let (mut controller, _) = replay(&state.catalog, HtmlGallery::new(), query)?;
    controller.settle();

    let next_page = controller.state().pages() as u32 + 1;
    let active_filter = controller.state().active_filter().to_string();
    let gallery = controller.into_renderer();
    let ctx = PageContext {
        theme,
        tags: state.catalog.tags(),
        active_filter: &active_filter,
        next_page,
        notification,
    };
    Ok(Html(render_page(&ctx, &gallery)))
}

/// The portfolio page.
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_gallery_page(&state, &query, None).await
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryView>, (StatusCode, String)> {
    let (_, view) = replay(&state.catalog, HtmlGallery::new(), &query)?;
    Ok(Json(view))
}

/// Filter tags, `all` first.
pub async fn list_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    let tags = std::iter::once(ALL)
        .chain(state.catalog.tags())
        .map(str::to_string)
        .collect();
    Json(tags)
}

// ============================================================
// Theme
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    #[serde(flatten)]
    pub preference: ThemePreference,
    pub notification: Notification,
}

fn theme_response(preference: ThemePreference) -> Json<ThemeResponse> {
    let notification = Notification::new(
        format!("Switched to {} mode", preference.theme.as_str()),
        NotificationKind::Info,
    );
    Json(ThemeResponse {
        preference,
        notification,
    })
}

pub async fn get_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemePreference>, (StatusCode, String)> {
    state.db.get_theme().map(Json).map_err(internal_error)
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(input): Json<SetThemeInput>,
) -> Result<Json<ThemeResponse>, (StatusCode, String)> {
    state
        .db
        .set_theme(input.theme)
        .map(theme_response)
        .map_err(internal_error)
}

pub async fn toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, (StatusCode, String)> {
    state
        .db
        .toggle_theme()
        .map(theme_response)
        .map_err(internal_error)
}

/// Toggle from the page's theme button, then return to the page.
pub async fn toggle_theme_page(
    State(state): State<AppState>,
) -> Result<Redirect, (StatusCode, String)> {
    state.db.toggle_theme().map_err(internal_error)?;
    Ok(Redirect::to("/"))
}

// ============================================================
// Contact
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub notification: Notification,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactErrorResponse {
    pub errors: Vec<FieldError>,
}

fn submit_error(e: SubmitError) -> Response {
    match e {
        SubmitError::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactErrorResponse { errors }),
        )
            .into_response(),
        other => {
            tracing::error!("Contact forwarding failed: {}", other);
            (
                StatusCode::BAD_GATEWAY,
                "Could not deliver message, please try again later".to_string(),
            )
                .into_response()
        }
    }
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> Response {
    match state.contact.submit(&input).await {
        Ok(notification) => Json(ContactResponse { notification }).into_response(),
        Err(e) => submit_error(e),
    }
}

/// Contact form posted from the page. Re-renders the page with the outcome.
pub async fn submit_contact_page(
    State(state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> Response {
    let (status, notification) = match state.contact.submit(&input).await {
        Ok(notification) => (StatusCode::OK, notification),
        Err(SubmitError::Invalid(errors)) => {
            let message = errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("; ");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Notification::new(message, NotificationKind::Error),
            )
        }
        Err(e) => return submit_error(e),
    };

    match render_gallery_page(&state, &GalleryQuery::default(), Some(notification)).await {
        Ok(page) => (status, page).into_response(),
        Err(e) => e.into_response(),
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
