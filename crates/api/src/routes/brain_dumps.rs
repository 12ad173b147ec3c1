//! Route definitions for the `/brain-dumps` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::brain_dumps;
use crate::state::AppState;

/// Routes for `/brain-dumps`.
///
/// Registered with the full path rather than nested: axum's `nest`
/// maps an inner `/` route to `/brain-dumps` only, while the spec's
/// endpoint is `POST /brain-dumps/` (trailing slash).
pub fn router() -> Router<AppState> {
    Router::new().route("/brain-dumps/", post(brain_dumps::process_brain_dump))
}
