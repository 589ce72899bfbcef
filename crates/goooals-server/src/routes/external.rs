use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/getRandomExternalGoal
///
/// Proxies the third-party random-activity API, passing its JSON through
/// unchanged and forbidding any caching of the result.
pub async fn get_random_external_goal(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let activity = state.external.fetch_random().await?;

    Ok((
        [
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        Json(activity),
    ))
}
