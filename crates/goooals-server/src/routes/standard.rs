use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/getRandomStandardGoal
///
/// Reads the catalog fresh on every request and returns one entry chosen
/// uniformly at random.
pub async fn get_random_standard_goal(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let goal = state.catalog.random_goal().await?;
    tracing::debug!(id = goal.id.as_deref().unwrap_or_default(), "picked standard goal");

    Ok(([(header::X_CONTENT_TYPE_OPTIONS, "nosniff")], Json(goal)))
}
