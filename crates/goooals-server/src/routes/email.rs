use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use goooals_core::models::email::{MessageBody, SendEmailRequest};
use goooals_core::models::goal_type::{GoalPayload, GoalType};
use goooals_mail::transport::compose_goal_email;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/sendEmail
///
/// Renders the goal as an HTML email and dispatches it through the
/// configured mailer. The goal type is checked before any transport work.
pub async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(req) = body?;

    let email = req.email.filter(|e| !e.trim().is_empty());
    let goal = req.goal.filter(|g| !g.is_null());
    let (Some(email), Some(goal)) = (email, goal) else {
        return Err(ApiError::BadRequest(
            "Email and goal details are required.".into(),
        ));
    };

    let goal_type: GoalType = req
        .goal_type
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ApiError::BadRequest("Unknown goal type".into()))?;
    let payload = GoalPayload::from_value(goal_type, goal)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let outgoing = compose_goal_email(&email, &payload)?;
    state.mailer.send(outgoing).await?;

    tracing::info!(goal_type = %goal_type, "goal email sent");
    Ok(Json(MessageBody::new("Email sent successfully")))
}
