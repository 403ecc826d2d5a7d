use crate::routes::error::ErrorBody;
use crate::routes::practice::error::PracticeRouteError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Extension, Json, Router};
use practica_core::practice::{self, ProgressUpdate};
use practica_model::practice::session::{AnswerResult, PracticeSession, SessionProgress, SessionStatus};
use practica_model::practice::status::CourseProgress;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/ensure-session", post(ensure_session))
        .route("/status", get(get_status))
        .nest(
            "/session/{session_id}",
            Router::new()
                .route("/", patch(update_session))
                .route("/answer", post(submit_answer)),
        )
        .with_state(())
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnsureSessionBody {
    user_id: Option<Uuid>,
    course_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateSessionBody {
    current_index: Option<i32>,
    correct_count: Option<i32>,
    /// Only `COMPLETED` has an effect
    status: Option<String>,
}

impl From<UpdateSessionBody> for ProgressUpdate {
    fn from(body: UpdateSessionBody) -> Self {
        Self {
            current_index: body.current_index,
            correct_count: body.correct_count,
            status: body.status.and_then(|status| SessionStatus::from_str(&status).ok()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct AnswerBody {
    answer: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusParams {
    user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/practice/ensure-session",
    request_body = EnsureSessionBody,
    responses(
        (status = OK, body = PracticeSession, description = "Running session on the course's effective version"),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody, description = "Unknown user or course, or a course without versions"),
    ),
    tag = "practice"
)]
pub(crate) async fn ensure_session(
    Extension(conn): Extension<DatabaseConnection>,
    body: Result<Json<EnsureSessionBody>, JsonRejection>,
) -> Result<Response, PracticeRouteError> {
    let Json(body) = body?;
    let (Some(user_id), Some(course_id)) = (body.user_id, body.course_id) else {
        return Err(PracticeRouteError::MissingIds);
    };

    let session = practice::ensure_session(&conn, user_id, course_id).await?;
    Ok(Json(session).into_response())
}

#[utoipa::path(
    patch,
    path = "/practice/session/{session_id}",
    params(("session_id" = Uuid, Path)),
    request_body = UpdateSessionBody,
    responses(
        (status = OK, body = SessionProgress, description = "Stored progress"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "practice"
)]
pub(crate) async fn update_session(
    Extension(conn): Extension<DatabaseConnection>,
    Path(session_id): Path<Uuid>,
    body: Result<Json<UpdateSessionBody>, JsonRejection>,
) -> Result<Response, PracticeRouteError> {
    let Json(body) = body?;

    let progress = practice::update_progress(&conn, session_id, body.into()).await?;
    Ok(Json(progress).into_response())
}

#[utoipa::path(
    post,
    path = "/practice/session/{session_id}/answer",
    params(("session_id" = Uuid, Path)),
    request_body = AnswerBody,
    responses(
        (status = OK, body = AnswerResult, description = "Grade of the answer and the advanced session"),
        (status = BAD_REQUEST, body = ErrorBody, description = "Missing answer or nothing left to answer"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "practice"
)]
pub(crate) async fn submit_answer(
    Extension(conn): Extension<DatabaseConnection>,
    Path(session_id): Path<Uuid>,
    body: Result<Json<AnswerBody>, JsonRejection>,
) -> Result<Response, PracticeRouteError> {
    let Json(body) = body?;
    let answer = body.answer.ok_or(PracticeRouteError::MissingAnswer)?;

    let result = practice::submit_answer(&conn, session_id, &answer).await?;
    Ok(Json(result).into_response())
}

#[utoipa::path(
    get,
    path = "/practice/status",
    params(StatusParams),
    responses(
        (status = OK, body = Vec<CourseProgress>, description = "Standing of the user in every course"),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = "practice"
)]
pub(crate) async fn get_status(
    Extension(conn): Extension<DatabaseConnection>,
    Query(params): Query<StatusParams>,
) -> Result<Response, PracticeRouteError> {
    let user_id = params
        .user_id
        .filter(|user_id| !user_id.trim().is_empty())
        .ok_or(PracticeRouteError::MissingUserId)?;
    let user_id = Uuid::parse_str(user_id.trim()).map_err(|_| PracticeRouteError::InvalidUserId)?;

    let status = practice::status_for_user(&conn, user_id).await?;
    Ok(Json(status).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_known_status_is_forwarded() {
        let body = UpdateSessionBody {
            current_index: Some(2),
            correct_count: None,
            status: Some("COMPLETED".to_owned()),
        };
        let update = ProgressUpdate::from(body);
        assert_eq!(update.status, Some(SessionStatus::Completed));
        assert_eq!(update.current_index, Some(2));

        let body = UpdateSessionBody {
            current_index: None,
            correct_count: None,
            status: Some("PAUSED".to_owned()),
        };
        assert_eq!(ProgressUpdate::from(body).status, None);
    }
}
