use crate::AppConfig;
use crate::routes::error::ErrorBody;
use crate::routes::users::error::UserError;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use practica_model::user::User;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/ensure", post(ensure_user)).with_state(())
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct EnsureUserBody {
    name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/users/ensure",
    request_body = EnsureUserBody,
    responses(
        (status = OK, body = User, description = "The user owning this name, created on first use"),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = "users"
)]
pub(crate) async fn ensure_user(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    body: Result<Json<EnsureUserBody>, JsonRejection>,
) -> Result<Response, UserError> {
    let Json(body) = body?;
    let name = body.name.unwrap_or_default();

    let user = app_config.identity().ensure_user(&conn, &name).await?;
    Ok(Json(user).into_response())
}
