use crate::AppConfig;
use crate::routes::courses::error::CoursesError;
use crate::routes::error::ErrorBody;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use practica_core::course::{self, NewCourse};
use practica_core::generate::{GenerationRequest, generate_course};
use practica_model::course::course::{CourseDetail, CourseSummary, CreatedCourse, GeneratedCourse};
use practica_model::course::question::{NewQuestion, QuestionOptions, ValidationError};
use practica_model::course::version::{AppendedQuestion, AttachedQuestion};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/generate-ai", post(generate_ai))
        .nest(
            "/{course_id}",
            Router::new()
                .route("/", get(get_course))
                .route("/publish", post(publish_course))
                .route("/questions", post(attach_question))
                .route("/versions/append-question", post(append_question))
                .route("/set-current-version", post(set_current_version)),
        )
        .with_state(())
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct Acknowledged {
    ok: bool,
}

impl Acknowledged {
    fn ok() -> Json<Self> {
        Json(Self { ok: true })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCourseBody {
    course_name: Option<String>,
    course_creator: Option<String>,
    /// Defaults to `courseCreator`
    created_by: Option<String>,
}

/// Question fields shared by both authoring endpoints.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionBody {
    question_sentence: Option<String>,
    question_type: Option<String>,
    options: Option<QuestionOptions>,
    answer: Option<String>,
}

impl TryFrom<QuestionBody> for NewQuestion {
    type Error = ValidationError;

    fn try_from(body: QuestionBody) -> Result<Self, Self::Error> {
        NewQuestion::from_fields(
            body.question_sentence.as_deref(),
            body.question_type.as_deref(),
            body.options,
            body.answer.as_deref(),
        )
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttachQuestionBody {
    course_version_id: Option<Uuid>,
    #[serde(flatten)]
    question: QuestionBody,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetCurrentVersionBody {
    course_version_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateCourseBody {
    topic: Option<String>,
    count: Option<i64>,
    course_name: Option<String>,
    course_creator: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct VersionParams {
    /// Version number to show. Unknown or malformed values fall back to the default.
    v: Option<String>,
}

#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = OK, body = Vec<CourseSummary>, description = "All courses, newest first"),
    ),
    tag = "courses"
)]
pub(crate) async fn list_courses(Extension(conn): Extension<DatabaseConnection>) -> Result<Response, CoursesError> {
    let courses = course::list_courses(&conn).await?;
    Ok(Json(courses).into_response())
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseBody,
    responses(
        (status = OK, body = CreatedCourse, description = "The course and its empty first version"),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn create_course(
    Extension(conn): Extension<DatabaseConnection>,
    body: Result<Json<CreateCourseBody>, JsonRejection>,
) -> Result<Response, CoursesError> {
    let Json(body) = body?;
    let new_course = NewCourse::new(
        body.course_name.as_deref(),
        body.course_creator.as_deref(),
        body.created_by.as_deref(),
    )?;

    let created = course::create_course(&conn, new_course).await?;
    Ok(Json(created).into_response())
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = Uuid, Path),
        VersionParams,
    ),
    responses(
        (status = OK, body = CourseDetail, description = "Course with the questions of the selected version"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn get_course(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    Query(params): Query<VersionParams>,
) -> Result<Response, CoursesError> {
    let requested_version = params.v.and_then(|v| v.trim().parse().ok());
    let detail = course::get_course_detail(&conn, course_id, requested_version).await?;
    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/publish",
    params(("course_id" = Uuid, Path)),
    responses(
        (status = OK, body = Acknowledged),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn publish_course(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<Response, CoursesError> {
    course::publish_course(&conn, course_id).await?;
    Ok(Acknowledged::ok().into_response())
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/questions",
    params(("course_id" = Uuid, Path)),
    request_body = AttachQuestionBody,
    responses(
        (status = OK, body = AttachedQuestion, description = "Question linked into the given version"),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn attach_question(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    body: Result<Json<AttachQuestionBody>, JsonRejection>,
) -> Result<Response, CoursesError> {
    let Json(body) = body?;
    let course_version_id = body.course_version_id.ok_or(CoursesError::MissingVersionId)?;
    let question = NewQuestion::try_from(body.question)?;

    let attached = course::attach_question(&conn, course_id, course_version_id, question).await?;
    Ok(Json(attached).into_response())
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/versions/append-question",
    params(("course_id" = Uuid, Path)),
    request_body = QuestionBody,
    responses(
        (status = OK, body = AppendedQuestion, description = "New current version containing the question"),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn append_question(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    body: Result<Json<QuestionBody>, JsonRejection>,
) -> Result<Response, CoursesError> {
    let Json(body) = body?;
    let question = NewQuestion::try_from(body)?;

    let appended = course::append_question(&conn, course_id, question).await?;
    Ok(Json(appended).into_response())
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/set-current-version",
    params(("course_id" = Uuid, Path)),
    request_body = SetCurrentVersionBody,
    responses(
        (status = OK, body = Acknowledged),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn set_current_version(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    body: Result<Json<SetCurrentVersionBody>, JsonRejection>,
) -> Result<Response, CoursesError> {
    let Json(body) = body?;
    let course_version_id = body.course_version_id.ok_or(CoursesError::MissingVersionId)?;

    course::set_current_version(&conn, course_id, course_version_id).await?;
    Ok(Acknowledged::ok().into_response())
}

#[utoipa::path(
    post,
    path = "/courses/generate-ai",
    request_body = GenerateCourseBody,
    responses(
        (status = OK, body = GeneratedCourse, description = "Generated course stored as version 1"),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, body = ErrorBody, description = "Provider missing or unusable output"),
    ),
    tag = "courses"
)]
pub(crate) async fn generate_ai(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    body: Result<Json<GenerateCourseBody>, JsonRejection>,
) -> Result<Response, CoursesError> {
    let Json(body) = body?;
    let request = GenerationRequest::new(
        body.topic.as_deref(),
        body.count,
        body.course_name.as_deref(),
        body.course_creator.as_deref(),
    )?;
    tracing::info!(
        topic = %request.topic,
        count = request.count,
        model = app_config.llm_config().model(),
        "generating course"
    );

    let generated = generate_course(&conn, app_config.generator(), request).await?;
    Ok(Json(generated).into_response())
}
