use super::{courses, practice, users};

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        courses::list_courses,
        courses::create_course,
        courses::get_course,
        courses::publish_course,
        courses::attach_question,
        courses::append_question,
        courses::set_current_version,
        courses::generate_ai,
        practice::ensure_session,
        practice::update_session,
        practice::submit_answer,
        practice::get_status,
        users::ensure_user,
    ),
    tags(
        (name = "courses", description = "Versioned courses and their questions"),
        (name = "practice", description = "Practice sessions"),
        (name = "users", description = "Name based identity"),
    )
)]
pub(crate) struct ApiDoc;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/courses/{course_id}/versions/append-question"));
        assert!(paths.contains_key("/practice/session/{session_id}/answer"));
        assert!(paths.contains_key("/users/ensure"));
        assert_eq!(paths.len(), 12);
    }
}
