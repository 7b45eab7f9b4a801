use crate::state::StudentFormState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod index;
pub mod message;
pub mod student;

pub fn app_router(state: StudentFormState) -> Router {
    use index::get_index_route;
    use message::internal_get_hide_message;
    use student::{
        internal_post_clear_form, internal_post_create_student, internal_post_delete_student,
        internal_post_get_student, internal_post_update_student,
    };

    Router::new()
        .route("/", get(get_index_route))
        .route("/internal/student/create", post(internal_post_create_student))
        .route("/internal/student/get", post(internal_post_get_student))
        .route("/internal/student/update", post(internal_post_update_student))
        .route("/internal/student/delete", post(internal_post_delete_student))
        .route("/internal/student/clear", post(internal_post_clear_form))
        .route("/internal/message/hide", get(internal_get_hide_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
