use crate::{
    maud_conveniences::title,
    routes::{
        message::render_message,
        student::{internal_get_student_form, render_student_table},
    },
    state::StudentFormState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<StudentFormState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-2xl w-full flex flex-col space-y-4" {
            (title("Student Management"))
            (internal_get_student_form(false))
            (render_message(None, false))
            (render_student_table(None, false))
        }
    })
}
