use crate::{
    controller::{FormUpdate, TableUpdate},
    data::student::{StudentFields, StudentRecord},
    maud_conveniences::{form_action_button, form_submit_button, render_table, simple_form_element},
    routes::message::render_message,
    state::StudentFormState,
};
use axum::{Form, extract::State};
use maud::{Markup, html};

pub fn internal_get_student_form(oob: bool) -> Markup {
    html! {
        form id="student_form" hx-swap-oob=[oob.then_some("true")] hx-post="/internal/student/create" hx-trigger="submit" hx-swap="none" class="p-4" {
            (simple_form_element("studentID", "Student ID"))
            (simple_form_element("name", "Name"))
            (simple_form_element("email", "Email"))
            (simple_form_element("major", "Major"))
            (simple_form_element("gpa", "GPA"))

            div class="flex flex-wrap gap-2 items-center justify-between" {
                (form_submit_button(Some("Create Student")))
                (form_action_button("Get Student", "getStudent", "/internal/student/get", "bg-slate-600 hover:bg-slate-800"))
                (form_action_button("Update Student", "updateStudent", "/internal/student/update", "bg-yellow-600 hover:bg-yellow-800"))
                (form_action_button("Delete Student", "deleteStudent", "/internal/student/delete", "bg-red-600 hover:bg-red-800"))
                (form_action_button("Clear", "clearForm", "/internal/student/clear", "bg-gray-600 hover:bg-gray-700"))
            }
        }
    }
}

///the result table, or an empty placeholder for it when there's nothing to show
pub fn render_student_table(record: Option<&StudentRecord>, oob: bool) -> Markup {
    html! {
        div id="student_table" hx-swap-oob=[oob.then_some("true")] {
            @if let Some(record) = record {
                (render_table("Student", StudentRecord::COLUMNS, vec![record.as_row()]))
            }
        }
    }
}

pub fn render_form_update(
    FormUpdate {
        message,
        reset_form,
        table,
    }: FormUpdate,
) -> Markup {
    html! {
        (render_message(Some(&message), true))
        @if reset_form {
            (internal_get_student_form(true))
        }
        @match table {
            TableUpdate::Unchanged => {}
            TableUpdate::Show(record) => {
                (render_student_table(Some(&record), true))
            }
            TableUpdate::Hide => {
                (render_student_table(None, true))
            }
        }
    }
}

pub async fn internal_post_create_student(
    State(state): State<StudentFormState>,
    Form(fields): Form<StudentFields>,
) -> Markup {
    render_form_update(state.create(&fields).await)
}

pub async fn internal_post_get_student(
    State(state): State<StudentFormState>,
    Form(StudentFields { student_id, .. }): Form<StudentFields>,
) -> Markup {
    render_form_update(state.read(&student_id).await)
}

pub async fn internal_post_update_student(
    State(state): State<StudentFormState>,
    Form(fields): Form<StudentFields>,
) -> Markup {
    render_form_update(state.update(&fields).await)
}

pub async fn internal_post_delete_student(
    State(state): State<StudentFormState>,
    Form(StudentFields { student_id, .. }): Form<StudentFields>,
) -> Markup {
    render_form_update(state.delete(&student_id).await)
}

pub async fn internal_post_clear_form(State(state): State<StudentFormState>) -> Markup {
    render_form_update(state.clear())
}
