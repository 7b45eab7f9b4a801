use maud::{Markup, html};
use serde::{Deserialize, Serialize};

///what the form posts back - everything as the user typed it
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    #[serde(rename = "studentID", default)]
    pub student_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub gpa: String,
}

///body for `POST /students`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewStudent<'a> {
    #[serde(rename = "studentID")]
    pub student_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub major: &'a str,
    pub gpa: f64,
}

///body for `PUT /students/{id}` - the id lives in the path
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StudentUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub major: &'a str,
    pub gpa: f64,
}

///a student as the remote API hands it back
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StudentRecord {
    #[serde(rename = "StudentID")]
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    #[serde(rename = "GPA")]
    pub gpa: f64,
}

impl StudentRecord {
    pub const COLUMNS: [&'static str; 5] = ["Student ID", "Name", "Email", "Major", "GPA"];

    pub fn as_row(&self) -> [Markup; 5] {
        [
            html! {(self.student_id)},
            html! {(self.name)},
            html! {(self.email)},
            html! {(self.major)},
            //JSON numbers like `4` should come back out as `4`, not `4.0`
            html! {(self.gpa.to_string())},
        ]
    }
}
