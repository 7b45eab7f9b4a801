use crate::{
    api::StudentApi,
    data::student::{NewStudent, StudentFields, StudentRecord, StudentUpdate},
    error::StudentFormError,
    validation::{RequiredFields, ValidationError, require_student_id, validate_fields},
};
use std::{fmt, sync::Arc, time::Duration};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Create,
    Retrieve,
    Update,
    Delete,
}

impl Operation {
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Student created successfully!",
            Self::Retrieve => "Student retrieved successfully!",
            Self::Update => "Student updated successfully!",
            Self::Delete => "Student deleted successfully!",
        }
    }

    ///shown when a failure doesn't come with a usable `error` field
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Create => "Error creating student.",
            Self::Retrieve => "Error retrieving student.",
            Self::Update => "Error updating student.",
            Self::Delete => "Error deleting student.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

pub const CLEARED_MESSAGE: &str = "Form cleared.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    ///`None` means the message stays until something replaces it
    pub auto_hide: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableUpdate {
    Unchanged,
    Show(StudentRecord),
    Hide,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormUpdate {
    pub message: Message,
    pub reset_form: bool,
    pub table: TableUpdate,
}

impl FormUpdate {
    fn message_only(message: Message) -> Self {
        Self {
            message,
            reset_form: false,
            table: TableUpdate::Unchanged,
        }
    }
}

//calls aren't serialised or de-duplicated - each FormUpdate is ready whenever its own response lands
pub struct FormController {
    api: Arc<dyn StudentApi>,
    message_hide_delay: Duration,
}

impl FormController {
    pub fn new(api: Arc<dyn StudentApi>, message_hide_delay: Duration) -> Self {
        Self {
            api,
            message_hide_delay,
        }
    }

    pub async fn create(&self, fields: &StudentFields) -> FormUpdate {
        let valid = match validate_fields(fields, RequiredFields::EVERYTHING) {
            Ok(valid) => valid,
            Err(e) => return Self::rejected(Operation::Create, &e),
        };

        let student = NewStudent {
            student_id: valid.student_id,
            name: valid.name,
            email: valid.email,
            major: valid.major,
            gpa: valid.gpa,
        };

        match self.api.create(&student).await {
            Ok(()) => self.succeeded(Operation::Create, true, TableUpdate::Unchanged),
            Err(e) => self.failed(Operation::Create, &e),
        }
    }

    pub async fn read(&self, student_id: &str) -> FormUpdate {
        let student_id = match require_student_id(student_id) {
            Ok(id) => id,
            Err(e) => return Self::rejected(Operation::Retrieve, &e),
        };

        match self.api.get(student_id).await {
            Ok(record) => self.succeeded(Operation::Retrieve, false, TableUpdate::Show(record)),
            Err(e) => self.failed(Operation::Retrieve, &e),
        }
    }

    ///`fields.student_id` picks the record, everything else is the new data
    pub async fn update(&self, fields: &StudentFields) -> FormUpdate {
        let valid = match require_student_id(&fields.student_id)
            .and_then(|_| validate_fields(fields, RequiredFields::PAYLOAD))
        {
            Ok(valid) => valid,
            Err(e) => return Self::rejected(Operation::Update, &e),
        };

        let update = StudentUpdate {
            name: valid.name,
            email: valid.email,
            major: valid.major,
            gpa: valid.gpa,
        };

        match self.api.update(valid.student_id, &update).await {
            Ok(()) => self.succeeded(Operation::Update, true, TableUpdate::Unchanged),
            Err(e) => self.failed(Operation::Update, &e),
        }
    }

    pub async fn delete(&self, student_id: &str) -> FormUpdate {
        let student_id = match require_student_id(student_id) {
            Ok(id) => id,
            Err(e) => return Self::rejected(Operation::Delete, &e),
        };

        match self.api.delete(student_id).await {
            Ok(()) => self.succeeded(Operation::Delete, true, TableUpdate::Hide),
            Err(e) => self.failed(Operation::Delete, &e),
        }
    }

    pub fn clear(&self) -> FormUpdate {
        FormUpdate {
            message: Message {
                text: CLEARED_MESSAGE.to_string(),
                kind: MessageKind::Success,
                auto_hide: Some(self.message_hide_delay),
            },
            reset_form: true,
            table: TableUpdate::Hide,
        }
    }

    fn rejected(op: Operation, e: &ValidationError) -> FormUpdate {
        if let ValidationError::MissingFields { missing } = e {
            let missing: Vec<_> = missing.as_nice_list().collect();
            debug!(%op, ?missing, "Rejected form input");
        } else {
            debug!(%op, ?e, "Rejected form input");
        }

        FormUpdate::message_only(Message {
            text: e.to_string(),
            kind: MessageKind::Error,
            auto_hide: None,
        })
    }

    fn succeeded(&self, op: Operation, reset_form: bool, table: TableUpdate) -> FormUpdate {
        info!(%op, "Student API call succeeded");

        FormUpdate {
            message: Message {
                text: op.success_message().to_string(),
                kind: MessageKind::Success,
                auto_hide: Some(self.message_hide_delay),
            },
            reset_form,
            table,
        }
    }

    fn failed(&self, op: Operation, e: &StudentFormError) -> FormUpdate {
        warn!(%op, ?e, "Student API call failed");

        let text = e
            .server_message()
            .unwrap_or_else(|| op.fallback_message().to_string());

        FormUpdate::message_only(Message {
            text,
            kind: MessageKind::Error,
            auto_hide: Some(self.message_hide_delay),
        })
    }
}
