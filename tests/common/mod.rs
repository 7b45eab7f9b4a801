#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use student_form::{
    api::StudentApi,
    config::{ApiConfig, DEFAULT_MESSAGE_HIDE_DELAY, RuntimeConfiguration},
    controller::FormController,
    data::student::{NewStudent, StudentFields, StudentRecord, StudentUpdate},
    error::{StudentFormError, StudentFormResult},
    state::StudentFormState,
};
use url::Url;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Create(Value),
    Get(String),
    Update(String, Value),
    Delete(String),
}

#[derive(Clone, Debug)]
pub enum Reply {
    Success,
    Failure { status: u16, body: &'static str },
}

///a stand-in for the remote API that writes down everything it is asked to do
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    reply: Reply,
    get_delays: HashMap<String, Duration>,
}

impl FakeApi {
    pub fn new(reply: Reply) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
            get_delays: HashMap::new(),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Reply::Success)
    }

    pub fn failing(status: u16, body: &'static str) -> Self {
        Self::new(Reply::Failure { status, body })
    }

    pub fn with_get_delay(mut self, student_id: &str, delay: Duration) -> Self {
        self.get_delays.insert(student_id.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(&self) -> StudentFormResult<()> {
        match &self.reply {
            Reply::Success => Ok(()),
            Reply::Failure { status, body } => Err(StudentFormError::ErrorStatus {
                status: StatusCode::from_u16(*status).unwrap(),
                url: Url::parse("http://fake.test/students").unwrap(),
                body: (*body).to_string(),
            }),
        }
    }
}

#[async_trait]
impl StudentApi for FakeApi {
    async fn create(&self, student: &NewStudent<'_>) -> StudentFormResult<()> {
        self.record(Call::Create(serde_json::to_value(student).unwrap()));
        self.outcome()
    }

    async fn get(&self, student_id: &str) -> StudentFormResult<StudentRecord> {
        self.record(Call::Get(student_id.to_string()));
        if let Some(delay) = self.get_delays.get(student_id) {
            tokio::time::sleep(*delay).await;
        }
        self.outcome().map(|()| StudentRecord {
            student_id: student_id.to_string(),
            ..alice_record()
        })
    }

    async fn update(&self, student_id: &str, update: &StudentUpdate<'_>) -> StudentFormResult<()> {
        self.record(Call::Update(
            student_id.to_string(),
            serde_json::to_value(update).unwrap(),
        ));
        self.outcome()
    }

    async fn delete(&self, student_id: &str) -> StudentFormResult<()> {
        self.record(Call::Delete(student_id.to_string()));
        self.outcome()
    }
}

pub fn alice_fields() -> StudentFields {
    StudentFields {
        student_id: "S1".into(),
        name: "Alice".into(),
        email: "a@x.com".into(),
        major: "CS".into(),
        gpa: "3.5".into(),
    }
}

pub fn alice_record() -> StudentRecord {
    StudentRecord {
        student_id: "S1".into(),
        name: "Alice".into(),
        email: "a@x.com".into(),
        major: "CS".into(),
        gpa: 3.5,
    }
}

pub fn controller(api: &Arc<FakeApi>) -> FormController {
    FormController::new(api.clone(), DEFAULT_MESSAGE_HIDE_DELAY)
}

pub fn state(api: &Arc<FakeApi>) -> StudentFormState {
    let api_config = ApiConfig::new("http://fake.test/students").unwrap();
    StudentFormState::with_api(
        RuntimeConfiguration::from_parts(api_config, DEFAULT_MESSAGE_HIDE_DELAY, "127.0.0.1:0"),
        api.clone(),
    )
}
