use crate::{
    data::student::{NewStudent, StudentRecord, StudentUpdate},
    error::{
        BuildClientSnafu, DecodeRecordSnafu, ErrorStatusSnafu, ReadBodySnafu, SendRequestSnafu,
        StudentFormResult,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use snafu::ResultExt;
use url::Url;

///the remote student resource
///
///every call is a single attempt - no retries, no de-duplication, no ordering between calls
#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn create(&self, student: &NewStudent<'_>) -> StudentFormResult<()>;
    async fn get(&self, student_id: &str) -> StudentFormResult<StudentRecord>;
    async fn update(&self, student_id: &str, update: &StudentUpdate<'_>) -> StudentFormResult<()>;
    async fn delete(&self, student_id: &str) -> StudentFormResult<()>;
}

#[derive(Clone, Debug)]
pub struct HttpStudentApi {
    client: Client,
    endpoint: Url,
}

impl HttpStudentApi {
    pub fn new(endpoint: Url) -> StudentFormResult<Self> {
        let client = Client::builder().build().context(BuildClientSnafu)?;
        Ok(Self::with_client(client, endpoint))
    }

    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    ///`{endpoint}/{id}`, with the id escaped as a single path segment
    pub fn student_url(&self, student_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(student_id);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        with_body: impl FnOnce(RequestBuilder) -> RequestBuilder + Send,
    ) -> StudentFormResult<Response> {
        info!(%method, %url, "Sending request to student API");

        let request = with_body(self.client.request(method.clone(), url.clone()));
        let response = request.send().await.context(SendRequestSnafu {
            method,
            url: url.clone(),
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        //the body is only ever used to fish out an error message, so a broken one is just empty
        let body = response.text().await.unwrap_or_default();
        ErrorStatusSnafu { status, url, body }.fail()
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn create(&self, student: &NewStudent<'_>) -> StudentFormResult<()> {
        self.send(Method::POST, self.endpoint.clone(), |rb| rb.json(student))
            .await
            .map(drop)
    }

    async fn get(&self, student_id: &str) -> StudentFormResult<StudentRecord> {
        let url = self.student_url(student_id);
        let response = self.send(Method::GET, url.clone(), |rb| rb).await?;

        let body = response.bytes().await.context(ReadBodySnafu { url: url.clone() })?;
        serde_json::from_slice(&body).context(DecodeRecordSnafu { url })
    }

    async fn update(&self, student_id: &str, update: &StudentUpdate<'_>) -> StudentFormResult<()> {
        self.send(Method::PUT, self.student_url(student_id), |rb| rb.json(update))
            .await
            .map(drop)
    }

    async fn delete(&self, student_id: &str) -> StudentFormResult<()> {
        self.send(Method::DELETE, self.student_url(student_id), |rb| rb)
            .await
            .map(drop)
    }
}
