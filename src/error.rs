use reqwest::StatusCode;
use serde::Deserialize;
use snafu::Snafu;
use std::num::ParseIntError;

pub type StudentFormResult<T> = Result<T, StudentFormError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StudentFormError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse API endpoint {:?}", original))]
    ParseEndpoint {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("API endpoint {} must be an absolute http(s) URL", endpoint))]
    UnsupportedEndpoint { endpoint: url::Url },
    #[snafu(display("Unable to parse message hide delay"))]
    ParseHideDelay { source: ParseIntError },
    #[snafu(display("Unable to build HTTP client"))]
    BuildClient { source: reqwest::Error },
    #[snafu(display("Error sending {} request to {}", method, url))]
    SendRequest {
        source: reqwest::Error,
        method: reqwest::Method,
        url: url::Url,
    },
    #[snafu(display("Error reading response body from {}", url))]
    ReadBody { source: reqwest::Error, url: url::Url },
    #[snafu(display("Remote API answered {} from {}", status, url))]
    ErrorStatus {
        status: StatusCode,
        url: url::Url,
        body: String,
    },
    #[snafu(display("Unable to decode student record from {}", url))]
    DecodeRecord {
        source: serde_json::Error,
        url: url::Url,
    },
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

impl StudentFormError {
    ///the `error` field of a failure response, if the remote API sent a usable one
    pub fn server_message(&self) -> Option<String> {
        let Self::ErrorStatus { body, .. } = self else {
            return None;
        };

        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|ApiErrorBody { error }| error)
            .filter(|error| !error.is_empty())
    }
}
