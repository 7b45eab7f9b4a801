use crate::error::{
    BadEnvVarSnafu, ParseEndpointSnafu, ParseHideDelaySnafu, StudentFormResult,
    UnsupportedEndpointSnafu,
};
use dotenvy::var;
use snafu::{ResultExt, ensure};
use std::{sync::Arc, time::Duration};
use url::Url;

pub const DEFAULT_MESSAGE_HIDE_DELAY: Duration = Duration::from_millis(3000);
pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    message_hide_delay: Duration,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> StudentFormResult<Self> {
        //optional, but if it's there it had better be a number
        let message_hide_delay = match var("STUDENT_FORM_MESSAGE_HIDE_MS") {
            Ok(millis) => Duration::from_millis(millis.trim().parse().context(ParseHideDelaySnafu)?),
            Err(_) => DEFAULT_MESSAGE_HIDE_DELAY,
        };

        Ok(Self {
            api_config: Arc::new(ApiConfig::from_env()?),
            message_hide_delay,
            server_ip: var("STUDENT_FORM_SERVER_IP")
                .unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string()),
        })
    }

    pub fn from_parts(
        api_config: ApiConfig,
        message_hide_delay: Duration,
        server_ip: impl Into<String>,
    ) -> Self {
        Self {
            api_config: Arc::new(api_config),
            message_hide_delay,
            server_ip: server_ip.into(),
        }
    }

    ///how long success and remote-error messages stay up
    pub const fn message_hide_delay(&self) -> Duration {
        self.message_hide_delay
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    endpoint: Url,
}

impl ApiConfig {
    pub fn new(endpoint: &str) -> StudentFormResult<Self> {
        let endpoint = Url::parse(endpoint).context(ParseEndpointSnafu {
            original: endpoint.to_string(),
        })?;
        ensure!(
            matches!(endpoint.scheme(), "http" | "https") && !endpoint.cannot_be_a_base(),
            UnsupportedEndpointSnafu { endpoint }
        );

        Ok(Self { endpoint })
    }

    pub fn from_env() -> StudentFormResult<Self> {
        let name = "STUDENTS_API_ENDPOINT";
        let endpoint = var(name).context(BadEnvVarSnafu { name })?;

        Self::new(&endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
