//! Reg.ru DNS Provider

mod http;
mod provider;
mod types;

use std::sync::Arc;
use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::Result;
use crate::http_client::HttpTransport;
use crate::providers::common::Timeouts;
use crate::traits::Transport;

pub(crate) use types::{AddTxtFields, DomainRef, InputData, RemoveRecordFields};

pub(crate) const PROVIDER_NAME: &str = "regru";
pub(crate) const REGRU_API_BASE: &str = "https://api.reg.ru/api/regru2";
pub(crate) const ADD_TXT_PATH: &str = "/zone/add_txt";
pub(crate) const REMOVE_RECORD_PATH: &str = "/zone/remove_record";
/// `input_format` / `output_content_type` 固定为 json
pub(crate) const JSON_FORMAT: &str = "json";
pub(crate) const RESULT_SUCCESS: &str = "success";
pub(crate) const TXT_RECORD_TYPE: &str = "TXT";

/// Reg.ru zone API client for DNS-01 TXT records.
///
/// Holds read-only credentials and a transport; request parameters are built
/// fresh for every call, so one client may serve concurrent challenges.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_regru::{Credentials, RegRuClient};
///
/// # async fn example() -> dns_regru::Result<()> {
/// let credentials = Credentials::new("regru.ini", "user", "password");
/// let client = RegRuClient::builder(credentials).build()?;
/// client
///     .add_txt_record("_acme-challenge.example.com", "validation-token")
///     .await?;
/// client
///     .remove_txt_record("_acme-challenge.example.com", "validation-token")
///     .await;
/// # Ok(())
/// # }
/// ```
pub struct RegRuClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
}

/// Builder for [`RegRuClient`].
#[derive(Clone)]
pub struct RegRuClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeouts: Timeouts,
    transport: Option<Arc<dyn Transport>>,
}

impl RegRuClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: REGRU_API_BASE.to_string(),
            timeouts: Timeouts::default(),
            transport: None,
        }
    }

    /// Override the API base URL (default `https://api.reg.ru/api/regru2`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the whole-request timeout (default: 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.request = Some(timeout);
        self
    }

    /// Set the connection timeout (default: 10s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connect = Some(timeout);
        self
    }

    /// Remove both timeouts; requests wait as long as the server does.
    pub fn no_timeout(mut self) -> Self {
        self.timeouts = Timeouts {
            connect: None,
            request: None,
        };
        self
    }

    /// Use a custom transport instead of the default [`HttpTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// The credentials this builder was created with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Validate the credentials and build the [`RegRuClient`] instance.
    pub fn build(self) -> Result<RegRuClient> {
        self.credentials.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeouts)?),
        };

        Ok(RegRuClient {
            transport,
            credentials: self.credentials,
            base_url: self.base_url,
        })
    }
}

impl RegRuClient {
    /// Returns a builder for customizing the client configuration.
    pub fn builder(credentials: Credentials) -> RegRuClientBuilder {
        RegRuClientBuilder::new(credentials)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
