use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to the Reg.ru API.
///
/// Each variant carries a `provider` field identifying the API that produced it, plus
/// enough context (status code, body, raw envelope) to diagnose the problem without
/// re-running with elevated logging. All variants are serializable for structured
/// error reporting.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, TLS handshake, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx HTTP status.
    #[error("[{provider}] HTTP {status}: {body}")]
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body (possibly empty).
        body: String,
    },

    /// The response body was empty or not valid JSON.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize the request payload.
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client certificate or key could not be loaded for mutual TLS.
    #[error("[{provider}] Client identity error: {detail}")]
    TlsIdentity {
        /// Provider that produced the error.
        provider: String,
        /// Details about the identity failure.
        detail: String,
    },

    /// The response envelope did not report `"result": "success"`.
    #[error("[{provider}] Unsuccessful response: {envelope}")]
    Unsuccessful {
        /// Provider that produced the error.
        provider: String,
        /// `error_code` from the envelope, if present.
        error_code: Option<String>,
        /// `error_text` from the envelope, if present.
        error_text: Option<String>,
        /// The raw envelope as received.
        envelope: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（API 拒绝请求、客户端错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unsuccessful { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. }
            | Self::TlsIdentity { .. } => false,
        }
    }
}

/// Invalid or incomplete credentials.
///
/// Always raised before any network call. Every variant names the credential source
/// (usually the credentials file path) so the user can find the misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConfigurationError {
    /// A required option is absent.
    #[error("{label} is required: missing option '{field}' (see {origin})")]
    MissingField {
        /// Credential source identifier.
        origin: String,
        /// Option key.
        field: String,
        /// Human-readable option label.
        label: String,
    },

    /// A required option is present but empty or whitespace-only.
    #[error("{label} is required: option '{field}' is empty (see {origin})")]
    EmptyField {
        /// Credential source identifier.
        origin: String,
        /// Option key.
        field: String,
        /// Human-readable option label.
        label: String,
    },

    /// Only one half of the client certificate/key pair was configured.
    #[error(
        "Both 'cert' and 'key' are required for client certificate authentication, '{missing}' is missing (see {origin})"
    )]
    IncompleteClientCertificate {
        /// Credential source identifier.
        origin: String,
        /// The option that is missing.
        missing: String,
    },

    /// A configured certificate or key file does not exist.
    #[error("{label} not found: {path} (see {origin})")]
    FileNotFound {
        /// Credential source identifier.
        origin: String,
        /// Option key.
        field: String,
        /// Human-readable option label.
        label: String,
        /// Configured path.
        path: String,
    },
}

/// Top-level error returned by the authenticator.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing credentials; raised before any request is attempted.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Transport failure or unsuccessful response while creating a record.
    #[error("Error communicating with the Reg.ru API: {0}")]
    ProviderCommunication(#[from] ProviderError),
}

impl Error {
    /// 是否为预期行为，用于日志分级。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) => true,
            Self::ProviderCommunication(e) => e.is_expected(),
        }
    }
}

/// A swallowed failure from record removal.
///
/// Cleanup is best effort: this is logged at `warn` and never propagated to the caller.
#[derive(Debug, Clone, Error)]
#[error("Encountered error deleting TXT record '{record_name}': {cause}")]
pub struct CleanupWarning {
    /// Fully-qualified name of the record that could not be removed.
    pub record_name: String,
    /// The underlying failure.
    pub cause: ProviderError,
}

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
