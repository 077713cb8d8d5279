use std::fmt;

use serde::{Deserialize, Serialize};

use crate::providers::common::split_record_name;
use crate::utils::log_sanitizer::redact_secrets;

// ============ Challenge Record ============

/// One TXT record instance published for a DNS-01 challenge.
///
/// The fully-qualified name is split the way the Reg.ru zone API expects it:
/// the last two labels form the zone (`dname`), everything before them is the
/// `subdomain`. This is a provider-schema rule, not a public-suffix lookup, so
/// `_acme-challenge.example.co.uk` maps to zone `co.uk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    name: String,
    subdomain: String,
    domain: String,
    value: String,
}

impl ChallengeRecord {
    pub fn new(fully_qualified_name: &str, value: impl Into<String>) -> Self {
        let (subdomain, domain) = split_record_name(fully_qualified_name);
        Self {
            name: fully_qualified_name.to_string(),
            subdomain,
            domain,
            value: value.into(),
        }
    }

    /// The name as supplied by the caller.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All labels except the last two, joined by `.`; empty for a two-label name.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// The last two labels.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// TXT record content (the validation string).
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============ Request Parameters ============

/// Form fields of one Reg.ru API call.
///
/// The operation payload travels as a JSON string inside the `input_data` form
/// field, next to `input_format=json`. Built fresh for every call.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Format of `input_data`; always `"json"`.
    pub input_format: String,
    /// JSON-serialized operation payload.
    pub input_data: String,
}

impl RequestParams {
    /// Form fields in wire order.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("input_format", self.input_format.as_str()),
            ("input_data", self.input_data.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` request body.
    pub fn to_form_body(&self) -> String {
        self.form_fields()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Debug for RequestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestParams")
            .field("input_format", &self.input_format)
            .field("input_data", &redact_secrets(&self.input_data))
            .finish()
    }
}

// ============ Authenticator Metadata Types ============

/// The input type of a credential option (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
    /// Filesystem path.
    Path,
}

/// Definition of a single credential option read from the credentials file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialField {
    /// Option key in the credentials file (e.g., `"username"`).
    pub key: String,
    /// Human-readable description.
    pub help_text: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the option must be present.
    pub required: bool,
}

/// Static metadata describing the authenticator.
///
/// Obtain via [`Authenticator::metadata()`](crate::Authenticator::metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorMetadata {
    /// Short description.
    pub description: String,
    /// Longer explanation of what the authenticator does.
    pub more_info: String,
    /// Suggested wait for DNS propagation before validation, in seconds.
    pub default_propagation_seconds: u64,
    /// Default location of the credentials file.
    pub default_credentials_path: String,
    /// Options read from the credentials file.
    pub credential_fields: Vec<CredentialField>,
}
