//! DNS-01 authenticator for Reg.ru
//!
//! Entry point used by the certificate-issuance host: `perform` publishes the
//! challenge record, `cleanup` removes it afterwards.

use crate::credentials::{CERT_KEY, Credentials, KEY_KEY, PASSWORD_KEY, USERNAME_KEY};
use crate::error::Result;
use crate::providers::{RegRuClient, RegRuClientBuilder};
use crate::types::{AuthenticatorMetadata, CredentialField, FieldType};

/// Suggested wait for DNS propagation before the CA checks the record.
pub const DEFAULT_PROPAGATION_SECONDS: u64 = 120;
/// Where the credentials file is looked up when none is configured.
pub const DEFAULT_CREDENTIALS_PATH: &str = "/usr/local/etc/letsencrypt/regru.ini";

/// Reg.ru DNS-01 authenticator.
///
/// Credentials are validated once at construction. Every `perform`/`cleanup`
/// builds its own [`RegRuClient`], so calls share nothing but the configuration.
#[derive(Clone)]
pub struct Authenticator {
    builder: RegRuClientBuilder,
}

impl Authenticator {
    /// Create an authenticator with the default client configuration.
    ///
    /// # Errors
    /// [`Error::Configuration`](crate::Error::Configuration) if the credentials are invalid.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::from_builder(RegRuClient::builder(credentials))
    }

    /// Create an authenticator from a customized client builder.
    ///
    /// # Errors
    /// [`Error::Configuration`](crate::Error::Configuration) if the credentials are invalid.
    pub fn from_builder(builder: RegRuClientBuilder) -> Result<Self> {
        builder.credentials().validate()?;
        Ok(Self { builder })
    }

    /// Static description of the authenticator and its credential options.
    pub fn metadata() -> AuthenticatorMetadata {
        AuthenticatorMetadata {
            description:
                "Obtain certificates using a DNS TXT record (if you are using Reg.ru for DNS)."
                    .to_string(),
            more_info: "This plugin configures a DNS TXT record to respond to a dns-01 challenge using the Reg.ru API.".to_string(),
            default_propagation_seconds: DEFAULT_PROPAGATION_SECONDS,
            default_credentials_path: DEFAULT_CREDENTIALS_PATH.to_string(),
            credential_fields: vec![
                CredentialField {
                    key: USERNAME_KEY.to_string(),
                    help_text: "Username of the Reg.ru account.".to_string(),
                    field_type: FieldType::Text,
                    required: true,
                },
                CredentialField {
                    key: PASSWORD_KEY.to_string(),
                    help_text: "Password of the Reg.ru account.".to_string(),
                    field_type: FieldType::Password,
                    required: true,
                },
                CredentialField {
                    key: CERT_KEY.to_string(),
                    help_text: "Client certificate (PEM) for mutual TLS.".to_string(),
                    field_type: FieldType::Path,
                    required: false,
                },
                CredentialField {
                    key: KEY_KEY.to_string(),
                    help_text: "Private key (PEM) of the client certificate.".to_string(),
                    field_type: FieldType::Path,
                    required: false,
                },
            ],
        }
    }

    /// The validated credentials every client is built with.
    pub fn credentials(&self) -> &Credentials {
        self.builder.credentials()
    }

    /// A new client for one operation.
    ///
    /// # Errors
    /// Fails only if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<RegRuClient> {
        self.builder.clone().build()
    }

    /// Publish the TXT record `validation_name` = `validation` for `domain`.
    ///
    /// # Errors
    /// See [`RegRuClient::add_txt_record`].
    pub async fn perform(&self, domain: &str, validation_name: &str, validation: &str) -> Result<()> {
        log::debug!("[regru] Performing dns-01 challenge for {domain}");
        self.client()?
            .add_txt_record(validation_name, validation)
            .await
    }

    /// Remove the TXT record published by [`perform`](Self::perform). Never fails.
    pub async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str) {
        log::debug!("[regru] Cleaning up dns-01 challenge for {domain}");
        match self.client() {
            Ok(client) => client.remove_txt_record(validation_name, validation).await,
            Err(e) => log::warn!(
                "[regru] Encountered error deleting TXT record '{validation_name}': {e}"
            ),
        }
    }
}
