//! # dns-regru
//!
//! DNS-01 challenge authenticator for domains hosted on [Reg.ru](https://www.reg.ru/).
//!
//! Publishes the `_acme-challenge` TXT record through the Reg.ru zone API
//! (`zone/add_txt`) and removes it after validation (`zone/remove_record`).
//! Requests are form-encoded POSTs, optionally authenticated with a client
//! certificate (mutual TLS) in addition to the account username and password.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ```toml
//! [dependencies]
//! dns-regru = { version = "0.1", default-features = false, features = ["rustls"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_regru::{Authenticator, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Load and validate credentials (no network access)
//!     let credentials = Credentials::new(
//!         "/usr/local/etc/letsencrypt/regru.ini",
//!         "user@example.com",
//!         "password",
//!     )
//!     .with_client_certificate("/etc/regru/client.crt", "/etc/regru/client.key");
//!     let authenticator = Authenticator::new(credentials)?;
//!
//!     // 2. Publish the challenge record
//!     authenticator
//!         .perform("example.com", "_acme-challenge.example.com", "validation-token")
//!         .await?;
//!
//!     // ... wait for propagation, let the CA validate ...
//!
//!     // 3. Remove it again (best effort, never fails)
//!     authenticator
//!         .cleanup("example.com", "_acme-challenge.example.com", "validation-token")
//!         .await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`](Error):
//!
//! - [`Error::Configuration`] — missing/empty username or password, incomplete or
//!   missing client certificate files; raised before any request
//! - [`Error::ProviderCommunication`] — the add request failed or the API did not
//!   answer `"result": "success"`; carries the [`ProviderError`] with status, body or
//!   the raw response envelope
//!
//! Record removal never returns an error: failures are logged at `warn` level as a
//! [`CleanupWarning`]. No request is ever retried.

#[cfg(not(any(feature = "native-tls", feature = "rustls")))]
compile_error!("enable one of the `native-tls` or `rustls` features");

mod authenticator;
mod credentials;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export authenticator
pub use authenticator::{Authenticator, DEFAULT_CREDENTIALS_PATH, DEFAULT_PROPAGATION_SECONDS};

// Re-export credentials
pub use credentials::{CERT_KEY, ClientCertificate, Credentials, KEY_KEY, PASSWORD_KEY, USERNAME_KEY};

// Re-export error types
pub use error::{CleanupWarning, ConfigurationError, Error, ProviderError, Result};

// Re-export transport
pub use http_client::HttpTransport;
pub use traits::Transport;

// Re-export client
pub use providers::common::Timeouts;
pub use providers::{RegRuClient, RegRuClientBuilder};

// Re-export types
pub use types::{AuthenticatorMetadata, ChallengeRecord, CredentialField, FieldType, RequestParams};
