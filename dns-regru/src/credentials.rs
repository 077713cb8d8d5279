//! Reg.ru account credentials and their validation.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigurationError;

/// Option key for the account username.
pub const USERNAME_KEY: &str = "username";
/// Option key for the account password.
pub const PASSWORD_KEY: &str = "password";
/// Option key for the client certificate path.
pub const CERT_KEY: &str = "cert";
/// Option key for the client private key path.
pub const KEY_KEY: &str = "key";

/// Client certificate and private key (PEM files) presented for mutual TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCertificate {
    /// Path to the PEM-encoded certificate.
    pub cert_path: PathBuf,
    /// Path to the PEM-encoded private key (PKCS#8, PKCS#1 or SEC1).
    pub key_path: PathBuf,
}

impl ClientCertificate {
    /// Pairs a certificate file with its private key file.
    pub fn new(cert_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    /// Both paths are regular files.
    pub fn is_present(&self) -> bool {
        self.cert_path.is_file() && self.key_path.is_file()
    }
}

/// Credentials for the Reg.ru API.
///
/// Built once per run from the options supplied by the credentials loader and
/// read-only afterwards. `source` identifies where the options came from
/// (normally the credentials file path) and is quoted in every validation error.
///
/// ```rust
/// use std::collections::HashMap;
/// use dns_regru::Credentials;
///
/// let options: HashMap<String, String> = [
///     ("username".to_string(), "test".to_string()),
///     ("password".to_string(), "test".to_string()),
/// ]
/// .into();
/// let credentials = Credentials::from_map("regru.ini", &options).unwrap();
/// assert_eq!(credentials.username(), "test");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    source: String,
    username: String,
    password: String,
    cert: Option<PathBuf>,
    key: Option<PathBuf>,
}

impl Credentials {
    /// Creates credentials without a client certificate. Not validated; see [`Credentials::validate`].
    pub fn new(
        source: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            username: username.into(),
            password: password.into(),
            cert: None,
            key: None,
        }
    }

    /// Sets the client certificate and key paths.
    #[must_use]
    pub fn with_client_certificate(
        mut self,
        cert: impl Into<PathBuf>,
        key: impl Into<PathBuf>,
    ) -> Self {
        self.cert = Some(cert.into());
        self.key = Some(key.into());
        self
    }

    /// Construct credentials from a flat option map and validate them.
    ///
    /// Recognized keys are `username`, `password`, `cert` and `key`. Empty `cert`/`key`
    /// values are treated as absent.
    pub fn from_map(
        source: impl Into<String>,
        map: &HashMap<String, String>,
    ) -> Result<Self, ConfigurationError> {
        let source = source.into();
        let username = Self::get_required_field(&source, map, USERNAME_KEY, "Username")?;
        let password = Self::get_required_field(&source, map, PASSWORD_KEY, "Password")?;

        let credentials = Self {
            cert: Self::get_optional_path(map, CERT_KEY),
            key: Self::get_optional_path(map, KEY_KEY),
            source,
            username,
            password,
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Check that username and password are non-empty and that the client
    /// certificate, if configured, is complete and exists on disk.
    ///
    /// No network access.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.require_non_empty(USERNAME_KEY, "Username", &self.username)?;
        self.require_non_empty(PASSWORD_KEY, "Password", &self.password)?;

        match (&self.cert, &self.key) {
            (None, None) => Ok(()),
            (Some(_), None) => Err(self.incomplete_certificate(KEY_KEY)),
            (None, Some(_)) => Err(self.incomplete_certificate(CERT_KEY)),
            (Some(cert), Some(key)) => {
                self.require_file(CERT_KEY, "Client certificate", cert)?;
                self.require_file(KEY_KEY, "Client key", key)
            }
        }
    }

    /// Credential source identifier (e.g. the credentials file path).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Reg.ru account login.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Reg.ru account password; masked in `Debug`.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The configured client certificate, when both halves are set.
    pub fn client_certificate(&self) -> Option<ClientCertificate> {
        match (&self.cert, &self.key) {
            (Some(cert), Some(key)) => Some(ClientCertificate::new(cert, key)),
            _ => None,
        }
    }

    /// Obtain required fields from `HashMap` and verify that it is not empty
    fn get_required_field(
        source: &str,
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, ConfigurationError> {
        match map.get(key) {
            None => Err(ConfigurationError::MissingField {
                origin: source.to_string(),
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(ConfigurationError::EmptyField {
                origin: source.to_string(),
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }

    fn get_optional_path(map: &HashMap<String, String>, key: &str) -> Option<PathBuf> {
        map.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn require_non_empty(
        &self,
        field: &str,
        label: &str,
        value: &str,
    ) -> Result<(), ConfigurationError> {
        if value.trim().is_empty() {
            return Err(ConfigurationError::EmptyField {
                origin: self.source.clone(),
                field: field.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    fn require_file(&self, field: &str, label: &str, path: &Path) -> Result<(), ConfigurationError> {
        if path.is_file() {
            return Ok(());
        }
        Err(ConfigurationError::FileNotFound {
            origin: self.source.clone(),
            field: field.to_string(),
            label: label.to_string(),
            path: path.display().to_string(),
        })
    }

    fn incomplete_certificate(&self, missing: &str) -> ConfigurationError {
        ConfigurationError::IncompleteClientCertificate {
            origin: self.source.clone(),
            missing: missing.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("source", &self.source)
            .field("username", &self.username)
            .field("password", &"***")
            .field("cert", &self.cert)
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SOURCE: &str = "/usr/local/etc/letsencrypt/regru.ini";

    fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn from_map_valid_without_certificate() {
        let res = Credentials::from_map(SOURCE, &options(&[("username", "u"), ("password", "p")]));
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(cred) = res else {
            return;
        };
        assert_eq!(cred.username(), "u");
        assert_eq!(cred.password(), "p");
        assert_eq!(cred.source(), SOURCE);
        assert!(cred.client_certificate().is_none());
    }

    #[test]
    fn from_map_missing_username() {
        let res = Credentials::from_map(SOURCE, &options(&[("password", "p")]));
        assert!(
            matches!(&res, Err(ConfigurationError::MissingField { field, .. }) if field == "username"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn from_map_blank_password() {
        let res = Credentials::from_map(SOURCE, &options(&[("username", "u"), ("password", "  ")]));
        assert!(
            matches!(&res, Err(ConfigurationError::EmptyField { field, .. }) if field == "password"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn validate_empty_username_or_password() {
        for (username, password) in [("", "p"), ("u", ""), ("", "")] {
            let res = Credentials::new(SOURCE, username, password).validate();
            assert!(
                matches!(&res, Err(ConfigurationError::EmptyField { .. })),
                "({username:?}, {password:?}) gave {res:?}"
            );
        }
    }

    #[test]
    fn error_message_references_source() {
        let Err(e) = Credentials::new(SOURCE, "u", "").validate() else {
            panic!("empty password must be rejected");
        };
        assert!(e.to_string().contains(SOURCE), "message was: {e}");
    }

    #[test]
    fn empty_cert_and_key_options_are_ignored() {
        let res = Credentials::from_map(
            SOURCE,
            &options(&[("username", "u"), ("password", "p"), ("cert", ""), ("key", " ")]),
        );
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
    }

    #[test]
    fn cert_without_key_is_rejected() {
        let cert = NamedTempFile::new().unwrap();
        let res = Credentials::from_map(
            SOURCE,
            &options(&[
                ("username", "u"),
                ("password", "p"),
                ("cert", cert.path().to_str().unwrap()),
            ]),
        );
        assert_eq!(
            res.unwrap_err(),
            ConfigurationError::IncompleteClientCertificate {
                origin: SOURCE.to_string(),
                missing: "key".to_string(),
            }
        );
    }

    #[test]
    fn key_without_cert_is_rejected() {
        let key = NamedTempFile::new().unwrap();
        let res = Credentials::from_map(
            SOURCE,
            &options(&[
                ("username", "u"),
                ("password", "p"),
                ("key", key.path().to_str().unwrap()),
            ]),
        );
        assert!(
            matches!(&res, Err(ConfigurationError::IncompleteClientCertificate { missing, .. }) if missing == "cert"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn nonexistent_cert_or_key_is_rejected() {
        let existing = NamedTempFile::new().unwrap();
        let missing = existing.path().with_extension("missing");

        let missing_cert =
            Credentials::new(SOURCE, "u", "p").with_client_certificate(&missing, existing.path());
        assert!(matches!(
            missing_cert.validate(),
            Err(ConfigurationError::FileNotFound { ref field, .. }) if field == "cert"
        ));

        let missing_key =
            Credentials::new(SOURCE, "u", "p").with_client_certificate(existing.path(), &missing);
        assert!(matches!(
            missing_key.validate(),
            Err(ConfigurationError::FileNotFound { ref field, .. }) if field == "key"
        ));
    }

    #[test]
    fn existing_cert_and_key_pass() {
        let cert = NamedTempFile::new().unwrap();
        let key = NamedTempFile::new().unwrap();
        let cred =
            Credentials::new(SOURCE, "u", "p").with_client_certificate(cert.path(), key.path());

        assert!(cred.validate().is_ok());
        let client_cert = cred.client_certificate().unwrap();
        assert_eq!(client_cert.cert_path, cert.path());
        assert!(client_cert.is_present());
    }

    #[test]
    fn directory_is_neither_present_nor_valid() {
        let dir = tempfile::tempdir().unwrap();
        let key = NamedTempFile::new().unwrap();

        let certificate = ClientCertificate::new(dir.path(), key.path());
        assert!(!certificate.is_present());

        let cred =
            Credentials::new(SOURCE, "u", "p").with_client_certificate(dir.path(), key.path());
        assert!(matches!(
            cred.validate(),
            Err(ConfigurationError::FileNotFound { ref field, .. }) if field == "cert"
        ));
    }

    #[test]
    fn debug_hides_password() {
        let cred = Credentials::new(SOURCE, "user", "hunter2");
        let rendered = format!("{cred:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("user"));
    }
}
