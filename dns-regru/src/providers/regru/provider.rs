//! Reg.ru TXT record operations

use serde::Serialize;

use crate::error::{CleanupWarning, ProviderError, Result};
use crate::types::{ChallengeRecord, RequestParams};
use crate::utils::log_sanitizer::redact_secrets;

use super::{
    ADD_TXT_PATH, AddTxtFields, DomainRef, InputData, JSON_FORMAT, PROVIDER_NAME,
    REMOVE_RECORD_PATH, RegRuClient, RemoveRecordFields, TXT_RECORD_TYPE,
};

impl RegRuClient {
    /// Publish a TXT record for a DNS-01 challenge.
    ///
    /// # Errors
    /// [`Error::ProviderCommunication`](crate::Error::ProviderCommunication) when the
    /// request fails or the API answers with anything but `"result": "success"`.
    pub async fn add_txt_record(&self, record_name: &str, record_content: &str) -> Result<()> {
        let record = ChallengeRecord::new(record_name, record_content);
        let params = self.create_params(
            &record,
            AddTxtFields {
                text: record.value().to_string(),
            },
        )?;

        log::debug!(
            "[{PROVIDER_NAME}] Attempting to add record: {}",
            redact_secrets(&params.input_data)
        );

        if let Err(e) = self.request(ADD_TXT_PATH, &params).await {
            log::error!("[{PROVIDER_NAME}] Encountered error adding TXT record: {e}");
            return Err(e.into());
        }

        log::debug!("[{PROVIDER_NAME}] Successfully added TXT record {record_name}");
        Ok(())
    }

    /// Remove a previously published TXT record.
    ///
    /// Best effort: any failure is logged at `warn` and swallowed.
    pub async fn remove_txt_record(&self, record_name: &str, record_content: &str) {
        match self.try_remove_txt_record(record_name, record_content).await {
            Ok(()) => log::debug!("[{PROVIDER_NAME}] Successfully deleted TXT record {record_name}"),
            Err(warning) => log::warn!("[{PROVIDER_NAME}] {warning}"),
        }
    }

    /// Like [`remove_txt_record`](Self::remove_txt_record) but hands the failure back.
    pub(crate) async fn try_remove_txt_record(
        &self,
        record_name: &str,
        record_content: &str,
    ) -> std::result::Result<(), CleanupWarning> {
        let record = ChallengeRecord::new(record_name, record_content);
        let warning = |cause: ProviderError| CleanupWarning {
            record_name: record.name().to_string(),
            cause,
        };

        let params = self
            .create_params(
                &record,
                RemoveRecordFields {
                    record_type: TXT_RECORD_TYPE.to_string(),
                    content: record.value().to_string(),
                },
            )
            .map_err(warning)?;

        log::debug!(
            "[{PROVIDER_NAME}] Attempting to delete record: {}",
            redact_secrets(&params.input_data)
        );

        self.request(REMOVE_RECORD_PATH, &params)
            .await
            .map(|_| ())
            .map_err(warning)
    }

    /// Build the form fields for one call: operation fields followed by the shared ones.
    pub(crate) fn create_params<T: Serialize>(
        &self,
        record: &ChallengeRecord,
        fields: T,
    ) -> std::result::Result<RequestParams, ProviderError> {
        let input = InputData {
            fields,
            subdomain: record.subdomain().to_string(),
            domains: vec![DomainRef {
                dname: record.domain().to_string(),
            }],
            output_content_type: JSON_FORMAT.to_string(),
            username: self.credentials.username().to_string(),
            password: self.credentials.password().to_string(),
        };

        let input_data =
            serde_json::to_string(&input).map_err(|e| ProviderError::SerializationError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            })?;

        Ok(RequestParams {
            input_format: JSON_FORMAT.to_string(),
            input_data,
        })
    }
}
