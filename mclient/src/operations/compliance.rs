use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::json;

use crate::{ComplianceEvent, MemoryClient, RetentionPolicy};

impl MemoryClient {
    pub async fn export_gdpr(&self, user_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get(
            "export_gdpr",
            format!("security/compliance/gdpr/export/{user_id}"),
        ))
        .await
    }

    pub async fn delete_gdpr(&self, user_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::delete(
            "delete_gdpr",
            format!("security/compliance/gdpr/delete/{user_id}"),
        ))
        .await
    }

    pub async fn record_compliance_event(
        &self,
        event: ComplianceEvent,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("record_compliance_event", "security/compliance-events").with_json(
                json!({
                    "compliance_type": event.compliance_type,
                    "event_type": event.event_type,
                    "user_id": event.user_id,
                    "organization_id": event.organization_id,
                    "data_subject_id": event.data_subject_id,
                    "details": event.details.unwrap_or_default(),
                }),
            ),
        )
        .await
    }

    pub async fn encrypt_data(&self, data: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("encrypt_data", "security/encrypt").with_json(json!({
            "data": data,
        })))
        .await
    }

    pub async fn decrypt_data(&self, encrypted_data: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("decrypt_data", "security/decrypt").with_json(json!({
            "encrypted_data": encrypted_data,
        })))
        .await
    }

    pub async fn get_compliance_report(
        &self,
        organization_id: &str,
        compliance_type: Option<&str>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::get(
                "get_compliance_report",
                format!("security/compliance/report/{organization_id}"),
            )
            .with_optional_query(
                "compliance_type",
                compliance_type.filter(|value| !value.is_empty()),
            ),
        )
        .await
    }

    pub async fn set_retention_policy(
        &self,
        policy: RetentionPolicy,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("set_retention_policy", "security/retention-policies").with_json(
                json!({
                    "data_type": policy.data_type,
                    "retention_days": policy.retention_days,
                    "organization_id": policy.organization_id,
                    "user_id": policy.user_id,
                    "auto_delete": policy.auto_delete,
                }),
            ),
        )
        .await
    }

    pub async fn apply_retention_policies(
        &self,
        organization_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("apply_retention_policies", "security/apply-retention")
                .with_optional_query(
                    "organization_id",
                    organization_id.filter(|value| !value.is_empty()),
                )
                .with_optional_query("user_id", user_id.filter(|value| !value.is_empty())),
        )
        .await
    }
}
