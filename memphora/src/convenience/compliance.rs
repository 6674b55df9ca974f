use mclient::{ComplianceEvent, RetentionPolicy};
use mcommon::JsonObject;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn export_gdpr(&self) -> JsonObject {
        best_effort("export_gdpr", self.client().export_gdpr(self.user())).await
    }

    pub async fn delete_gdpr(&self) -> JsonObject {
        best_effort("delete_gdpr", self.client().delete_gdpr(self.user())).await
    }

    /// Creates a retention policy scoped to the configured user.
    pub async fn set_retention_policy(
        &self,
        data_type: &str,
        retention_days: u64,
        organization_id: Option<&str>,
        auto_delete: bool,
    ) -> JsonObject {
        let policy = RetentionPolicy {
            organization_id: organization_id.map(str::to_string),
            user_id: Some(self.user().to_string()),
            auto_delete,
            ..RetentionPolicy::new(data_type, retention_days)
        };
        best_effort(
            "set_retention_policy",
            self.client().set_retention_policy(policy),
        )
        .await
    }

    pub async fn apply_retention_policies(&self, organization_id: Option<&str>) -> JsonObject {
        best_effort(
            "apply_retention_policies",
            self.client()
                .apply_retention_policies(organization_id, Some(self.user())),
        )
        .await
    }

    pub async fn get_compliance_report(
        &self,
        organization_id: &str,
        compliance_type: Option<&str>,
    ) -> JsonObject {
        best_effort(
            "get_compliance_report",
            self.client()
                .get_compliance_report(organization_id, compliance_type),
        )
        .await
    }

    /// Records `event` on behalf of the configured user; missing details are
    /// sent as an empty object.
    pub async fn record_compliance_event(&self, event: ComplianceEvent) -> JsonObject {
        let event = ComplianceEvent {
            user_id: Some(self.user().to_string()),
            details: Some(event.details.clone().unwrap_or_default()),
            ..event
        };
        best_effort(
            "record_compliance_event",
            self.client().record_compliance_event(event),
        )
        .await
    }

    pub async fn encrypt_data(&self, data: &str) -> JsonObject {
        best_effort("encrypt_data", self.client().encrypt_data(data)).await
    }

    pub async fn decrypt_data(&self, encrypted_data: &str) -> JsonObject {
        best_effort("decrypt_data", self.client().decrypt_data(encrypted_data)).await
    }
}
