//! DTOs for health check endpoint.

use serde::Serialize;

use crate::domain::entities::{ComponentStatus, HealthReport};
use crate::utils::timestamp::format_timestamp;

/// Health of one component and its connected services.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HealthResponse {
    pub health_check_timestamp: String,
    pub application_name: String,
    pub application_version: String,
    pub application_status: ComponentStatus,
    pub connected_services_health: Vec<HealthResponse>,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            health_check_timestamp: format_timestamp(&report.checked_at),
            application_name: report.component_name,
            application_version: report.component_version,
            application_status: report.status,
            connected_services_health: report
                .children
                .into_iter()
                .map(HealthResponse::from)
                .collect(),
        }
    }
}
