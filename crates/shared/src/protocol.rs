use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::PatientId;

/// Body of `GET /api/patients/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: PatientId,
    pub name: String,
    pub status: String,
    pub dob: String,
    pub mrn: String,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
