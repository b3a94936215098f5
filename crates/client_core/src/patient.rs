use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use shared::{domain::PatientId, error::ApiError, protocol::PatientRecord};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const AVATAR_BASE_URL: &str = "https://randomuser.me/api/portraits";
const AVATAR_INDEX_OFFSET: i64 = 20;

#[derive(Debug, Error)]
pub enum PatientLookupError {
    #[error("invalid patient API base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach patient API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("patient API returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("malformed patient record: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait PatientDirectory: Send + Sync {
    async fn fetch_patient(&self, patient_id: PatientId)
        -> Result<PatientRecord, PatientLookupError>;
}

pub struct HttpPatientDirectory {
    http: Client,
    base_url: Url,
}

impl HttpPatientDirectory {
    pub fn new(base_url: &str) -> Result<Self, PatientLookupError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, PatientLookupError> {
        let mut base_url =
            Url::parse(base_url).map_err(|source| PatientLookupError::InvalidBaseUrl {
                url: base_url.to_string(),
                source,
            })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    pub fn patient_url(&self, patient_id: PatientId) -> Result<Url, PatientLookupError> {
        let relative = format!("api/patients/{patient_id}");
        self.base_url
            .join(&relative)
            .map_err(|source| PatientLookupError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl PatientDirectory for HttpPatientDirectory {
    async fn fetch_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<PatientRecord, PatientLookupError> {
        let url = self.patient_url(patient_id)?;
        debug!(%url, "fetching patient");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiError>(&body)
                .map(|err| err.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
            return Err(PatientLookupError::Status { status, message });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientHeaderState {
    Loading,
    Ready(PatientRecord),
    Failed(String),
}

impl PatientHeaderState {
    pub fn from_lookup(
        patient_id: PatientId,
        result: Result<PatientRecord, PatientLookupError>,
    ) -> Self {
        match result {
            Ok(record) => PatientHeaderState::Ready(record),
            Err(err) => {
                warn!(patient_id = patient_id.0, "patient lookup failed: {err}");
                PatientHeaderState::Failed(err.to_string())
            }
        }
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self {
            PatientHeaderState::Failed(_) => Some("Error loading patient information"),
            _ => None,
        }
    }
}

pub async fn load_header(
    directory: &dyn PatientDirectory,
    patient_id: PatientId,
) -> PatientHeaderState {
    PatientHeaderState::from_lookup(patient_id, directory.fetch_patient(patient_id).await)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Critical,
    Neutral,
}

pub fn status_tone(status: &str) -> StatusTone {
    match status {
        "Discharge Ready" => StatusTone::Positive,
        "Critical" => StatusTone::Critical,
        _ => StatusTone::Neutral,
    }
}

pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

pub fn avatar_url(record: &PatientRecord) -> String {
    let folder = if record.gender == "Female" {
        "women"
    } else {
        "men"
    };
    format!(
        "{AVATAR_BASE_URL}/{folder}/{}.jpg",
        record.id.0.saturating_add(AVATAR_INDEX_OFFSET)
    )
}

/// e.g. `May 1, 2024, 9:30:00 AM`
pub fn last_updated_label(last_updated: Option<DateTime<Utc>>) -> String {
    last_updated
        .map(|at| at.format("%b %-d, %Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
#[path = "tests/patient_tests.rs"]
mod tests;
