use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(PatientId);

/// Role a caregiver signs in with. Unknown roles are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CareRole {
    Physician,
    Nurse,
    Therapist,
    Other(String),
}

impl CareRole {
    pub fn label(&self) -> &str {
        match self {
            CareRole::Physician => "Physician",
            CareRole::Nurse => "Nurse",
            CareRole::Therapist => "Therapist",
            CareRole::Other(label) => label,
        }
    }
}

impl From<String> for CareRole {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "physician" => CareRole::Physician,
            "nurse" => CareRole::Nurse,
            "therapist" => CareRole::Therapist,
            _ => CareRole::Other(value),
        }
    }
}

impl From<&str> for CareRole {
    fn from(value: &str) -> Self {
        CareRole::from(value.to_string())
    }
}

impl From<CareRole> for String {
    fn from(value: CareRole) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for CareRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: CareRole,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, role: impl Into<CareRole>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}

/// The fixed, ordered set of patients a caregiver can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientRoster {
    first: i64,
    last: i64,
}

impl PatientRoster {
    pub const DEMO: PatientRoster = PatientRoster { first: 1, last: 10 };

    pub fn contains(&self, patient_id: PatientId) -> bool {
        (self.first..=self.last).contains(&patient_id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = PatientId> {
        (self.first..=self.last).map(PatientId)
    }

    pub fn first(&self) -> PatientId {
        PatientId(self.first)
    }
}

impl Default for PatientRoster {
    fn default() -> Self {
        Self::DEMO
    }
}
