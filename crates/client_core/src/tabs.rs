use shared::domain::PatientId;

use crate::route::{Location, HOME_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    /// Label for narrow layouts.
    pub short_label: &'static str,
    pub path: String,
}

impl Tab {
    fn new(label: &'static str, short_label: &'static str, path: impl Into<String>) -> Self {
        Self {
            label,
            short_label,
            path: path.into(),
        }
    }

    /// The root tab is only active on the root itself; every other tab is
    /// active for any location below its path.
    pub fn is_active(&self, location: &Location) -> bool {
        if self.path == HOME_PATH {
            location.as_str() == HOME_PATH
        } else {
            location.as_str().starts_with(&self.path)
        }
    }
}

/// Index of the first tab that is active for `location`.
pub fn resolve(location: &Location, tabs: &[Tab]) -> Option<usize> {
    tabs.iter().position(|tab| tab.is_active(location))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTable {
    tabs: Vec<Tab>,
}

impl TabTable {
    /// Overview, Patient Profile, Clinical, Safety, Discharge, in that order.
    pub fn for_patient(patient_id: PatientId) -> Self {
        Self {
            tabs: vec![
                Tab::new("Overview", "Overview", HOME_PATH),
                Tab::new(
                    "Patient Profile",
                    "Profile",
                    Location::patient_profile(patient_id).as_str(),
                ),
                Tab::new("Clinical", "Clinical", "/clinical-information"),
                Tab::new("Safety", "Safety", "/safety-environmental"),
                Tab::new("Discharge", "Discharge", "/discharge-readiness"),
            ],
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn resolve(&self, location: &Location) -> Option<usize> {
        resolve(location, &self.tabs)
    }
}
