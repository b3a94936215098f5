use shared::domain::{PatientId, PatientRoster};
use tracing::debug;

use crate::disclosure::{Disclosure, SelectionError};
use crate::session::SessionStore;

const WIDGET: &str = "patient selector";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientChoice {
    pub patient_id: PatientId,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct PatientSelector {
    state: Disclosure,
    roster: PatientRoster,
}

impl PatientSelector {
    pub fn new(roster: PatientRoster) -> Self {
        Self {
            state: Disclosure::Closed,
            roster,
        }
    }

    pub fn state(&self) -> Disclosure {
        self.state
    }

    pub fn roster(&self) -> PatientRoster {
        self.roster
    }

    pub fn toggle(&mut self) -> Disclosure {
        let state = self.state.toggle();
        debug!(open = state.is_open(), "patient selector toggled");
        state
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn trigger_label(current: PatientId) -> String {
        format!("Patient {current} ▼")
    }

    /// Dropdown entries; empty while closed.
    pub fn entries(&self, current: PatientId) -> Vec<PatientChoice> {
        if !self.state.is_open() {
            return Vec::new();
        }
        self.roster
            .ids()
            .map(|patient_id| PatientChoice {
                patient_id,
                label: format!("Patient {patient_id}"),
                selected: patient_id == current,
            })
            .collect()
    }

    /// Writes the choice into the session and closes, whether or not the
    /// choice was accepted.
    pub fn select(
        &mut self,
        session: &SessionStore,
        patient_id: PatientId,
    ) -> Result<(), SelectionError> {
        if !self.state.is_open() {
            return Err(SelectionError::Closed { widget: WIDGET });
        }
        self.state.close();

        if !self.roster.contains(patient_id) {
            return Err(SelectionError::NotOnRoster(patient_id));
        }
        session.set_selected_patient(patient_id);
        Ok(())
    }
}

impl Default for PatientSelector {
    fn default() -> Self {
        Self::new(PatientRoster::DEMO)
    }
}
