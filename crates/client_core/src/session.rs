use shared::domain::{PatientId, User};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::disclosure::Disclosure;
use crate::guard::{AuthEvent, AuthState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub selected_patient: PatientId,
    pub login_prompt: Disclosure,
}

impl SessionSnapshot {
    pub fn auth_state(&self) -> AuthState {
        AuthState::from_user(self.user.as_ref())
    }
}

pub struct SessionStore {
    tx: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    pub fn new(user: Option<User>, selected_patient: PatientId) -> Self {
        let (tx, _) = watch::channel(SessionSnapshot {
            user,
            selected_patient,
            login_prompt: Disclosure::Closed,
        });
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.tx.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().user.is_some()
    }

    pub fn auth_state(&self) -> AuthState {
        self.tx.borrow().auth_state()
    }

    pub fn set_user(&self, user: Option<User>) {
        let changed = self.tx.send_if_modified(|snapshot| {
            if snapshot.user == user {
                return false;
            }
            snapshot.user = user.clone();
            true
        });
        if changed {
            match &user {
                Some(user) => info!(user_id = user.id.0, role = %user.role, "session user set"),
                None => info!("session user cleared"),
            }
        }
    }

    pub fn apply_auth(&self, event: AuthEvent) -> AuthState {
        let next = self.auth_state().apply(event);
        self.set_user(next.user().cloned());
        next
    }

    pub fn selected_patient(&self) -> PatientId {
        self.tx.borrow().selected_patient
    }

    /// Accepts any id; roster membership is the selector widget's concern.
    pub fn set_selected_patient(&self, patient_id: PatientId) {
        let changed = self.tx.send_if_modified(|snapshot| {
            if snapshot.selected_patient == patient_id {
                return false;
            }
            snapshot.selected_patient = patient_id;
            true
        });
        if changed {
            info!(patient_id = patient_id.0, "selected patient changed");
        }
    }

    pub fn login_prompt(&self) -> Disclosure {
        self.tx.borrow().login_prompt
    }

    pub fn set_login_prompt(&self, state: Disclosure) {
        let changed = self.tx.send_if_modified(|snapshot| {
            if snapshot.login_prompt == state {
                return false;
            }
            snapshot.login_prompt = state;
            true
        });
        if changed {
            debug!(open = state.is_open(), "login prompt toggled");
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
