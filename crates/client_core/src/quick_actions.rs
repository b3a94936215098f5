use shared::domain::PatientId;
use tracing::debug;

use crate::disclosure::{Disclosure, SelectionError};
use crate::effect::Effect;
use crate::notify::Toast;
use crate::route::{CaptureKind, Location};

const WIDGET: &str = "quick-action menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub kind: CaptureKind,
    pub icon: &'static str,
    pub label: &'static str,
    pub toast_title: &'static str,
    pub toast_description: &'static str,
}

impl QuickAction {
    pub fn toast(&self) -> Toast {
        Toast::new(self.toast_title, self.toast_description)
    }

    pub fn target(&self, patient_id: PatientId) -> Location {
        Location::quick_capture(self.kind, patient_id)
    }
}

pub static QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        kind: CaptureKind::Voice,
        icon: "🎤",
        label: "Voice Note",
        toast_title: "Voice note recording",
        toast_description: "Starting voice capture for patient notes...",
    },
    QuickAction {
        kind: CaptureKind::Photo,
        icon: "📷",
        label: "Take Photo",
        toast_title: "Camera access required",
        toast_description: "Starting secure patient photo capture...",
    },
    QuickAction {
        kind: CaptureKind::MicroNote,
        icon: "📝",
        label: "Micro Note",
        toast_title: "Quick note",
        toast_description: "Add a brief note to expand later",
    },
    QuickAction {
        kind: CaptureKind::Template,
        icon: "📋",
        label: "Template",
        toast_title: "Template selection",
        toast_description: "Choose a template for structured data entry",
    },
];

pub fn action_for(kind: CaptureKind) -> &'static QuickAction {
    match kind {
        CaptureKind::Voice => &QUICK_ACTIONS[0],
        CaptureKind::Photo => &QUICK_ACTIONS[1],
        CaptureKind::MicroNote => &QUICK_ACTIONS[2],
        CaptureKind::Template => &QUICK_ACTIONS[3],
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuickActionMenu {
    state: Disclosure,
}

impl QuickActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Disclosure {
        self.state
    }

    pub fn toggle(&mut self) -> Disclosure {
        let state = self.state.toggle();
        debug!(open = state.is_open(), "quick-action menu toggled");
        state
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    /// The trigger shows `+` while closed and `✕` while open.
    pub fn trigger_glyph(&self) -> &'static str {
        if self.state.is_open() {
            "✕"
        } else {
            "+"
        }
    }

    pub fn entries(&self) -> &'static [QuickAction] {
        if self.state.is_open() {
            &QUICK_ACTIONS
        } else {
            &[]
        }
    }

    /// Closes the menu and returns one notification plus one navigation
    /// request to the capture route for `patient_id`.
    pub fn select(
        &mut self,
        kind: CaptureKind,
        patient_id: PatientId,
    ) -> Result<Vec<Effect>, SelectionError> {
        if !self.state.is_open() {
            return Err(SelectionError::Closed { widget: WIDGET });
        }
        self.state.close();

        let action = action_for(kind);
        debug!(kind = kind.slug(), patient_id = patient_id.0, "quick action selected");
        Ok(vec![
            Effect::Notify(action.toast()),
            Effect::Navigate(action.target(patient_id)),
        ])
    }
}
