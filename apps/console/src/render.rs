use std::fmt::Write as _;

use client_core::{
    patient::{avatar_url, initials, last_updated_label, status_tone, StatusTone},
    Frame, PatientHeaderState, Toast, View,
};

pub fn view_title(view: &View) -> String {
    match view {
        View::Login => "Sign in".to_string(),
        View::Overview => "Overview".to_string(),
        View::PatientProfile(id) => format!("Patient Profile #{id}"),
        View::SafetyEnvironmental => "Safety & Environmental".to_string(),
        View::DischargeReadiness => "Discharge Readiness".to_string(),
        View::ClinicalInformation => "Clinical Information".to_string(),
        View::Form { kind, patient_id } => format!("Form: {} (patient {patient_id})", kind.slug()),
        View::NotFound => "404 Page Not Found".to_string(),
    }
}

fn tone_marker(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Positive => "+",
        StatusTone::Critical => "!",
        StatusTone::Neutral => "~",
    }
}

pub fn render_patient_header(state: &PatientHeaderState) -> String {
    match state {
        PatientHeaderState::Loading => "  [loading patient...]".to_string(),
        PatientHeaderState::Failed(_) => format!(
            "  [{}]",
            state.banner().unwrap_or("Error loading patient information")
        ),
        PatientHeaderState::Ready(record) => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "  ({}) {} [{} {}]",
                initials(&record.name),
                record.name,
                tone_marker(status_tone(&record.status)),
                record.status
            );
            let _ = writeln!(
                out,
                "  DOB {} | MRN: {} | {}",
                record.dob, record.mrn, record.gender
            );
            let _ = writeln!(out, "  avatar {}", avatar_url(record));
            let _ = write!(
                out,
                "  Last updated: {}",
                last_updated_label(record.last_updated)
            );
            out
        }
    }
}

pub fn render_frame(frame: &Frame, header: Option<&PatientHeaderState>) -> String {
    let mut out = String::new();

    if frame.chrome.header {
        let account = frame
            .user
            .as_ref()
            .map(|user| format!("{} ({})", user.name, user.role))
            .unwrap_or_else(|| "[Sign In]".to_string());
        let selector = frame
            .patient_selector
            .as_ref()
            .map(|selector| format!("[{}]  ", selector.trigger_label))
            .unwrap_or_default();
        let _ = writeln!(out, "== Care Companion ==  {selector}{account}");

        if let Some(selector) = &frame.patient_selector {
            if !selector.entries.is_empty() {
                let _ = writeln!(out, "  Select Patient");
                for entry in &selector.entries {
                    let marker = if entry.selected { "*" } else { " " };
                    let _ = writeln!(out, "   {marker} {}", entry.label);
                }
            }
        }
    }

    if frame.login_prompt.is_open() {
        let _ = writeln!(out, "  [switch user: type 'login <name> <role>']");
    }

    if frame.chrome.patient_header {
        if let Some(header) = header {
            let _ = writeln!(out, "{}", render_patient_header(header));
        }
    }

    if let Some(bar) = &frame.tab_bar {
        let labels: Vec<String> = bar
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                if bar.active == Some(index) {
                    format!("[{}]", tab.label)
                } else {
                    format!(" {} ", tab.label)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", labels.join("|"));
    }

    let _ = writeln!(out, "-- {} ({})", view_title(&frame.view), frame.location);

    if let Some(menu) = &frame.quick_actions {
        for action in &menu.entries {
            let _ = writeln!(
                out,
                "    {} {} ({})",
                action.icon,
                action.label,
                action.kind.slug()
            );
        }
        let _ = writeln!(out, "  ({})", menu.trigger_glyph);
    }

    out
}

pub fn render_toast(toast: &Toast) -> String {
    format!("** {}: {}", toast.title, toast.description)
}
