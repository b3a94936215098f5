use std::{collections::HashMap, fs, io::ErrorKind, path::Path};

use anyhow::{bail, Context};
use shared::domain::{PatientId, PatientRoster};

pub const DEFAULT_CONFIG_FILE: &str = "care_companion.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub api_base_url: String,
    pub user_id: i64,
    pub user_name: String,
    pub user_role: String,
    pub initial_patient: i64,
    pub toast_limit: usize,
    pub start_location: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".into(),
            user_id: 1,
            user_name: "Dr. Sarah Johnson".into(),
            user_role: "Physician".into(),
            initial_patient: 1,
            toast_limit: 1,
            start_location: "/".into(),
        }
    }
}

pub fn load_settings(path: &Path) -> anyhow::Result<ConsoleSettings> {
    let mut settings = ConsoleSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_overrides(&mut settings, |key| {
                file_cfg.get(key).map(|value| match value {
                    toml::Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
            });
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.api_base_url = normalize_api_base_url(&settings.api_base_url);
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &ConsoleSettings) -> anyhow::Result<()> {
    if !PatientRoster::DEMO.contains(PatientId(settings.initial_patient)) {
        bail!(
            "initial_patient {} is not on the patient roster",
            settings.initial_patient
        );
    }
    Ok(())
}

fn apply_overrides(settings: &mut ConsoleSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("api_base_url") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("user_name") {
        settings.user_name = v;
    }
    if let Some(v) = lookup("user_role") {
        settings.user_role = v;
    }
    if let Some(v) = lookup("start_location") {
        settings.start_location = v;
    }
    if let Some(parsed) = lookup("user_id").and_then(|v| v.parse().ok()) {
        settings.user_id = parsed;
    }
    if let Some(parsed) = lookup("initial_patient").and_then(|v| v.parse().ok()) {
        settings.initial_patient = parsed;
    }
    if let Some(parsed) = lookup("toast_limit").and_then(|v| v.parse().ok()) {
        settings.toast_limit = parsed;
    }
}

pub(crate) fn apply_env_overrides(
    settings: &mut ConsoleSettings,
    env: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = env("CARE_COMPANION_API_URL") {
        settings.api_base_url = v;
    }
    apply_overrides(settings, |key| env(&format!("APP__{}", key.to_ascii_uppercase())));
}

pub fn normalize_api_base_url(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');

    if raw.is_empty() {
        return ConsoleSettings::default().api_base_url;
    }

    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
