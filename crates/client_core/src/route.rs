use std::fmt;

use shared::domain::PatientId;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

const FORM_MARKER: &str = "/form";
const QUICK_CAPTURE_MARKER: &str = "/quick-capture";

/// A path supplied by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn login() -> Self {
        Self::new(LOGIN_PATH)
    }

    pub fn home() -> Self {
        Self::new(HOME_PATH)
    }

    pub fn patient_profile(patient_id: PatientId) -> Self {
        Self(format!("/patient-profile/{patient_id}"))
    }

    pub fn form(kind: FormKind, patient_id: PatientId) -> Self {
        Self(format!("/form/{}/{patient_id}", kind.slug()))
    }

    pub fn quick_capture(kind: CaptureKind, patient_id: PatientId) -> Self {
        Self(format!("/quick-capture/{}/{patient_id}", kind.slug()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_login(&self) -> bool {
        self.0 == LOGIN_PATH
    }

    pub fn is_form(&self) -> bool {
        self.0.contains(FORM_MARKER)
    }

    pub fn is_quick_capture(&self) -> bool {
        self.0.contains(QUICK_CAPTURE_MARKER)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Safety,
    PatientContext,
    Discharge,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [
        FormKind::Safety,
        FormKind::PatientContext,
        FormKind::Discharge,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            FormKind::Safety => "safety",
            FormKind::PatientContext => "patient-context",
            FormKind::Discharge => "discharge",
        }
    }
}

/// Capture flows reachable from the quick-action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    Voice,
    Photo,
    MicroNote,
    Template,
}

impl CaptureKind {
    pub fn slug(self) -> &'static str {
        match self {
            CaptureKind::Voice => "voice",
            CaptureKind::Photo => "photo",
            CaptureKind::MicroNote => "micro-note",
            CaptureKind::Template => "template",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "voice" => Some(CaptureKind::Voice),
            "photo" => Some(CaptureKind::Photo),
            "micro-note" => Some(CaptureKind::MicroNote),
            "template" => Some(CaptureKind::Template),
            _ => None,
        }
    }
}

/// What the main area renders for a resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Overview,
    PatientProfile(PatientId),
    SafetyEnvironmental,
    DischargeReadiness,
    ClinicalInformation,
    Form { kind: FormKind, patient_id: PatientId },
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Overview,
    PatientProfile,
    SafetyEnvironmental,
    DischargeReadiness,
    ClinicalInformation,
    Form(FormKind),
}

impl Page {
    fn view(self, patient_id: Option<PatientId>) -> Option<View> {
        let view = match self {
            Page::Login => View::Login,
            Page::Overview => View::Overview,
            Page::PatientProfile => View::PatientProfile(patient_id?),
            Page::SafetyEnvironmental => View::SafetyEnvironmental,
            Page::DischargeReadiness => View::DischargeReadiness,
            Page::ClinicalInformation => View::ClinicalInformation,
            Page::Form(kind) => View::Form {
                kind,
                patient_id: patient_id?,
            },
        };
        Some(view)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Id,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    path: String,
    segments: Vec<Segment>,
    page: Page,
}

impl RouteEntry {
    /// `path` uses `:id` for the single integer parameter a route may carry.
    pub fn new(path: impl Into<String>, page: Page) -> Self {
        let path = path.into();
        let segments = split_segments(&path)
            .map(|segment| {
                if segment.starts_with(':') {
                    Segment::Id
                } else {
                    Segment::Literal(segment.to_string())
                }
            })
            .collect();
        Self {
            path,
            segments,
            page,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn matches(&self, location: &Location) -> bool {
        self.bind(location).is_some()
    }

    fn bind(&self, location: &Location) -> Option<View> {
        let mut candidate = split_segments(location.as_str());
        let mut patient_id = None;

        for segment in &self.segments {
            let part = candidate.next()?;
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Id => patient_id = Some(PatientId(part.parse().ok()?)),
            }
        }

        if candidate.next().is_some() {
            return None;
        }

        self.page.view(patient_id)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Ordered route table. The first matching entry wins; no match is `NotFound`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        let mut entries = vec![
            RouteEntry::new(LOGIN_PATH, Page::Login),
            RouteEntry::new(HOME_PATH, Page::Overview),
            RouteEntry::new("/patient-profile/:id", Page::PatientProfile),
            RouteEntry::new("/safety-environmental", Page::SafetyEnvironmental),
            RouteEntry::new("/discharge-readiness", Page::DischargeReadiness),
            RouteEntry::new("/clinical-information", Page::ClinicalInformation),
        ];
        entries.extend(
            FormKind::ALL
                .into_iter()
                .map(|kind| RouteEntry::new(format!("/form/{}/:id", kind.slug()), Page::Form(kind))),
        );
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn resolve(&self, location: &Location) -> View {
        self.entries
            .iter()
            .find_map(|entry| entry.bind(location))
            .unwrap_or(View::NotFound)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "tests/route_tests.rs"]
mod tests;
