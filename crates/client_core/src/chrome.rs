use crate::route::Location;

/// Which pieces of the shell surround the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    pub header: bool,
    pub patient_header: bool,
    pub tabs: bool,
    pub patient_selector: bool,
    pub quick_actions: bool,
}

impl Chrome {
    pub fn for_location(location: &Location, authenticated: bool) -> Self {
        if location.is_login() {
            return Self::default();
        }

        let form = location.is_form();
        Self {
            header: true,
            patient_header: !form,
            tabs: !form,
            patient_selector: authenticated && !form,
            quick_actions: authenticated && !form && !location.is_quick_capture(),
        }
    }
}
