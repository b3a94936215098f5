use shared::domain::{PatientId, PatientRoster, User};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::chrome::Chrome;
use crate::disclosure::{Disclosure, SelectionError};
use crate::effect::Effect;
use crate::guard::{AuthEvent, GuardDecision, RouteGuard};
use crate::notify::{Toast, Toaster, DEFAULT_TOAST_LIMIT};
use crate::quick_actions::{QuickAction, QuickActionMenu};
use crate::route::{CaptureKind, Location, RouteTable, View};
use crate::selector::{PatientChoice, PatientSelector};
use crate::session::{SessionSnapshot, SessionStore};
use crate::tabs::{Tab, TabTable};

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub roster: PatientRoster,
    pub toast_limit: usize,
    pub routes: RouteTable,
    pub guard: RouteGuard,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            roster: PatientRoster::DEMO,
            toast_limit: DEFAULT_TOAST_LIMIT,
            routes: RouteTable::standard(),
            guard: RouteGuard::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    pub tabs: Vec<Tab>,
    pub active: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorFrame {
    pub trigger_label: String,
    pub state: Disclosure,
    pub entries: Vec<PatientChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionsFrame {
    pub trigger_glyph: &'static str,
    pub state: Disclosure,
    pub entries: Vec<QuickAction>,
}

/// Everything a front end needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub location: Location,
    pub view: View,
    pub chrome: Chrome,
    pub user: Option<User>,
    pub selected_patient: PatientId,
    pub login_prompt: Disclosure,
    pub tab_bar: Option<TabBar>,
    pub patient_selector: Option<SelectorFrame>,
    pub quick_actions: Option<QuickActionsFrame>,
    /// Queued but not yet drained.
    pub toasts: Vec<Toast>,
}

pub struct Shell {
    session: SessionStore,
    session_rx: watch::Receiver<SessionSnapshot>,
    guard: RouteGuard,
    routes: RouteTable,
    location: Location,
    selector: PatientSelector,
    quick_actions: QuickActionMenu,
    toaster: Toaster,
}

impl Shell {
    /// A signed-in session seeded with an off-roster patient starts on the
    /// roster's first patient instead.
    pub fn new(session: SessionStore, config: ShellConfig, start: Location) -> Self {
        let seeded = session.selected_patient();
        if session.is_authenticated() && !config.roster.contains(seeded) {
            let fallback = config.roster.first();
            warn!(
                patient_id = seeded.0,
                fallback = fallback.0,
                "seeded patient is not on the roster"
            );
            session.set_selected_patient(fallback);
        }
        let session_rx = session.subscribe();
        let mut shell = Self {
            session,
            session_rx,
            guard: config.guard,
            routes: config.routes,
            location: Location::home(),
            selector: PatientSelector::new(config.roster),
            quick_actions: QuickActionMenu::new(),
            toaster: Toaster::new(config.toast_limit),
        };
        shell.navigate(start);
        shell
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Runs the guard and moves to the resulting location.
    pub fn navigate(&mut self, requested: impl Into<Location>) -> &Location {
        self.session_rx.mark_unchanged();
        let requested = requested.into();
        let auth = self.session.auth_state();
        let resolved = self.guard.resolve(&auth, requested.clone());
        if resolved != requested {
            debug!(requested = %requested, target = %resolved, "navigation redirected by guard");
        }
        debug!(location = %resolved, "navigated");
        self.location = resolved;
        self.selector.close();
        self.quick_actions.close();
        &self.location
    }

    /// Re-evaluates the guard if the session changed since the last check,
    /// including writes made directly through [`Shell::session`].
    pub fn sync(&mut self) {
        if matches!(self.session_rx.has_changed(), Ok(true)) {
            self.session_rx.mark_unchanged();
            let auth = self.session.auth_state();
            if let GuardDecision::Redirect(target) = self.guard.check(&auth, &self.location) {
                debug!(from = %self.location, target = %target, "session change redirected");
                self.navigate(target);
            }
        }
    }

    /// Applies effects in order and hands them back to the caller.
    pub fn apply(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        for effect in &effects {
            match effect {
                Effect::Notify(toast) => self.toaster.push(toast.clone()),
                Effect::Navigate(location) => {
                    self.navigate(location.clone());
                }
            }
        }
        effects
    }

    /// Does not return to a location the guard intercepted earlier; the
    /// session always starts on the overview.
    pub fn sign_in(&mut self, user: User) -> &Location {
        info!(user_id = user.id.0, name = %user.name, "signed in");
        self.session.apply_auth(AuthEvent::SignedIn(user));
        self.session.set_login_prompt(Disclosure::Closed);
        self.navigate(Location::home())
    }

    pub fn sign_out(&mut self) -> Vec<Effect> {
        info!("signing out");
        self.session.apply_auth(AuthEvent::SignedOut);
        self.session.set_login_prompt(Disclosure::Closed);
        let login = self.guard.login_location().clone();
        self.apply(vec![
            Effect::Notify(Toast::new(
                "Signed out",
                "You have been signed out successfully",
            )),
            Effect::Navigate(login),
        ])
    }

    pub fn request_user_switch(&mut self) {
        self.sync();
        if self.session.is_authenticated() {
            self.session.set_login_prompt(Disclosure::Open);
            self.session_rx.mark_unchanged();
        }
    }

    fn chrome(&self) -> Chrome {
        Chrome::for_location(&self.location, self.session.is_authenticated())
    }

    /// Hidden widgets stay closed.
    pub fn toggle_patient_selector(&mut self) -> Disclosure {
        self.sync();
        if !self.chrome().patient_selector {
            debug!(location = %self.location, "patient selector hidden; toggle ignored");
            return self.selector.state();
        }
        self.selector.toggle()
    }

    pub fn select_patient(&mut self, patient_id: PatientId) -> Result<(), SelectionError> {
        self.sync();
        if !self.chrome().patient_selector {
            self.selector.close();
            return Err(SelectionError::Hidden {
                widget: "patient selector",
            });
        }
        self.selector.select(&self.session, patient_id)?;
        self.session_rx.mark_unchanged();
        Ok(())
    }

    pub fn toggle_quick_actions(&mut self) -> Disclosure {
        self.sync();
        if !self.chrome().quick_actions {
            debug!(location = %self.location, "quick-action menu hidden; toggle ignored");
            return self.quick_actions.state();
        }
        self.quick_actions.toggle()
    }

    pub fn select_quick_action(&mut self, kind: CaptureKind) -> Result<Vec<Effect>, SelectionError> {
        self.sync();
        if !self.chrome().quick_actions {
            self.quick_actions.close();
            return Err(SelectionError::Hidden {
                widget: "quick-action menu",
            });
        }
        let effects = self
            .quick_actions
            .select(kind, self.session.selected_patient())?;
        Ok(self.apply(effects))
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toaster.drain()
    }

    pub fn frame(&mut self) -> Frame {
        self.sync();
        let snapshot = self.session.snapshot();
        let chrome = self.chrome();
        let view = if snapshot.user.is_none() {
            View::Login
        } else {
            self.routes.resolve(&self.location)
        };

        let tab_bar = chrome.tabs.then(|| {
            let table = TabTable::for_patient(snapshot.selected_patient);
            TabBar {
                active: table.resolve(&self.location),
                tabs: table.tabs().to_vec(),
            }
        });

        let patient_selector = chrome.patient_selector.then(|| SelectorFrame {
            trigger_label: PatientSelector::trigger_label(snapshot.selected_patient),
            state: self.selector.state(),
            entries: self.selector.entries(snapshot.selected_patient),
        });

        let quick_actions = chrome.quick_actions.then(|| QuickActionsFrame {
            trigger_glyph: self.quick_actions.trigger_glyph(),
            state: self.quick_actions.state(),
            entries: self.quick_actions.entries().to_vec(),
        });

        Frame {
            location: self.location.clone(),
            view,
            chrome,
            user: snapshot.user,
            selected_patient: snapshot.selected_patient,
            login_prompt: snapshot.login_prompt,
            tab_bar,
            patient_selector,
            quick_actions,
            toasts: self.toaster.pending().cloned().collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
