//! Session and navigation core for the Care Companion dashboard client.

pub mod chrome;
pub mod disclosure;
pub mod effect;
pub mod guard;
pub mod notify;
pub mod patient;
pub mod quick_actions;
pub mod route;
pub mod selector;
pub mod session;
pub mod shell;
pub mod tabs;

pub use chrome::Chrome;
pub use disclosure::{Disclosure, SelectionError};
pub use effect::Effect;
pub use guard::{AuthEvent, AuthState, GuardDecision, RouteGuard};
pub use notify::{Toast, Toaster};
pub use patient::{
    HttpPatientDirectory, PatientDirectory, PatientHeaderState, PatientLookupError,
};
pub use quick_actions::{QuickAction, QuickActionMenu, QUICK_ACTIONS};
pub use route::{CaptureKind, FormKind, Location, RouteEntry, RouteTable, View};
pub use selector::{PatientChoice, PatientSelector};
pub use session::{SessionSnapshot, SessionStore};
pub use shell::{Frame, Shell, ShellConfig};
pub use tabs::{Tab, TabTable};
