use super::*;
use shared::domain::{CareRole, UserId};

fn nurse() -> User {
    User::new(UserId(4), "Sam Ortiz", CareRole::Nurse)
}

#[test]
fn subscribers_observe_mutations_before_the_call_returns() {
    let store = SessionStore::new(None, PatientId(1));
    let mut rx = store.subscribe();

    store.set_user(Some(nurse()));
    assert!(rx.has_changed().expect("sender alive"));
    assert_eq!(rx.borrow_and_update().user, Some(nurse()));

    store.set_selected_patient(PatientId(6));
    assert!(rx.has_changed().expect("sender alive"));
    assert_eq!(rx.borrow_and_update().selected_patient, PatientId(6));
}

#[test]
fn writes_of_an_unchanged_value_do_not_notify() {
    let store = SessionStore::new(Some(nurse()), PatientId(2));
    let rx = store.subscribe();

    store.set_user(Some(nurse()));
    store.set_selected_patient(PatientId(2));
    store.set_login_prompt(Disclosure::Closed);

    assert!(!rx.has_changed().expect("sender alive"));
}

#[test]
fn mutations_without_subscribers_are_still_applied() {
    let store = SessionStore::new(None, PatientId(1));
    store.set_user(Some(nurse()));
    store.set_selected_patient(PatientId(3));
    assert!(store.is_authenticated());
    assert_eq!(store.selected_patient(), PatientId(3));
}

#[test]
fn store_accepts_out_of_roster_patient_ids() {
    let store = SessionStore::new(Some(nurse()), PatientId(1));
    store.set_selected_patient(PatientId(42));
    assert_eq!(store.selected_patient(), PatientId(42));
}

#[test]
fn clearing_the_user_moves_to_unauthenticated() {
    let store = SessionStore::new(Some(nurse()), PatientId(1));
    assert!(store.auth_state().is_authenticated());
    store.set_user(None);
    assert_eq!(store.auth_state(), AuthState::Unauthenticated);
    assert_eq!(store.snapshot().user, None);
}

#[test]
fn every_subscriber_sees_the_same_snapshot() {
    let store = SessionStore::new(None, PatientId(1));
    let first = store.subscribe();
    let second = store.subscribe();

    store.set_login_prompt(Disclosure::Open);

    assert_eq!(*first.borrow(), *second.borrow());
    assert!(first.borrow().login_prompt.is_open());
}

#[test]
fn auth_events_drive_the_session_user() {
    let store = SessionStore::new(None, PatientId(2));
    let mut rx = store.subscribe();

    let state = store.apply_auth(AuthEvent::SignedIn(nurse()));
    assert!(state.is_authenticated());
    assert_eq!(store.user(), Some(nurse()));
    assert!(rx.has_changed().expect("sender alive"));
    rx.mark_unchanged();

    let state = store.apply_auth(AuthEvent::SignedOut);
    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(store.user(), None);
    assert!(rx.has_changed().expect("sender alive"));
}
