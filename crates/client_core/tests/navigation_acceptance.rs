use client_core::{
    CaptureKind, Disclosure, Effect, Location, SessionStore, Shell, ShellConfig, View,
    QUICK_ACTIONS,
};
use shared::domain::{CareRole, PatientId, User, UserId};

fn physician() -> User {
    User::new(UserId(1), "Dr. Sarah Johnson", CareRole::Physician)
}

#[test]
fn gated_route_is_not_restored_after_sign_in_acceptance() {
    let mut shell = Shell::new(
        SessionStore::new(None, PatientId(1)),
        ShellConfig::default(),
        Location::login(),
    );

    shell.navigate("/discharge-readiness");
    assert_eq!(shell.frame().view, View::Login);

    shell.sign_in(physician());
    let frame = shell.frame();
    assert_ne!(frame.view, View::DischargeReadiness);
    assert_eq!(frame.view, View::Overview);
}

#[test]
fn take_photo_for_patient_three_acceptance() {
    let mut shell = Shell::new(
        SessionStore::new(Some(physician()), PatientId(1)),
        ShellConfig::default(),
        Location::home(),
    );

    assert_eq!(shell.toggle_patient_selector(), Disclosure::Open);
    shell.select_patient(PatientId(3)).expect("select patient 3");

    assert_eq!(shell.toggle_quick_actions(), Disclosure::Open);
    let effects = shell
        .select_quick_action(CaptureKind::Photo)
        .expect("select take photo");

    let navigations: Vec<_> = effects
        .iter()
        .filter_map(Effect::navigation_target)
        .map(Location::as_str)
        .collect();
    assert_eq!(navigations, ["/quick-capture/photo/3"]);

    let toasts = shell.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Camera access required");
}

#[test]
fn every_quick_action_from_every_tab_closes_the_menu_acceptance() {
    let tabs = [
        "/",
        "/patient-profile/2",
        "/clinical-information",
        "/safety-environmental",
        "/discharge-readiness",
    ];

    for start in tabs {
        for action in QUICK_ACTIONS.iter() {
            let mut shell = Shell::new(
                SessionStore::new(Some(physician()), PatientId(2)),
                ShellConfig::default(),
                Location::from(start),
            );
            shell.toggle_quick_actions();
            let effects = shell.select_quick_action(action.kind).expect("menu open");

            assert_eq!(
                effects.iter().filter_map(Effect::navigation_target).count(),
                1,
                "{start} {}",
                action.label
            );
            assert_eq!(shell.location(), &Location::quick_capture(action.kind, PatientId(2)));
            assert!(shell.frame().quick_actions.is_none());
        }
    }
}

#[test]
fn sign_out_mid_session_gates_every_later_navigation_acceptance() {
    let mut shell = Shell::new(
        SessionStore::new(Some(physician()), PatientId(5)),
        ShellConfig::default(),
        Location::from("/clinical-information"),
    );
    assert_eq!(shell.frame().view, View::ClinicalInformation);

    shell.sign_out();
    for path in ["/", "/clinical-information", "/form/safety/5", "/unknown"] {
        shell.navigate(path);
        let frame = shell.frame();
        assert_eq!(frame.location, Location::login(), "{path}");
        assert_eq!(frame.view, View::Login);
        assert!(frame.patient_selector.is_none());
        assert!(frame.quick_actions.is_none());
    }
}

#[test]
fn unknown_route_is_not_found_not_fatal_acceptance() {
    let mut shell = Shell::new(
        SessionStore::new(Some(physician()), PatientId(1)),
        ShellConfig::default(),
        Location::from("/medication-schedule"),
    );
    let frame = shell.frame();
    assert_eq!(frame.view, View::NotFound);
    assert!(frame.chrome.header);
    assert_eq!(frame.tab_bar.and_then(|bar| bar.active), None);
}
