mod common;

use std::sync::Arc;

use common::session;
use rideflow::app::launch::LaunchAction;
use rideflow::app::{new_store, SessionAction};
use rideflow::effects::{
    FileSessionRepository, InMemorySessionRepository, UserSessionRepository,
};
use rideflow::session::SessionPersistence;
use rideflow::usecases::LaunchUseCase;

#[test]
fn sign_in_saves_and_sign_out_deletes() {
    let store = new_store();
    let repository = Arc::new(InMemorySessionRepository::new());
    let persistence = SessionPersistence::attach(&store, repository.clone());
    assert!(persistence.is_active());

    store.dispatch(LaunchAction::FinishedLaunching { session: None }.into());
    assert_eq!(repository.read().unwrap(), None);

    store.dispatch(SessionAction::AuthSucceeded(session()).into());
    assert_eq!(repository.read().unwrap(), Some(session()));

    store.dispatch(SessionAction::SignedOut.into());
    assert_eq!(repository.read().unwrap(), None);
}

#[test]
fn launch_phase_does_not_wipe_the_stored_session() {
    let store = new_store();
    let repository = Arc::new(InMemorySessionRepository::with_session(session()));
    let _persistence = SessionPersistence::attach(&store, repository.clone());

    // Still launching: the session is out of scope but must survive.
    assert_eq!(repository.read().unwrap(), Some(session()));

    LaunchUseCase::new(store.clone(), repository.clone()).run();
    assert_eq!(repository.read().unwrap(), Some(session()));
}

#[test]
fn session_survives_a_restart_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = new_store();
        let repository = Arc::new(FileSessionRepository::new(&path));
        let _persistence = SessionPersistence::attach(&store, repository.clone());
        LaunchUseCase::new(store.clone(), repository).run();
        store.dispatch(SessionAction::AuthSucceeded(session()).into());
    }

    let store = new_store();
    LaunchUseCase::new(store.clone(), Arc::new(FileSessionRepository::new(&path))).run();
    assert_eq!(
        rideflow::app::selectors::user_session(&store.state()).into_option(),
        Some(session())
    );
}
