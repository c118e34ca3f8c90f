mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{location, profile, requesting_store, ride_option, session, signed_in_store};
use rideflow::app::model::{Location, NewAccount, RideOptionId};
use rideflow::app::onboarding::{FormViewState, OnboardingAction};
use rideflow::app::launch::LaunchAction;
use rideflow::app::pick_me_up::{PickMeUpAction, PickMeUpProgress};
use rideflow::app::signed_in::SignedInAction;
use rideflow::app::{new_store, selectors, AppStore};
use rideflow::effects::{
    FakeAuthRemoteApi, FakeLocationLocator, FakeNewRideRemoteApi, InMemorySessionRepository,
    LocationLocator, RemoteError, UserSessionRepository,
};
use rideflow::mvi::Scoped;
use rideflow::usecases::{AuthUseCases, LaunchUseCase, ProfileUseCase, RideUseCases};

const TIMEOUT: Duration = Duration::from_secs(2);

fn welcome_store() -> AppStore {
    let store = new_store();
    store.dispatch(LaunchAction::FinishedLaunching { session: None }.into());
    store
}

fn auth(store: &AppStore) -> AuthUseCases {
    let api = FakeAuthRemoteApi::new(Duration::ZERO).with_account(profile(), "secret");
    AuthUseCases::new(store.clone(), Arc::new(api), TIMEOUT)
}

fn rides(store: &AppStore, locator: impl LocationLocator + 'static, api: FakeNewRideRemoteApi) -> RideUseCases {
    RideUseCases::new(store.clone(), Arc::new(locator), Arc::new(api), TIMEOUT)
}

fn ride_api() -> FakeNewRideRemoteApi {
    FakeNewRideRemoteApi::new(vec![ride_option("wallet"), ride_option("xl")], Duration::ZERO)
}

#[test]
fn launch_restores_persisted_session() {
    let store = new_store();
    let repository = Arc::new(InMemorySessionRepository::with_session(session()));
    LaunchUseCase::new(store.clone(), repository).run();
    assert_eq!(selectors::user_session(&store.state()), Scoped::InScope(session()));
}

#[test]
fn launch_without_session_goes_to_welcome() {
    let store = new_store();
    LaunchUseCase::new(store.clone(), Arc::new(InMemorySessionRepository::new())).run();
    assert!(selectors::onboarding(&store.state()).is_in_scope());
}

#[test]
fn unreadable_session_becomes_launch_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let store = new_store();
    let repository: Arc<dyn UserSessionRepository> =
        Arc::new(rideflow::effects::FileSessionRepository::new(&path));
    LaunchUseCase::new(store.clone(), repository).run();

    let errors = selectors::launch_errors(&store.state()).into_option().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().unwrap().title, "Launch Failed");
}

#[tokio::test]
async fn sign_in_with_valid_credentials_signs_in() {
    let store = welcome_store();
    store.dispatch(OnboardingAction::GoToSignIn.into());
    auth(&store).sign_in("grace@example.com", "secret").await;

    let session = selectors::user_session(&store.state()).into_option().unwrap();
    assert_eq!(session.profile, profile());
}

#[tokio::test]
async fn sign_in_with_wrong_password_queues_error() {
    let store = welcome_store();
    store.dispatch(OnboardingAction::GoToSignIn.into());
    auth(&store).sign_in("grace@example.com", "wrong").await;

    let sign_in = selectors::sign_in(&store.state()).into_option().unwrap();
    assert_eq!(sign_in.view, FormViewState::default());
    let error = sign_in.errors.first().unwrap();
    assert_eq!(error.title, "Sign In Failed");
    assert_eq!(error.message, RemoteError::InvalidCredentials.to_string());
}

#[tokio::test]
async fn sign_up_creates_account_and_signs_in() {
    let store = welcome_store();
    store.dispatch(OnboardingAction::GoToSignUp.into());
    let account = NewAccount {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        mobile_number: "555-0100".to_string(),
        password: "engine".to_string(),
    };
    auth(&store).sign_up(&account).await;

    let session = selectors::user_session(&store.state()).into_option().unwrap();
    assert_eq!(session.profile.email, "ada@example.com");
}

#[tokio::test]
async fn sign_out_returns_to_welcome() {
    let store = signed_in_store();
    auth(&store).sign_out().await;
    assert!(selectors::onboarding(&store.state()).is_in_scope());
}

#[tokio::test]
async fn location_then_ride_options() {
    let store = signed_in_store();
    let rides = rides(
        &store,
        FakeLocationLocator::at(location("Home"), Duration::ZERO),
        ride_api(),
    );
    rides.determine_location().await;

    let pick_me_up = selectors::pick_me_up(&store.state()).into_option().unwrap();
    assert_eq!(pick_me_up.pickup, Some(location("Home")));
    assert_eq!(pick_me_up.ride_options.options.len(), 2);
}

#[tokio::test]
async fn location_failure_stays_in_lookup_with_error() {
    let store = signed_in_store();
    let rides = rides(
        &store,
        FakeLocationLocator::failing("permission denied", Duration::ZERO),
        ride_api(),
    );
    rides.determine_location().await;

    let errors = selectors::getting_location_errors(&store.state()).into_option().unwrap();
    assert_eq!(errors.first().unwrap().title, "Location Unavailable");
}

struct StuckLocator;

#[async_trait]
impl LocationLocator for StuckLocator {
    async fn current_location(&self) -> Result<Location, RemoteError> {
        std::future::pending().await
    }
}

#[tokio::test(start_paused = true)]
async fn slow_location_times_out_into_an_error() {
    let store = signed_in_store();
    let rides = rides(&store, StuckLocator, ride_api());
    rides.determine_location().await;

    let errors = selectors::getting_location_errors(&store.state()).into_option().unwrap();
    assert_eq!(errors.first().unwrap().message, RemoteError::Timeout(TIMEOUT).to_string());
}

#[tokio::test]
async fn confirm_books_the_ride() {
    let store = requesting_store();
    store.dispatch(PickMeUpAction::DropoffLocationSelected(location("Office")).into());
    store.dispatch(PickMeUpAction::RideOptionSelected(RideOptionId::new("xl")).into());

    let rides = rides(&store, FakeLocationLocator::at(location("Home"), Duration::ZERO), ride_api());
    assert!(rides.confirm_ride().await);

    let waiting = selectors::waiting_for_pickup(&store.state()).into_option().unwrap();
    assert_eq!(waiting.ride.request.ride_option, RideOptionId::new("xl"));
    assert_eq!(waiting.ride.request.waypoints.dropoff, location("Office"));
}

#[tokio::test]
async fn rejected_ride_returns_to_ready_with_error() {
    let store = requesting_store();
    store.dispatch(PickMeUpAction::DropoffLocationSelected(location("Office")).into());
    store.dispatch(PickMeUpAction::RideOptionSelected(RideOptionId::new("wallet")).into());

    let rides = rides(
        &store,
        FakeLocationLocator::at(location("Home"), Duration::ZERO),
        ride_api().rejecting_requests(),
    );
    assert!(rides.confirm_ride().await);

    let pick_me_up = selectors::pick_me_up(&store.state()).into_option().unwrap();
    assert!(matches!(pick_me_up.progress, PickMeUpProgress::RideRequestReady(_)));
    assert_eq!(pick_me_up.errors.first().unwrap().title, "Ride Request Failed");
}

#[tokio::test]
async fn confirm_without_ready_request_does_nothing() {
    let store = requesting_store();
    let before = store.state();
    let rides = rides(&store, FakeLocationLocator::at(location("Home"), Duration::ZERO), ride_api());
    assert!(!rides.confirm_ride().await);
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn profile_loads_only_into_presented_sheet() {
    let store = welcome_store();
    store.dispatch(OnboardingAction::GoToSignIn.into());
    let api = Arc::new(FakeAuthRemoteApi::new(Duration::ZERO).with_account(profile(), "secret"));
    AuthUseCases::new(store.clone(), api.clone(), TIMEOUT)
        .sign_in("grace@example.com", "secret")
        .await;

    let use_case = ProfileUseCase::new(store.clone(), api, TIMEOUT);
    use_case.load().await;
    assert!(selectors::profile(&store.state()).is_out_of_scope());

    store.dispatch(SignedInAction::PresentProfile.into());
    use_case.load().await;
    let sheet = selectors::profile(&store.state()).into_option().unwrap();
    assert_eq!(sheet.profile, Some(profile()));
}

#[tokio::test]
async fn profile_failure_is_presented_in_the_sheet() {
    // The fake does not know this session's token.
    let store = signed_in_store();
    store.dispatch(SignedInAction::PresentProfile.into());
    let api = Arc::new(FakeAuthRemoteApi::new(Duration::ZERO));
    ProfileUseCase::new(store.clone(), api, TIMEOUT).load().await;

    let errors = selectors::profile_errors(&store.state()).into_option().unwrap();
    assert_eq!(errors.first().unwrap().title, "Profile Unavailable");
}
