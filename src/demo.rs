//! Scripted session driven by the binary: launch, authenticate, request a
//! ride, look at the profile. Everything observable is printed from
//! subscriptions, the same way a UI would render it.

use std::sync::Arc;

use anyhow::{bail, Context};

use crate::app::launch::LaunchAction;
use crate::app::model::{NewAccount, RideOptionId};
use crate::app::new_ride::NewRideAction;
use crate::app::onboarding::{OnboardingAction, SignInAction, SignUpAction};
use crate::app::pick_me_up::PickMeUpAction;
use crate::app::signed_in::{ProfileAction, SignedInAction};
use crate::app::{
    new_store, selectors, Acknowledgement, AppReducer, AppStore, ErrorMessage, ErrorPresenter,
    ErrorSink,
};
use crate::cli::Cli;
use crate::config::{Config, ConfigStore};
use crate::effects::{
    FakeAuthRemoteApi, FakeLocationLocator, FakeNewRideRemoteApi, FileSessionRepository,
    InMemorySessionRepository, UserSessionRepository,
};
use crate::mvi::{Reducer, Scoped};
use crate::session::SessionPersistence;
use crate::store::{subscriber_fn, Dedup, Demand, Subscription};
use crate::usecases::{AuthUseCases, LaunchUseCase, ProfileUseCase, RideUseCases};

/// Prints each error and dismisses it straight away.
struct ConsoleErrorSink {
    scope: &'static str,
}

impl ErrorSink for ConsoleErrorSink {
    fn present(&self, error: &ErrorMessage, ack: Acknowledgement) {
        println!("  [{}] {}: {}", self.scope, error.title, error.message);
        ack.acknowledge();
    }
}

fn presenters(store: &AppStore) -> Vec<ErrorPresenter> {
    fn sink(scope: &'static str) -> Arc<dyn ErrorSink> {
        Arc::new(ConsoleErrorSink { scope })
    }

    vec![
        ErrorPresenter::attach(
            store,
            selectors::launch_errors,
            |e| LaunchAction::FinishedPresentingError(e).into(),
            sink("launch"),
        ),
        ErrorPresenter::attach(
            store,
            selectors::sign_in_errors,
            |e| SignInAction::FinishedPresentingError(e).into(),
            sink("sign in"),
        ),
        ErrorPresenter::attach(
            store,
            selectors::sign_up_errors,
            |e| SignUpAction::FinishedPresentingError(e).into(),
            sink("sign up"),
        ),
        ErrorPresenter::attach(
            store,
            selectors::getting_location_errors,
            |e| NewRideAction::FinishedPresentingError(e).into(),
            sink("location"),
        ),
        ErrorPresenter::attach(
            store,
            selectors::pick_me_up_errors,
            |e| PickMeUpAction::FinishedPresentingError(e).into(),
            sink("ride"),
        ),
        ErrorPresenter::attach(
            store,
            selectors::profile_errors,
            |e| ProfileAction::FinishedPresentingError(e).into(),
            sink("profile"),
        ),
    ]
}

/// Prints the active path whenever a phase changes.
fn phase_printer(store: &AppStore) -> Subscription {
    let subscription = store.subscribe(
        |state| Scoped::InScope(AppReducer::phase(state)),
        Dedup::Equal,
        Arc::new(subscriber_fn(|phase: Scoped<&'static str>| {
            if let Scoped::InScope(phase) = phase {
                println!("phase: {phase}");
            }
            Demand::NONE
        })),
    );
    subscription.request(Demand::unlimited());
    subscription
}

fn session_repository(config: &Config) -> Arc<dyn UserSessionRepository> {
    match &config.session.path {
        Some(path) => Arc::new(FileSessionRepository::new(path)),
        None => Arc::new(InMemorySessionRepository::new()),
    }
}

fn new_account(cli: &Cli) -> NewAccount {
    NewAccount {
        name: cli.name.clone(),
        email: cli.email.clone(),
        mobile_number: "555-0100".to_string(),
        password: cli.password.clone(),
    }
}

/// Run the whole script. Fails only when the flow cannot continue.
pub async fn run(cli: &Cli, config: &ConfigStore) -> anyhow::Result<()> {
    let config = config.get();
    let demo = &config.demo;
    let latency = demo.latency();
    let timeout = demo.request_timeout();

    let store = new_store();
    let sessions = session_repository(&config);
    let _phases = phase_printer(&store);
    let _presenters = presenters(&store);
    let _persistence = SessionPersistence::attach(&store, sessions.clone());

    let auth_api = Arc::new(FakeAuthRemoteApi::new(latency));
    let locator = if cli.fail_location || demo.fail_location {
        FakeLocationLocator::failing("location services are off", latency)
    } else {
        FakeLocationLocator::at(demo.pickup.to_location(), latency)
    };
    let ride_options = demo
        .ride_options
        .iter()
        .map(|option| option.to_ride_option())
        .collect::<Vec<_>>();
    let mut rides = FakeNewRideRemoteApi::new(ride_options, latency);
    if cli.reject_rides || demo.reject_ride_requests {
        rides = rides.rejecting_requests();
    }

    let auth = AuthUseCases::new(store.clone(), auth_api.clone(), timeout);
    let ride = RideUseCases::new(store.clone(), Arc::new(locator), Arc::new(rides), timeout);
    let profile = ProfileUseCase::new(store.clone(), auth_api, timeout);

    LaunchUseCase::new(store.clone(), sessions).run();

    if selectors::onboarding(&store.state()).is_in_scope() {
        store.dispatch(OnboardingAction::GoToSignIn.into());
        auth.sign_in(&cli.email, &cli.password).await;
    }
    if selectors::onboarding(&store.state()).is_in_scope() {
        println!("creating account for {}", cli.email);
        store.dispatch(OnboardingAction::GoToSignUp.into());
        auth.sign_up(&new_account(cli)).await;
    }
    let Some(session) = selectors::user_session(&store.state()).into_option() else {
        bail!("could not sign in as {}", cli.email);
    };
    println!("signed in as {} <{}>", session.profile.name, session.profile.email);

    let mut progress = store.values(selectors::pick_me_up_progress, Dedup::SameVariant);
    let progress_printer = tokio::spawn(async move {
        while let Some(progress) = progress.next().await {
            println!("  ride request: {progress:?}");
        }
    });

    ride.determine_location().await;
    if selectors::pick_me_up(&store.state()).is_in_scope() {
        request_ride(cli, &config, &store, &ride).await?;
    } else {
        println!("no pickup location, skipping the ride request");
    }
    if progress_printer.is_finished() {
        progress_printer.await.context("progress printer panicked")?;
    } else {
        progress_printer.abort();
    }

    store.dispatch(SignedInAction::PresentProfile.into());
    profile.load().await;
    if let Some(profile) = selectors::profile(&store.state())
        .into_option()
        .and_then(|sheet| sheet.profile)
    {
        println!("profile: {} / {} / {}", profile.name, profile.email, profile.mobile_number);
    }
    store.dispatch(SignedInAction::DismissProfile.into());

    if cli.sign_out {
        auth.sign_out().await;
        println!("signed out");
    }
    Ok(())
}

async fn request_ride(
    cli: &Cli,
    config: &Config,
    store: &AppStore,
    ride: &RideUseCases,
) -> anyhow::Result<()> {
    let dropoff = match &cli.dropoff {
        Some(name) => config
            .demo
            .dropoffs
            .iter()
            .find(|place| place.name.eq_ignore_ascii_case(name))
            .with_context(|| format!("unknown dropoff '{name}'"))?,
        None => config
            .demo
            .dropoffs
            .first()
            .context("no dropoffs configured")?,
    };
    let option = match &cli.ride_option {
        Some(id) => RideOptionId::new(id),
        None => config
            .demo
            .ride_options
            .first()
            .map(|option| RideOptionId::new(&option.id))
            .context("no ride options configured")?,
    };

    store.dispatch(PickMeUpAction::PresentDropoffPicker.into());
    store.dispatch(PickMeUpAction::DropoffLocationSelected(dropoff.to_location()).into());
    store.dispatch(PickMeUpAction::RideOptionSelected(option).into());

    if !ride.confirm_ride().await {
        bail!("ride request was not ready to confirm");
    }
    match selectors::waiting_for_pickup(&store.state()).into_option() {
        Some(waiting) => println!(
            "ride {} booked: {} -> {}",
            waiting.ride.id,
            waiting.ride.request.waypoints.pickup.name,
            waiting.ride.request.waypoints.dropoff.name
        ),
        None => println!("ride was not booked"),
    }
    Ok(())
}
