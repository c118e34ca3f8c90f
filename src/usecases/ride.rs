use std::sync::Arc;
use std::time::Duration;

use crate::app::model::Location;
use crate::app::new_ride::NewRideAction;
use crate::app::pick_me_up::PickMeUpAction;
use crate::app::{selectors, AppStore};
use crate::effects::{LocationLocator, NewRideRemoteApi};

use super::within;

/// Locating the user, loading ride options and confirming a ride.
pub struct RideUseCases {
    store: AppStore,
    locator: Arc<dyn LocationLocator>,
    rides: Arc<dyn NewRideRemoteApi>,
    timeout: Duration,
}

impl RideUseCases {
    pub fn new(
        store: AppStore,
        locator: Arc<dyn LocationLocator>,
        rides: Arc<dyn NewRideRemoteApi>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            locator,
            rides,
            timeout,
        }
    }

    /// Find the pickup location, then the ride options serving it.
    pub async fn determine_location(&self) {
        match within(self.timeout, self.locator.current_location()).await {
            Ok(location) => {
                tracing::info!(location = %location.name, "Location determined");
                self.store
                    .dispatch(NewRideAction::LocationDetermined(location.clone()).into());
                self.load_ride_options(&location).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Location lookup failed");
                self.store.dispatch(
                    NewRideAction::LocationFailed(e.to_error_message("Location Unavailable"))
                        .into(),
                );
            }
        }
    }

    pub async fn load_ride_options(&self, pickup: &Location) {
        match within(self.timeout, self.rides.ride_options(pickup)).await {
            Ok(options) => {
                tracing::debug!(count = options.len(), "Ride options loaded");
                self.store
                    .dispatch(PickMeUpAction::RideOptionsLoaded(options).into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Loading ride options failed");
                self.store.dispatch(
                    PickMeUpAction::RequestFailed(e.to_error_message("Ride Options Unavailable"))
                        .into(),
                );
            }
        }
    }

    /// Confirm the ready ride request. Returns false when there is none.
    pub async fn confirm_ride(&self) -> bool {
        let state = self.store.state();
        let (Some(session), Some(request)) = (
            selectors::user_session(&state).into_option(),
            selectors::pick_me_up(&state)
                .into_option()
                .and_then(|pick_me_up| pick_me_up.ready_request().cloned()),
        ) else {
            tracing::warn!("Ride confirmation requested without a ready request");
            return false;
        };

        self.store.dispatch(PickMeUpAction::ConfirmRequested.into());
        match within(
            self.timeout,
            self.rides.request_ride(&session.remote_session, &request),
        )
        .await
        {
            Ok(ride) => {
                tracing::info!(ride = %ride.id, option = request.ride_option.as_str(), "Ride confirmed");
                self.store
                    .dispatch(PickMeUpAction::RideRequestConfirmed(ride).into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ride request failed");
                self.store.dispatch(
                    PickMeUpAction::RequestFailed(e.to_error_message("Ride Request Failed"))
                        .into(),
                );
            }
        }
        true
    }
}
