use crate::app::errors::ErrorQueue;
use crate::app::model::{Location, NewRideRequest, NewRideWaypoints, RideOption, RideOptionId};
use crate::mvi::State;

/// How far the ride request has been filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PickMeUpProgress {
    #[default]
    Initial,
    WaypointsDetermined(NewRideWaypoints),
    RideRequestReady(NewRideRequest),
    /// Sent to the ride service, waiting for its answer.
    Confirming(NewRideRequest),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presentation {
    #[default]
    Hidden,
    Presented,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RideOptionPicker {
    pub options: Vec<RideOption>,
    pub selected: Option<RideOptionId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickMeUpState {
    pub pickup: Option<Location>,
    pub progress: PickMeUpProgress,
    pub dropoff_picker: Presentation,
    pub ride_options: RideOptionPicker,
    pub errors: ErrorQueue,
}

impl State for PickMeUpState {}

impl PickMeUpState {
    pub fn waypoints(&self) -> Option<&NewRideWaypoints> {
        match &self.progress {
            PickMeUpProgress::Initial => None,
            PickMeUpProgress::WaypointsDetermined(waypoints) => Some(waypoints),
            PickMeUpProgress::RideRequestReady(request)
            | PickMeUpProgress::Confirming(request) => Some(&request.waypoints),
        }
    }

    /// The request, if it is complete and not yet sent.
    pub fn ready_request(&self) -> Option<&NewRideRequest> {
        match &self.progress {
            PickMeUpProgress::RideRequestReady(request) => Some(request),
            _ => None,
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.progress, PickMeUpProgress::Confirming(_))
    }
}
