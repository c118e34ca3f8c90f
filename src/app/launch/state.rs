use crate::app::errors::ErrorQueue;
use crate::mvi::State;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchState {
    pub errors: ErrorQueue,
}

impl State for LaunchState {}
