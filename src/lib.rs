//! Unidirectional state container for a ride-request app.
//!
//! - [`mvi`] - action, state and reducer traits, `Scoped` selection results
//! - [`store`] - the store, subscriptions, demand and dedup
//! - [`app`] - the concrete state tree, actions, reducers and selectors
//! - [`effects`] / [`usecases`] - side-effect collaborators and their drivers
//! - [`session`] - session persistence observer
//! - [`config`], [`logging`], [`cli`], [`demo`] - the binary's ambient pieces

pub mod app;
pub mod cli;
pub mod config;
pub mod demo;
pub mod effects;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod store;
pub mod usecases;
