//! HTTP API gateway for the algotrace teaching endpoints.
//!
//! Exposes step-recording binary and linear search as JSON endpoints for
//! the visualisation front-end. Each request is independent: the only
//! shared state is the read-only [`config::GatewayConfig`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
