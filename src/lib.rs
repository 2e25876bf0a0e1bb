//! Client library for the Capturoo lead-capture API.
//!
//! The `capturoo` binary is a thin shell over these modules: credentials are
//! loaded and refreshed by [`session`], resources are managed through
//! [`remote::RemoteClient`], and leads are streamed out by [`export`].

pub mod config;
pub mod credentials;
pub mod error;
pub mod events;
pub mod export;
pub mod identity;
pub mod model;
pub mod remote;
pub mod session;
