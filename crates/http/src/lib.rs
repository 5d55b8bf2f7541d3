//! Inkwell HTTP module
//!
//! The `client` feature provides the API client used by the front-end to talk
//! to the auth service. The `server` feature provides the page router and the
//! route guard middleware that keeps anonymous visitors off protected pages.

#[macro_use]
extern crate tracing;

pub mod error;

#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "client")]
pub mod client;

pub use error::HttpError;

#[cfg(feature = "server")]
pub use middleware::guard::{GuardDecision, RouteGuard};
#[cfg(feature = "server")]
pub use server::HttpServer;
