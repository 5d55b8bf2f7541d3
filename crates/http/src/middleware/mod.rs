//! Middleware components for HTTP request processing

pub mod guard;

pub use guard::route_guard_middleware;
