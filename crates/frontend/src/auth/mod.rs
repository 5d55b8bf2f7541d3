//! Sign-in and sign-up handling

pub mod controller;

pub use controller::{AuthController, SubmitOutcome};
