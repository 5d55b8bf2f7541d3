//! Inkwell core types and utilities

pub mod auth;
pub mod forms;
pub mod tracing;
pub mod types;
pub mod validation;

pub use auth::AuthConfig;
pub use forms::{FieldError, LoginForm, RegisterForm, ValidationErrors};
pub use types::{AuthResponse, LoginRequest, RegisterRequest, TokenPair, User};
