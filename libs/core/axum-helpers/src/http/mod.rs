//! HTTP cross-cutting concerns: CORS and security headers.

pub mod cors;
pub mod security;

pub use cors::cors_layer_from_env;
pub use security::security_headers;
