//! hostmap API library
//!
//! axum server components: per-tenant redirect middleware, the demo pages
//! that read the propagated tenant, and health probes.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::{Config, ConfigError, LogFormat};
pub use error::ApiError;
pub use routing::{tenant_redirect_middleware, RouteFilter, TenantContext, TenantHeader};
pub use state::AppState;
