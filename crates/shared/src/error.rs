//! Error types for table construction

use thiserror::Error;

/// Problems found while validating the static configuration tables.
///
/// These only surface at startup; classification itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Empty host mapped to tenant {tenant}")]
    EmptyHost { tenant: String },

    #[error("Host {host} is mapped to the reserved tenant \"default\"")]
    ReservedTenant { host: String },

    #[error("Tenant identifier {tenant:?} must be non-empty visible ASCII")]
    InvalidTenant { tenant: String },

    #[error("Invalid redirect path for tenant {tenant}: {path:?} ({reason})")]
    InvalidPath {
        tenant: String,
        path: String,
        reason: &'static str,
    },

    #[error("Redirect for tenant {tenant} points {path} at itself")]
    SelfRedirect { tenant: String, path: String },

    #[error("Redirect cycle for tenant {tenant}: {}", .cycle.join(" -> "))]
    Cycle { tenant: String, cycle: Vec<String> },
}
