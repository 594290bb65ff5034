//! hostmap shared core
//!
//! Framework-free tenant classification: host -> tenant resolution, the
//! per-tenant redirect table and the classifier that combines them.

pub mod builtin;
pub mod classifier;
pub mod directory;
pub mod error;
pub mod redirects;
pub mod types;

pub use classifier::{Classifier, Outcome, Redirect, RequestContext};
pub use directory::TenantDirectory;
pub use error::TableError;
pub use redirects::{RedirectTable, TableStats};
pub use types::*;
