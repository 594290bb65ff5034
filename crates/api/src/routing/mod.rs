//! Host-based tenant routing
//!
//! This module classifies every request by its Host header before any page
//! handler runs:
//! - Excluded asset paths skip classification entirely
//! - Configured (tenant, path) pairs answer with a 308 redirect
//! - Everything else is forwarded with `x-tenant` attached

mod extract;
mod filter;
mod tenant;

pub use extract::{TenantContext, TenantHeader};
pub use filter::RouteFilter;
pub use tenant::tenant_redirect_middleware;
