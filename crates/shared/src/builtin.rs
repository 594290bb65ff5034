//! Built-in tenant configuration
//!
//! The deployed host and redirect tables. These are the whole configuration
//! surface of the classifier; there is no runtime reload.

use crate::{Classifier, RedirectTable, TableError, TenantDirectory};

/// Host header value -> tenant
pub const TENANT_HOSTS: &[(&str, &str)] = &[
    ("tenant1.localhost:3000", "tenant1"),
    ("tenant2.localhost:3000", "tenant2"),
    ("tenant1domain.com", "tenant1"),
    ("tenant2domain.com", "tenant2"),
    ("www.tenant1domain.com", "tenant1"),
    ("www.tenant2domain.com", "tenant2"),
];

/// Tenant -> (source path, destination path)
pub const TENANT_REDIRECTS: &[(&str, &[(&str, &str)])] = &[
    ("tenant1", &[("/company", "/about"), ("/old-page", "/new-page")]),
    // tenant2 keeps /company as a regular page
    ("tenant2", &[("/contact", "/support")]),
];

pub fn directory() -> TenantDirectory {
    TENANT_HOSTS.iter().copied().collect()
}

pub fn redirects() -> RedirectTable {
    TENANT_REDIRECTS
        .iter()
        .fold(RedirectTable::new(), |table, (tenant, redirects)| {
            table.with_tenant(*tenant, redirects.iter().copied())
        })
}

/// Validated classifier over the built-in tables
pub fn classifier() -> Result<Classifier, TableError> {
    Classifier::new(directory(), redirects())
}
