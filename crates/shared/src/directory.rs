//! Host-to-Tenant Resolution
//!
//! Maps the raw Host header value to a tenant. Hosts are matched exactly,
//! port included, with no case folding: `tenant1.localhost:3000` and
//! `tenant1.localhost` are different keys.

use std::collections::HashMap;

use crate::{TableError, TenantId};

/// Immutable host -> tenant lookup
#[derive(Debug, Clone, Default)]
pub struct TenantDirectory {
    hosts: HashMap<String, TenantId>,
}

impl TenantDirectory {
    /// Create an empty directory (every host resolves to the default tenant)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host mapping, replacing any earlier mapping for the same host
    pub fn with_host(mut self, host: impl Into<String>, tenant: impl Into<TenantId>) -> Self {
        self.hosts.insert(host.into(), tenant.into());
        self
    }

    /// Resolve a host to its tenant, falling back to the default tenant
    pub fn resolve(&self, host: &str) -> TenantId {
        self.hosts
            .get(host)
            .cloned()
            .unwrap_or_else(TenantId::default_tenant)
    }

    /// Number of configured hosts
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Distinct tenants reachable through this directory
    pub fn tenants(&self) -> Vec<&TenantId> {
        let mut tenants: Vec<&TenantId> = self.hosts.values().collect();
        tenants.sort();
        tenants.dedup();
        tenants
    }

    /// Reject mappings that would make resolution ambiguous
    pub fn validate(&self) -> Result<(), TableError> {
        for (host, tenant) in &self.hosts {
            if host.is_empty() {
                return Err(TableError::EmptyHost {
                    tenant: tenant.to_string(),
                });
            }
            // "default" means "no tenant matched"; a host may not claim it
            if tenant.is_default() {
                return Err(TableError::ReservedTenant { host: host.clone() });
            }
            // The tenant travels in a header value
            if tenant.as_str().is_empty() || !tenant.as_str().bytes().all(|b| b.is_ascii_graphic()) {
                return Err(TableError::InvalidTenant {
                    tenant: tenant.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<H, T> FromIterator<(H, T)> for TenantDirectory
where
    H: Into<String>,
    T: Into<TenantId>,
{
    fn from_iter<I: IntoIterator<Item = (H, T)>>(iter: I) -> Self {
        Self {
            hosts: iter
                .into_iter()
                .map(|(host, tenant)| (host.into(), tenant.into()))
                .collect(),
        }
    }
}
