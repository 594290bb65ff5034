//! Per-tenant redirect table
//!
//! Maps tenant -> (source path -> destination path). Paths are compared as
//! exact, case-sensitive strings with no query string and no trailing-slash
//! normalization.

use serde::Serialize;
use std::collections::HashMap;

use crate::{TableError, TenantId};

/// Immutable tenant -> {source -> destination} table
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    tenants: HashMap<TenantId, HashMap<String, String>>,
}

/// Table size summary, reported by the health endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub tenants: usize,
    pub redirects: usize,
}

impl RedirectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tenant's redirects, merging with any already registered.
    ///
    /// An empty iterator still registers the tenant, with no redirects.
    pub fn with_tenant<I, S, D>(mut self, tenant: impl Into<TenantId>, redirects: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        let entry = self.tenants.entry(tenant.into()).or_default();
        entry.extend(
            redirects
                .into_iter()
                .map(|(source, destination)| (source.into(), destination.into())),
        );
        self
    }

    /// Destination for `path` under `tenant`, if one is configured
    pub fn lookup(&self, tenant: &TenantId, path: &str) -> Option<&str> {
        self.tenants
            .get(tenant)?
            .get(path)
            .map(String::as_str)
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            tenants: self.tenants.len(),
            redirects: self.tenants.values().map(HashMap::len).sum(),
        }
    }

    /// Check every entry before the table goes live.
    ///
    /// Rejects relative or query-bearing paths, self-redirects and redirect
    /// cycles (`/a -> /b`, `/b -> /a`). Chains that terminate are allowed.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut tenants: Vec<&TenantId> = self.tenants.keys().collect();
        tenants.sort();

        for tenant in tenants {
            let redirects = &self.tenants[tenant];
            let mut sources: Vec<&String> = redirects.keys().collect();
            sources.sort();

            for source in &sources {
                let destination = &redirects[*source];
                check_path(tenant, source)?;
                check_path(tenant, destination)?;

                if *source == destination {
                    return Err(TableError::SelfRedirect {
                        tenant: tenant.to_string(),
                        path: source.to_string(),
                    });
                }
            }

            for source in sources {
                if let Some(cycle) = find_cycle(redirects, source) {
                    return Err(TableError::Cycle {
                        tenant: tenant.to_string(),
                        cycle,
                    });
                }
            }
        }

        Ok(())
    }
}

fn check_path(tenant: &TenantId, path: &str) -> Result<(), TableError> {
    let reason = if path.is_empty() {
        "empty"
    } else if !path.starts_with('/') {
        "must start with '/'"
    } else if path.contains('?') || path.contains('#') {
        "must not carry a query or fragment"
    } else if !path.bytes().all(|b| b.is_ascii_graphic()) {
        "must be visible ASCII"
    } else {
        return Ok(());
    };

    Err(TableError::InvalidPath {
        tenant: tenant.to_string(),
        path: path.to_string(),
        reason,
    })
}

/// Follow redirects from `start`; returns the loop if the chain revisits a path
fn find_cycle(redirects: &HashMap<String, String>, start: &str) -> Option<Vec<String>> {
    let mut chain: Vec<&str> = vec![start];
    let mut current = start;

    while let Some(next) = redirects.get(current) {
        if let Some(pos) = chain.iter().position(|seen| *seen == next.as_str()) {
            let mut cycle: Vec<String> = chain[pos..].iter().map(|p| p.to_string()).collect();
            cycle.push(next.clone());
            return Some(cycle);
        }
        chain.push(next.as_str());
        current = next.as_str();
    }

    None
}
