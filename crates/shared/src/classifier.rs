//! Request classification
//!
//! Combines the host directory and the redirect table into the single
//! per-request decision: redirect to another path, or pass the request
//! through annotated with its tenant.

use crate::{RedirectTable, TableError, TenantDirectory, TenantId};

/// The parts of an inbound request the classifier looks at
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Raw Host header value, port included
    pub host: &'a str,
    /// Request path, without query string
    pub path: &'a str,
    /// Query string without the leading `?`
    pub query: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(host: &'a str, path: &'a str, query: Option<&'a str>) -> Self {
        Self { host, path, query }
    }

    /// Split a path-and-query string such as `/old-page?x=1`
    pub fn from_target(host: &'a str, target: &'a str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self::new(host, path, Some(query)),
            None => Self::new(host, target, None),
        }
    }
}

/// A permanent redirect to another path on the same host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub tenant: TenantId,
    /// Destination path with the original query string re-attached
    pub location: String,
}

/// Result of classifying one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Terminal: answer with a 308 to `location`
    Redirect(Redirect),
    /// Continue to the handlers with the tenant attached
    PassThrough { tenant: TenantId },
}

impl Outcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect(_))
    }

    pub fn tenant(&self) -> &TenantId {
        match self {
            Outcome::Redirect(redirect) => &redirect.tenant,
            Outcome::PassThrough { tenant } => tenant,
        }
    }
}

/// Immutable classifier shared by every request
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    directory: TenantDirectory,
    redirects: RedirectTable,
}

impl Classifier {
    /// Build a classifier, rejecting tables that could loop or misroute
    pub fn new(directory: TenantDirectory, redirects: RedirectTable) -> Result<Self, TableError> {
        directory.validate()?;
        redirects.validate()?;
        Ok(Self {
            directory,
            redirects,
        })
    }

    /// Build a classifier without validation
    pub fn new_unchecked(directory: TenantDirectory, redirects: RedirectTable) -> Self {
        Self {
            directory,
            redirects,
        }
    }

    /// Classify one request. Total and side-effect free.
    pub fn classify(&self, request: &RequestContext<'_>) -> Outcome {
        let tenant = self.directory.resolve(request.host);

        match self.redirects.lookup(&tenant, request.path) {
            Some(destination) => Outcome::Redirect(Redirect {
                location: build_location(destination, request.query),
                tenant,
            }),
            None => Outcome::PassThrough { tenant },
        }
    }

    pub fn directory(&self) -> &TenantDirectory {
        &self.directory
    }

    pub fn redirects(&self) -> &RedirectTable {
        &self.redirects
    }
}

/// Substitute the path, keeping the query string untouched
fn build_location(destination: &str, query: Option<&str>) -> String {
    match query {
        Some(query) if !query.is_empty() => format!("{}?{}", destination, query),
        _ => destination.to_string(),
    }
}
