//! Per-request tenant context
//!
//! The middleware hands the resolved tenant downstream two ways: the
//! `x-tenant` request header and a [`TenantContext`] request extension.
//! Page handlers read the header through [`TenantHeader`].

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use hostmap_shared::{TenantId, TENANT_HEADER};

/// Request extension inserted on pass-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant: TenantId,
}

/// Tenant as seen by page handlers: the `x-tenant` header, or `"default"`
/// when it is missing or unreadable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantHeader(pub TenantId);

impl TenantHeader {
    pub fn tenant(&self) -> &TenantId {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TenantHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tenant = parts
            .headers
            .get(TENANT_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(TenantId::from)
            .unwrap_or_default();

        Ok(TenantHeader(tenant))
    }
}
