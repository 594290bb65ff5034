//! Demo pages
//!
//! Each page only reads the propagated tenant and picks its text from it.
//! Redirect decisions are made by the middleware, never here.

use axum::http::{header, HeaderMap};

use crate::routing::TenantHeader;

const TENANT1: &str = "tenant1";
const TENANT2: &str = "tenant2";

fn marker(tenant: &str, target: &str) -> &'static str {
    if tenant == target {
        "YOU ARE HERE"
    } else {
        "Not Active"
    }
}

pub async fn home(tenant: TenantHeader, headers: HeaderMap) -> String {
    let tenant = tenant.as_str();
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    format!(
        "Multi-Tenant Redirect POC\n\
         \n\
         Current Tenant: {tenant}\n\
         Host: {host}\n\
         \n\
         Tenant 1 ({t1})\n\
         \x20 /company  -> redirects to /about\n\
         \x20 /about    -> no redirect (destination page)\n\
         \x20 /old-page -> redirects to /new-page\n\
         \n\
         Tenant 2 ({t2})\n\
         \x20 /company  -> NO redirect (works normally)\n\
         \x20 /contact  -> redirects to /support\n",
        t1 = marker(tenant, TENANT1),
        t2 = marker(tenant, TENANT2),
    )
}

pub async fn about(tenant: TenantHeader) -> String {
    let note = match tenant.as_str() {
        TENANT1 => "If you requested /company, you were redirected here with a 308.",
        _ => "This page is served directly; no redirect points here for your tenant.",
    };
    format!("About Page\n\nCurrent Tenant: {}\n\n{}\n", tenant.as_str(), note)
}

pub async fn company(tenant: TenantHeader) -> String {
    let note = match tenant.as_str() {
        TENANT1 => {
            "Tenant 1 should never see this page: /company redirects to /about. \
             If you are reading this, the redirect did not fire."
        }
        TENANT2 => "Tenant 2 has no redirect for /company, so the page works normally.",
        _ => "You are on the default tenant. This page works normally.",
    };
    format!("Company Page\n\nCurrent Tenant: {}\n\n{}\n", tenant.as_str(), note)
}

pub async fn contact(tenant: TenantHeader) -> String {
    let note = match tenant.as_str() {
        TENANT2 => {
            "Tenant 2 should never see this page: /contact redirects to /support. \
             If you are reading this, the redirect did not fire."
        }
        _ => "No redirect for /contact on this tenant.",
    };
    format!("Contact Page\n\nCurrent Tenant: {}\n\n{}\n", tenant.as_str(), note)
}

pub async fn support(tenant: TenantHeader) -> String {
    let note = match tenant.as_str() {
        TENANT2 => "If you requested /contact, you were redirected here with a 308.",
        _ => "This page is served directly.",
    };
    format!("Support Page\n\nCurrent Tenant: {}\n\n{}\n", tenant.as_str(), note)
}

pub async fn old_page(tenant: TenantHeader) -> String {
    let note = match tenant.as_str() {
        TENANT1 => {
            "Tenant 1 should never see this page: /old-page redirects to /new-page. \
             If you are reading this, the redirect did not fire."
        }
        _ => "No redirect for /old-page on this tenant.",
    };
    format!("Old Page\n\nCurrent Tenant: {}\n\n{}\n", tenant.as_str(), note)
}

pub async fn new_page(tenant: TenantHeader) -> String {
    let note = match tenant.as_str() {
        TENANT1 => "If you requested /old-page, you were redirected here with a 308.",
        _ => "This page is served directly.",
    };
    format!("New Page\n\nCurrent Tenant: {}\n\n{}\n", tenant.as_str(), note)
}
