//! Tenant Redirect Middleware
//!
//! Runs before every route handler. Resolves the tenant from the Host
//! header, then either answers with a 308 permanent redirect (method and
//! body preserved by the client) or forwards the request with the tenant
//! attached.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use hostmap_shared::{Outcome, RequestContext, TENANT_HEADER};

use super::TenantContext;
use crate::{error::ApiError, state::AppState};

/// Middleware that applies per-tenant redirects and propagates the tenant
pub async fn tenant_redirect_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if !state.route_filter.applies(request.uri().path()) {
        return next.run(request).await;
    }

    let outcome = {
        let host = request_host(&request);
        let uri = request.uri();
        let context = RequestContext::new(host, uri.path(), uri.query());
        let outcome = state.classifier.classify(&context);

        match &outcome {
            Outcome::Redirect(redirect) => tracing::debug!(
                tenant = %redirect.tenant,
                host,
                path = context.path,
                location = %redirect.location,
                "Tenant redirect"
            ),
            Outcome::PassThrough { tenant } => tracing::trace!(
                %tenant,
                host,
                path = context.path,
                "Tenant pass-through"
            ),
        }

        outcome
    };

    match outcome {
        Outcome::Redirect(redirect) => permanent_redirect(&redirect.location),
        Outcome::PassThrough { tenant } => {
            let value = match HeaderValue::from_str(tenant.as_str()) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(%tenant, error = %e, "Tenant is not a valid header value");
                    return ApiError::Internal.into_response();
                }
            };

            // Replaces anything the client sent under the same name
            request.headers_mut().insert(TENANT_HEADER, value.clone());
            request.extensions_mut().insert(TenantContext { tenant });

            let mut response = next.run(request).await;
            response.headers_mut().insert(TENANT_HEADER, value);
            response
        }
    }
}

/// Host header, falling back to the URI authority (HTTP/2 `:authority`)
fn request_host(request: &Request<Body>) -> &str {
    request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or("")
}

/// 308 with a `Location` header and an empty body
fn permanent_redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, value)]).into_response(),
        Err(e) => {
            tracing::error!(location, error = %e, "Redirect location is not a valid header value");
            ApiError::Internal.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, Method},
        middleware,
        routing::{get, post},
        Extension, Router,
    };
    use hostmap_shared::{Classifier, RedirectTable, TenantDirectory};
    use tower::ServiceExt;

    use crate::routing::RouteFilter;

    async fn echo_tenant(headers: HeaderMap) -> String {
        headers
            .get(TENANT_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("<none>")
            .to_string()
    }

    async fn echo_context(Extension(context): Extension<TenantContext>) -> String {
        context.tenant.to_string()
    }

    async fn overwrite_tenant() -> Response {
        ([(TENANT_HEADER, "spoofed")], "downstream").into_response()
    }

    fn app_with(state: AppState) -> Router {
        Router::new()
            .route("/", get(echo_tenant))
            .route("/about", get(echo_tenant))
            .route("/company", get(echo_tenant).post(echo_tenant))
            .route("/company/", get(echo_tenant))
            .route("/support", get(echo_tenant))
            .route("/context", get(echo_context))
            .route("/overwrite", get(overwrite_tenant))
            .route("/logo.png", get(echo_tenant))
            .route("/submit", post(echo_tenant))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                tenant_redirect_middleware,
            ))
            .with_state(state)
    }

    fn app() -> Router {
        app_with(AppState::builtin().unwrap())
    }

    fn request(host: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::HOST, host)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_tenant1_company_redirects_to_about() {
        let response = app()
            .oneshot(request("tenant1.localhost:3000", "/company"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/about");
        assert!(response.headers().get(TENANT_HEADER).is_none());
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_tenant1_about_passes_through() {
        let response = app()
            .oneshot(request("tenant1.localhost:3000", "/about"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(TENANT_HEADER).unwrap(), "tenant1");
        assert_eq!(body_string(response).await, "tenant1");
    }

    #[tokio::test]
    async fn test_tenant2_company_passes_through() {
        let response = app()
            .oneshot(request("tenant2.localhost:3000", "/company"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "tenant2");
    }

    #[tokio::test]
    async fn test_tenant2_contact_redirects_to_support() {
        let response = app()
            .oneshot(request("tenant2.localhost:3000", "/contact"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/support");
    }

    #[tokio::test]
    async fn test_unknown_host_passes_through_as_default() {
        let response = app()
            .oneshot(request("unknown.example.com", "/company"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(TENANT_HEADER).unwrap(), "default");
        assert_eq!(body_string(response).await, "default");
    }

    #[tokio::test]
    async fn test_redirect_preserves_query() {
        let response = app()
            .oneshot(request("tenant1.localhost:3000", "/old-page?x=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/new-page?x=1"
        );
    }

    #[tokio::test]
    async fn test_redirect_applies_to_any_method() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/company")
                    .header(header::HOST, "tenant1domain.com")
                    .body(Body::from("payload"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/about");
    }

    #[tokio::test]
    async fn test_trailing_slash_is_not_redirected() {
        let response = app()
            .oneshot(request("tenant1.localhost:3000", "/company/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "tenant1");
    }

    #[tokio::test]
    async fn test_client_supplied_tenant_is_replaced() {
        let mut req = request("tenant2.localhost:3000", "/support");
        req.headers_mut()
            .insert(TENANT_HEADER, HeaderValue::from_static("tenant1"));

        let response = app().oneshot(req).await.unwrap();

        assert_eq!(body_string(response).await, "tenant2");
    }

    #[tokio::test]
    async fn test_response_tenant_header_is_not_overwritten_downstream() {
        let response = app()
            .oneshot(request("tenant1.localhost:3000", "/overwrite"))
            .await
            .unwrap();

        assert_eq!(response.headers().get(TENANT_HEADER).unwrap(), "tenant1");
    }

    #[tokio::test]
    async fn test_tenant_context_extension() {
        let response = app()
            .oneshot(request("www.tenant2domain.com", "/context"))
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "tenant2");
    }

    #[tokio::test]
    async fn test_excluded_paths_skip_classification() {
        let response = app()
            .oneshot(request("tenant1.localhost:3000", "/logo.png"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(TENANT_HEADER).is_none());
        assert_eq!(body_string(response).await, "<none>");
    }

    #[tokio::test]
    async fn test_authority_used_without_host_header() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("http://tenant1.localhost:3000/company")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/about");
    }

    #[tokio::test]
    async fn test_missing_host_is_default() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers().get(TENANT_HEADER).unwrap(), "default");
    }

    #[tokio::test]
    async fn test_custom_tables() {
        let classifier = Classifier::new(
            TenantDirectory::new().with_host("shop.test", "shop"),
            RedirectTable::new().with_tenant("shop", [("/", "/submit")]),
        )
        .unwrap();
        let state = AppState::new(classifier, RouteFilter::allow_all());

        let response = app_with(state)
            .oneshot(request("shop.test", "/?utm=ads"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/submit?utm=ads"
        );
    }
}
