//! Shared application state

use std::sync::Arc;

use hostmap_shared::{builtin, Classifier, TableError};

use crate::routing::RouteFilter;

/// State handed to every handler and middleware. Everything inside is
/// read-only after startup, so clones are cheap `Arc` copies.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub route_filter: Arc<RouteFilter>,
}

impl AppState {
    pub fn new(classifier: Classifier, route_filter: RouteFilter) -> Self {
        Self {
            classifier: Arc::new(classifier),
            route_filter: Arc::new(route_filter),
        }
    }

    /// State over the compiled-in tenant tables and the default route filter
    pub fn builtin() -> Result<Self, TableError> {
        Ok(Self::new(builtin::classifier()?, RouteFilter::default()))
    }
}
