//! Route applicability filter
//!
//! Static assets and framework-internal paths never reach the classifier:
//! they get no tenant header and can never be redirected.

/// Path prefixes (after the leading `/`) that bypass classification
const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["_next/static", "_next/image", "favicon.ico"];

/// Substrings anywhere in the path that bypass classification
const DEFAULT_EXCLUDED_FRAGMENTS: &[&str] = &[".png", ".jpg", ".svg"];

/// Decides which request paths the tenant classifier applies to
#[derive(Debug, Clone)]
pub struct RouteFilter {
    excluded_prefixes: Vec<String>,
    excluded_fragments: Vec<String>,
}

impl Default for RouteFilter {
    fn default() -> Self {
        Self {
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            excluded_fragments: DEFAULT_EXCLUDED_FRAGMENTS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl RouteFilter {
    /// A filter that excludes nothing
    pub fn allow_all() -> Self {
        Self {
            excluded_prefixes: Vec::new(),
            excluded_fragments: Vec::new(),
        }
    }

    /// Exclude paths starting with `/{prefix}`
    pub fn exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_prefixes.push(prefix.into());
        self
    }

    /// Exclude paths containing `fragment`
    pub fn exclude_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.excluded_fragments.push(fragment.into());
        self
    }

    /// Whether the classifier should see a request for `path`
    pub fn applies(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);

        if self
            .excluded_prefixes
            .iter()
            .any(|prefix| rest.starts_with(prefix.as_str()))
        {
            return false;
        }

        !self
            .excluded_fragments
            .iter()
            .any(|fragment| rest.contains(fragment.as_str()))
    }
}
