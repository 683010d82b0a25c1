//! API Configuration
//!
//! Where the backend lives. Baked in at build time.

/// Same-origin by default: the panel is served by the backend itself.
const DEFAULT_API_BASE: &str = "";

/// Backend location used to build request URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `ADMIN_API_BASE` from the build environment (e.g. `ADMIN_API_BASE=http://localhost:5000 trunk build`)
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ADMIN_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an absolute API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_keeps_absolute_path() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/articles"), "/articles");
        assert_eq!(config.url("admin/products/3"), "/admin/products/3");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.url("/admin/articles"), "http://localhost:5000/admin/articles");
    }
}
