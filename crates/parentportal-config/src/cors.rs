use std::env;

/// Allowed browser origins for the portal front end.
///
/// `ALLOWED_ORIGINS` is a comma-separated list; a single `*` allows any origin
/// (credentials are then not allowed by the CORS layer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_any_origin: bool,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let allow_any_origin = allowed_origins.iter().any(|o| o == "*");

        Self {
            allowed_origins: allowed_origins.into_iter().filter(|o| o != "*").collect(),
            allow_any_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin_list() {
        let config = CorsConfig::parse(" http://a.test , ,http://b.test");
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.allow_any_origin);
    }

    #[test]
    fn test_parse_wildcard() {
        let config = CorsConfig::parse("*");
        assert!(config.allow_any_origin);
        assert!(config.allowed_origins.is_empty());
    }
}
