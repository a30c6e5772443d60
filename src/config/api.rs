//! Backend API configuration
//!
//! The base URL is handed to whichever component talks to the backend.
//! Plan statistics never read it.

use serde::Deserialize;

use super::error::ValidationError;
use super::Environment;

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the membership backend, e.g. `https://api.example.com/v1`
    pub base_url: String,
}

impl ApiConfig {
    /// Build the URL for an endpoint path below the base URL.
    ///
    /// Exactly one slash separates the two, whatever either side carries.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate API configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("api.base_url"));
        }

        let rest = if let Some(rest) = self.base_url.strip_prefix("https://") {
            rest
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            if *environment == Environment::Production {
                return Err(ValidationError::BaseUrlMustBeHttps);
            }
            rest
        } else {
            return Err(ValidationError::InvalidBaseUrl);
        };

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        assert_eq!(
            api("https://api.example.com/v1/").endpoint("/plans"),
            "https://api.example.com/v1/plans"
        );
        assert_eq!(
            api("https://api.example.com/v1").endpoint("plans"),
            "https://api.example.com/v1/plans"
        );
    }

    #[test]
    fn test_valid_urls() {
        assert!(api("http://localhost:3000").validate(&Environment::Development).is_ok());
        assert!(api("https://api.example.com/v1").validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_empty_url_is_missing() {
        assert_eq!(
            api("").validate(&Environment::Development),
            Err(ValidationError::MissingRequired("api.base_url"))
        );
    }

    #[test]
    fn test_invalid_scheme() {
        assert_eq!(
            api("ftp://api.example.com").validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl)
        );
        assert_eq!(
            api("api.example.com").validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_missing_host() {
        assert_eq!(
            api("https:///v1").validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_production_requires_https() {
        assert_eq!(
            api("http://api.example.com").validate(&Environment::Production),
            Err(ValidationError::BaseUrlMustBeHttps)
        );
        assert!(api("http://api.example.com").validate(&Environment::Staging).is_ok());
    }
}
