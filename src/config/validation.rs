//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Override header names must be valid and unique
//! - Bind address must parse as a socket address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid header name {name:?} in client_ip.headers")]
    InvalidHeaderName { name: String },

    #[error("header {name:?} listed more than once in client_ip.headers")]
    DuplicateHeaderName { name: String },

    #[error("invalid listener.bind_address {address:?}")]
    InvalidBindAddress { address: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            address: config.listener.bind_address.clone(),
        });
    }

    let mut seen = HashSet::new();
    for name in &config.client_ip.headers {
        match HeaderName::from_bytes(name.as_bytes()) {
            // HeaderName is lowercased, so duplicates compare case-insensitively.
            Ok(parsed) => {
                if !seen.insert(parsed) {
                    errors.push(ValidationError::DuplicateHeaderName { name: name.clone() });
                }
            }
            Err(_) => errors.push(ValidationError::InvalidHeaderName { name: name.clone() }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.client_ip.headers = vec![
            "Custom-IP".into(),
            "bad header".into(),
            "custom-ip".into(),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBindAddress {
                    address: "not-an-address".into()
                },
                ValidationError::InvalidHeaderName {
                    name: "bad header".into()
                },
                ValidationError::DuplicateHeaderName {
                    name: "custom-ip".into()
                },
            ]
        );
    }
}
