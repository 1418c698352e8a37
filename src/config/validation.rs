//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees
//! syntactically. Validation is a pure function over the config and
//! returns all errors, not just the first.

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug)]
pub enum ValidationError {
    /// `listener.bind_address` is not a valid socket address.
    InvalidBindAddress(String),
    /// `listener.max_connections` is zero, which would reject all traffic.
    ZeroMaxConnections,
    /// `timeouts.request_secs` is zero, which would time out all requests.
    ZeroRequestTimeout,
    /// `backend.manifest` is empty.
    EmptyManifestName,
    /// `observability.metrics_address` is not a valid socket address.
    InvalidMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid listener.bind_address `{}`", addr)
            }
            ValidationError::ZeroMaxConnections => {
                write!(f, "listener.max_connections must be greater than zero")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
            ValidationError::EmptyManifestName => {
                write!(f, "backend.manifest must not be empty")
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "invalid observability.metrics_address `{}`", addr)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.backend.manifest.trim().is_empty() {
        errors.push(ValidationError::EmptyManifestName);
    }
    // The metrics address only matters when the exporter is enabled.
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
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
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn all_problems_are_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.listener.max_connections = 0;
        config.timeouts.request_secs = 0;
        config.backend.manifest = "  ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn metrics_address_is_ignored_while_disabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "nonsense".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidMetricsAddress(_)]
        ));
    }
}
