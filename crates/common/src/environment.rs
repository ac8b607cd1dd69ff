//! Payvault service environment configuration.
//!
//! Supports production and sandbox environments with appropriate URLs.

use std::fmt;
use std::str::FromStr;

/// Payvault environment (production or sandbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceEnvironment {
    /// Production environment (real funds).
    #[default]
    Production,
    /// Sandbox environment (test funds).
    Sandbox,
}

impl ServiceEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.payvault.io",
            Self::Sandbox => "https://api.sandbox.payvault.io",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns true if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }

    /// Load environment from `PAYVAULT_ENVIRONMENT` env var.
    ///
    /// Returns `Production` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("PAYVAULT_ENVIRONMENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for ServiceEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

impl FromStr for ServiceEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "live" | "mainnet" => Ok(Self::Production),
            "sandbox" | "test" | "testnet" => Ok(Self::Sandbox),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'production' or 'sandbox'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_urls() {
        let env = ServiceEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://api.payvault.io");
        assert!(env.is_production());
        assert!(!env.is_sandbox());
    }

    #[test]
    fn test_sandbox_urls() {
        let env = ServiceEnvironment::Sandbox;
        assert_eq!(env.rest_base_url(), "https://api.sandbox.payvault.io");
        assert!(!env.is_production());
        assert!(env.is_sandbox());
    }

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<ServiceEnvironment>().unwrap(),
            ServiceEnvironment::Production
        );
        assert_eq!(
            "live".parse::<ServiceEnvironment>().unwrap(),
            ServiceEnvironment::Production
        );
        assert_eq!(
            "MAINNET".parse::<ServiceEnvironment>().unwrap(),
            ServiceEnvironment::Production
        );
    }

    #[test]
    fn test_parse_sandbox() {
        assert_eq!(
            "sandbox".parse::<ServiceEnvironment>().unwrap(),
            ServiceEnvironment::Sandbox
        );
        assert_eq!(
            "test".parse::<ServiceEnvironment>().unwrap(),
            ServiceEnvironment::Sandbox
        );
        assert_eq!(
            "TESTNET".parse::<ServiceEnvironment>().unwrap(),
            ServiceEnvironment::Sandbox
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("invalid".parse::<ServiceEnvironment>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(
            ServiceEnvironment::default(),
            ServiceEnvironment::Production
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ServiceEnvironment::Production.to_string(), "production");
        assert_eq!(ServiceEnvironment::Sandbox.to_string(), "sandbox");
    }
}
