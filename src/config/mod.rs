use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// 預設的展會 GraphQL 端點，可由參數覆寫
pub const DEFAULT_API_ENDPOINT: &str = "https://edcity-teacher-api-uat.edcity.hk/graphql";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lte-expo-mcp")]
#[command(about = "MCP server exposing Learning & Teaching Expo (LTE) 2025 queries")]
pub struct CliConfig {
    /// GraphQL endpoint of the expo backend
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Bearer token used to exclude items the user has already chosen
    #[arg(long, env = "LTE_API_TOKEN")]
    pub token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_is_valid() {
        let config = CliConfig {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            token: None,
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = CliConfig {
            api_endpoint: "not a url".to_string(),
            token: None,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
