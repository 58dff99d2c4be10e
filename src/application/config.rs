use serde::Deserialize;

use crate::domain::{
    chart::DEFAULT_PRICE_DECIMALS, errors::AppError, logging::LogLevel,
    market_data::MalformedFieldPolicy,
};

pub const DEFAULT_CONTAINER_ID: &str = "stockchart-container";

/// Widget settings a host may override; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub container_id: String,
    pub price_decimals: u8,
    pub malformed_fields: MalformedFieldPolicy,
    pub log_level: LogLevel,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            price_decimals: DEFAULT_PRICE_DECIMALS,
            malformed_fields: MalformedFieldPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl WidgetConfig {
    pub fn with_container(container_id: impl Into<String>) -> Self {
        Self { container_id: container_id.into(), ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.container_id.trim().is_empty() {
            return Err(AppError::Config("containerId must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn overrides_are_camel_case() {
        let config = WidgetConfig::from_json(
            r#"{"containerId":"chart","priceDecimals":4,"malformedFields":"passThrough","logLevel":"warn"}"#,
        )
        .unwrap();
        assert_eq!(config.container_id, "chart");
        assert_eq!(config.price_decimals, 4);
        assert_eq!(config.malformed_fields, MalformedFieldPolicy::PassThrough);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn bad_config_is_reported() {
        assert!(matches!(WidgetConfig::from_json(r#"{"containerId":""}"#), Err(AppError::Config(_))));
        assert!(matches!(WidgetConfig::from_json(r#"{"colours":[]}"#), Err(AppError::Config(_))));
    }
}
