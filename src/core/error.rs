use crate::core::money::Paise;
use crate::modules::tiered_pricing::models::TierValidationError;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the pricing engine
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// No active rule (not even a default) covers the order
    #[error(
        "No applicable commission rule for order value {order_value} (vendor: {vendor_id:?}, category: {category:?})"
    )]
    NoApplicableRule {
        order_value: Paise,
        vendor_id: Option<String>,
        category: Option<String>,
    },

    /// Partner-authored bulk tiers violate ordering or pricing invariants
    #[error("Tier validation error: {0}")]
    TierValidation(#[from] TierValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// YAML rule file errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// Errors the caller must treat as broken configuration rather than bad
    /// user input. The computation is aborted, never retried with a guessed rate.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            AppError::NoApplicableRule { .. }
                | AppError::Configuration(_)
                | AppError::Yaml(_)
                | AppError::Json(_)
        )
    }
}
