use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Paise;
use crate::modules::commissions::models::CommissionCalculation;

/// One settled order as supplied by the order-history collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRecord {
    pub order_id: String,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub order_value: Paise,
    pub commission_amount: Paise,
    #[serde(default)]
    pub commission_percent: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl CommissionRecord {
    /// Record a resolved commission against an order
    pub fn from_calculation(
        order_id: impl Into<String>,
        vendor_id: Option<&str>,
        category: Option<&str>,
        calculation: &CommissionCalculation,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            vendor_id: vendor_id.map(str::to_string),
            category: category.map(str::to_string),
            order_value: calculation.order_value,
            commission_amount: calculation.commission_amount,
            commission_percent: Some(calculation.commission_percent()),
            created_at,
        }
    }
}
