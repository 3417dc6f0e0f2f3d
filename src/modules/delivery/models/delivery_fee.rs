use serde::Serialize;

use crate::core::Paise;
use crate::modules::delivery::models::{DeliveryFeeBand, SurgeQuote};

/// Delivery fee for one cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryFeeBreakdown {
    pub order_value: Paise,
    pub base_fee: Paise,
    pub distance_fee: Paise,
    pub total_fee: Paise,
    pub is_free_delivery: bool,
    /// Zero once the threshold is reached
    pub amount_needed_for_free: Paise,
    /// Fee the customer would have paid without free delivery
    pub waived_fee: Paise,
}

/// Banner text shown next to the cart total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryMessage {
    pub message: String,
    pub amount_needed: Option<Paise>,
    pub amount_saved: Option<Paise>,
    pub is_close_to_free: bool,
    /// 0-100, for the progress bar
    pub progress_percent: u32,
}

/// Where a cart sits on the delivery fee ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryBandBreakdown {
    pub current_band: Option<DeliveryFeeBand>,
    pub current_fee: Paise,
    pub is_free: bool,
    /// Band after the current one in priority order
    pub next_band: Option<DeliveryFeeBand>,
    /// Spend needed to reach `next_band`, or free delivery when there is none
    pub amount_to_next_band: Paise,
    pub bands: Vec<BandStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandStatus {
    pub band: DeliveryFeeBand,
    /// Cart value has reached the band's minimum
    pub is_reached: bool,
    pub is_current: bool,
}

/// Delivery fee with surge applied on top of the band fee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurgedDeliveryFee {
    pub breakdown: DeliveryFeeBreakdown,
    pub surge: SurgeQuote,
}

impl SurgedDeliveryFee {
    pub fn total_fee(&self) -> Paise {
        self.surge.surged_fee
    }
}
