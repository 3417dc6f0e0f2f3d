pub mod delivery_config;
pub mod delivery_fee;
pub mod surge;

pub use delivery_config::{DeliveryFeeBand, DeliveryFeeConfig};
pub use delivery_fee::{
    BandStatus, DeliveryBandBreakdown, DeliveryFeeBreakdown, DeliveryMessage, SurgedDeliveryFee,
};
pub use surge::{SurgeConditions, SurgeQuote, Weather};
