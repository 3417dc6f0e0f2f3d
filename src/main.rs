use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wyshkit_pricing::analytics::{CommissionAnalytics, CommissionRecord, CommissionSummary};
use wyshkit_pricing::commissions::services::CommissionSimulation;
use wyshkit_pricing::commissions::CommissionRuleResolver;
use wyshkit_pricing::config::Config;
use wyshkit_pricing::core::Paise;
use wyshkit_pricing::delivery::{DeliveryFeeBreakdown, DeliveryFeeCalculator, DeliveryMessage};
use wyshkit_pricing::tiered_pricing::models::NextTierInfo;
use wyshkit_pricing::tiered_pricing::{BulkTier, TierPrice, TieredPriceCalculator};

#[derive(Parser, Debug)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    #[arg(long, default_value = "simulated-vendor", help = "Vendor the orders belong to.")]
    vendor: String,

    #[arg(long, help = "(Optional) Product category for category rules.")]
    category: Option<String>,

    #[arg(long, default_value_t = 0.0, help = "Delivery distance in km.")]
    distance: f64,

    #[arg(long, help = "(Optional) Retail unit price in paise; enables the bulk quote.")]
    base_price: Option<Paise>,

    #[arg(
        long = "tier",
        value_name = "MIN_QTY:PRICE",
        value_parser = parse_tier,
        requires = "base_price",
        help = "(Optional) Bulk tier, repeatable. Storefront tiers are used when omitted."
    )]
    tiers: Vec<BulkTier>,

    #[arg(long, default_value_t = 1, help = "Units in the bulk quote.")]
    quantity: u32,

    #[arg(required = true, help = "Order values in paise.")]
    order_values: Vec<Paise>,
}

fn parse_tier(raw: &str) -> Result<BulkTier, String> {
    let (min_qty, price) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected MIN_QTY:PRICE, got {}", raw))?;
    let min_qty = min_qty
        .trim()
        .parse()
        .map_err(|_| format!("invalid minimum quantity: {}", min_qty))?;
    let price = price
        .trim()
        .parse()
        .map_err(|_| format!("invalid tier price: {}", price))?;

    Ok(BulkTier::new(min_qty, price))
}

#[derive(Serialize)]
struct OrderSimulation {
    commission: CommissionSimulation,
    delivery: DeliveryFeeBreakdown,
    delivery_message: DeliveryMessage,
}

#[derive(Serialize)]
struct BulkQuote {
    tiers: Vec<BulkTier>,
    price: TierPrice,
    next_tier: Option<NextTierInfo>,
}

#[derive(Serialize)]
struct SimulationReport {
    orders: Vec<OrderSimulation>,
    summary: CommissionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk_pricing: Option<BulkQuote>,
}

fn init_tracing(fallback: String) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_directive());
    config.validate().context("Configuration validation failed")?;

    info!("Environment: {}", config.app.env);

    let rule_set = config.load_rule_set().context("Failed to load commission rules")?;
    rule_set.validate().context("Commission rules are invalid")?;

    let resolver = CommissionRuleResolver::new(&rule_set);
    let delivery = DeliveryFeeCalculator::new(&config.delivery);
    let now = Utc::now();

    let mut orders = Vec::with_capacity(args.order_values.len());
    let mut records = Vec::with_capacity(args.order_values.len());
    for (i, order_value) in args.order_values.iter().enumerate() {
        let commission =
            resolver.simulate_at(*order_value, &args.vendor, args.category.as_deref(), now)?;
        records.push(CommissionRecord::from_calculation(
            format!("simulated-{}", i + 1),
            Some(args.vendor.as_str()),
            args.category.as_deref(),
            &commission.calculation,
            now,
        ));
        orders.push(OrderSimulation {
            commission,
            delivery: delivery.calculate(*order_value, args.distance),
            delivery_message: delivery.message(*order_value, args.distance),
        });
    }

    let summary = CommissionAnalytics::new().summarize(
        Some(args.vendor.as_str()),
        &records,
        config.analytics_range(now),
    );

    let bulk_pricing = match args.base_price {
        Some(base_price) => {
            let calculator = TieredPriceCalculator::new(base_price);
            let tiers = if args.tiers.is_empty() {
                calculator.default_tiers()
            } else {
                args.tiers.clone()
            };
            config
                .tier_validator()
                .ensure_valid(&tiers, base_price)
                .context("Bulk tiers are invalid")?;

            Some(BulkQuote {
                price: calculator.calculate(args.quantity, &tiers),
                next_tier: calculator.next_tier_info(args.quantity, &tiers),
                tiers,
            })
        }
        None => None,
    };

    let report = SimulationReport {
        orders,
        summary,
        bulk_pricing,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
