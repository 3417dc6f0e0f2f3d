use rust_decimal::prelude::*;

/// Monetary amount in paise (1/100 rupee). All calculations stay in this unit;
/// only display formatting divides by 100.
pub type Paise = i64;

/// Paise per rupee
pub const PAISE_PER_RUPEE: i64 = 100;

/// Round a decimal amount to whole paise, half away from zero. Amounts beyond
/// the `Paise` range saturate.
pub fn round_half_up(amount: Decimal) -> Paise {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        Paise::MIN
    } else {
        Paise::MAX
    })
}

/// `percent`% of `amount`, rounded half-up to whole paise
pub fn percent_of(amount: Paise, percent: Decimal) -> Paise {
    round_half_up(Decimal::from(amount) * percent / Decimal::ONE_HUNDRED)
}

/// Convert paise to rupees for display
pub fn to_rupees(amount: Paise) -> Decimal {
    Decimal::new(amount, 2).normalize()
}

/// Format paise as Indian rupees with lakh/crore grouping, e.g. `₹2,52,000`.
/// Fraction digits are shown only when non-zero (`₹100.5`, `₹100.05`).
pub fn format_inr(amount: Paise) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let rupees = abs / PAISE_PER_RUPEE as u64;
    let fraction = abs % PAISE_PER_RUPEE as u64;

    let fraction = match fraction {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };

    format!("{}₹{}{}", sign, group_indian(rupees), fraction)
}

/// Indian digit grouping: last three digits, then pairs
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
