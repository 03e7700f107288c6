use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, half away from zero, keeping a scale of exactly two.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Render a monetary amount with exactly two decimals.
pub fn format_amount(amount: Decimal) -> String {
    round_amount(amount).to_string()
}

/// Quantities such as hours are shown without trailing zeros: `2.50` becomes `2.5`.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

pub fn is_quarter_increment(quantity: Decimal) -> bool {
    (quantity * Decimal::from(4)).fract().is_zero()
}
