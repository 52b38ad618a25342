//! Probability bounds shared across the decision core.

/// Lowest probability a fused forecast may report.
pub const FORECAST_FLOOR: f64 = 0.05;

/// Highest probability a fused forecast may report.
pub const FORECAST_CEILING: f64 = 0.95;

/// Clamp a value into the unit interval.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Clamp a value into the forecast band `[0.05, 0.95]`.
#[must_use]
pub fn clamp_forecast(value: f64) -> f64 {
    value.clamp(FORECAST_FLOOR, FORECAST_CEILING)
}

/// Market-implied probability of a price quoted in cents.
#[must_use]
pub fn implied_probability(price_cents: u32) -> f64 {
    f64::from(price_cents) / 100.0
}

/// Return `true` if a price in cents is tradable (1-99).
#[must_use]
pub const fn is_tradable_price(price_cents: i64) -> bool {
    price_cents >= 1 && price_cents <= 99
}
