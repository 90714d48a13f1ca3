use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::CurrencyCode;

pub const MAX_AMOUNT: f64 = 1_000_000.0;

#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct ConversionRequest {
    amount: f64,
    source: CurrencyCode,
    target: CurrencyCode,
}

/// `effective_rate` is target units per one source unit. The display values
/// are rounded to 2 and 6 decimal places respectively.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct ConversionResult {
    request: ConversionRequest,
    converted_amount: f64,
    effective_rate: f64,
    display_amount: Decimal,
    display_rate: Decimal,
}

impl ConversionResult {
    pub fn is_identity(&self) -> bool {
        self.request.source == self.request.target
    }
}
