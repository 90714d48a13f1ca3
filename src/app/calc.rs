use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

use crate::{
    error::ConverterError,
    models::{ConversionRequest, ConversionResult, CurrencyCode, MAX_AMOUNT, RateTable},
};

/// Converts `amount` from `source` to `target` using EUR-based `rates`.
///
/// Pairs without EUR are pivoted through it, since the table only knows
/// EUR-relative rates.
pub fn convert(
    amount: f64,
    source: &CurrencyCode,
    target: &CurrencyCode,
    rates: &RateTable,
) -> Result<ConversionResult, ConverterError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ConverterError::validation("Please enter a valid amount"));
    }
    if amount > MAX_AMOUNT {
        return Err(ConverterError::Validation(format!(
            "Amount must not exceed {}",
            MAX_AMOUNT
        )));
    }

    let request = ConversionRequest::new(amount, source.clone(), target.clone());

    if source == target {
        return finish(request, 1.0);
    }

    if rates.is_empty() {
        return Err(ConverterError::RatesUnavailable);
    }

    let effective_rate = if source.is_base() {
        rates.rate(target).ok_or(ConverterError::Conversion)?
    } else if target.is_base() {
        let from_rate = rates.rate(source).ok_or(ConverterError::Conversion)?;
        1.0 / from_rate
    } else {
        let to_eur_rate = 1.0 / rates.rate(source).ok_or(ConverterError::Conversion)?;
        let from_eur_rate = rates.rate(target).ok_or(ConverterError::Conversion)?;
        to_eur_rate * from_eur_rate
    };

    finish(request, effective_rate)
}

fn finish(
    request: ConversionRequest,
    effective_rate: f64,
) -> Result<ConversionResult, ConverterError> {
    let converted_amount = request.amount() * effective_rate;

    if !converted_amount.is_finite() || !effective_rate.is_finite() || effective_rate <= 0.0 {
        return Err(ConverterError::Conversion);
    }

    let display_amount = Decimal::from_f64(converted_amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(ConverterError::Conversion)?;
    let display_rate = Decimal::from_f64(effective_rate)
        .map(|d| d.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(ConverterError::Conversion)?;

    Ok(ConversionResult::new(
        request,
        converted_amount,
        effective_rate,
        display_amount,
        display_rate,
    ))
}
