use crate::{
    error::ConverterError,
    models::{ConversionResult, CurrencyCode},
};

pub fn parse_amount(field: &str) -> Result<f64, ConverterError> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| ConverterError::validation("Please enter a valid amount"))
}

/// Accepts what a numeric field with a 0.01 step would: digits and a single
/// decimal point with at most two digits after it.
pub fn accepts_amount_char(current: &str, c: char) -> bool {
    match c {
        '0'..='9' => match current.split_once('.') {
            Some((_, decimals)) => decimals.len() < 2,
            None => true,
        },
        '.' => !current.contains('.'),
        _ => false,
    }
}

pub fn format_result(result: &ConversionResult) -> Vec<String> {
    let request = result.request();
    let mut lines = vec![format!(
        "{:.2} {} = {:.2} {}",
        request.amount(),
        request.source(),
        result.display_amount(),
        request.target()
    )];

    if !result.is_identity() {
        lines.push(format!(
            "Exchange rate: 1 {} = {:.6} {}",
            request.source(),
            result.display_rate(),
            request.target()
        ));
    }

    lines
}

/// Next (or previous) entry after `current`, wrapping around. Codes missing
/// from `options` jump to the first entry.
pub fn cycle_code(
    options: &[(CurrencyCode, String)],
    current: &CurrencyCode,
    forward: bool,
) -> Option<CurrencyCode> {
    if options.is_empty() {
        return None;
    }

    let len = options.len();
    let i = match options.iter().position(|(code, _)| code == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };

    Some(options[i].0.clone())
}
