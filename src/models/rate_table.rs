use std::collections::HashMap;

use tracing::warn;

use super::CurrencyCode;

/// Units of each currency per 1 EUR.
///
/// EUR itself is implied at 1.0 and may or may not be listed. Entries that
/// are not strictly positive and finite never make it into the table, so a
/// lookup either yields a usable rate or nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn from_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let rates = rates
            .into_iter()
            .filter_map(|(code, rate)| {
                let parsed = match CurrencyCode::parse(&code) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        warn!("Skipping rate entry: {}", err);
                        return None;
                    }
                };
                if !rate.is_finite() || rate <= 0.0 {
                    warn!("Skipping non-positive rate {} for {}", rate, parsed);
                    return None;
                }
                Some((parsed, rate))
            })
            .collect();

        Self { rates }
    }

    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}
