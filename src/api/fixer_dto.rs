use std::collections::{BTreeMap, HashMap};

use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use crate::{
    error::ProviderError,
    models::{CurrencySet, RateTable},
};

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct FixerErrorDto {
    code: i64,
    info: Option<String>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct FixerSymbolsDto {
    success: bool,
    symbols: Option<BTreeMap<String, String>>,
    error: Option<FixerErrorDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct FixerLatestDto {
    success: bool,
    rates: Option<HashMap<String, f64>>,
    error: Option<FixerErrorDto>,
}

impl FixerSymbolsDto {
    pub fn to_currency_set(self) -> Result<CurrencySet, ProviderError> {
        match (self.success, self.symbols) {
            (true, Some(symbols)) => Ok(CurrencySet::from_symbols(symbols)),
            _ => Err(ProviderError::from(self.error)),
        }
    }
}

impl FixerLatestDto {
    pub fn to_rate_table(self) -> Result<RateTable, ProviderError> {
        match (self.success, self.rates) {
            (true, Some(rates)) => Ok(RateTable::from_rates(rates)),
            _ => Err(ProviderError::from(self.error)),
        }
    }
}
