mod calc;
mod config;
mod rate_repository;

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use crate::{
    error::ConverterError,
    models::{Credential, CurrencySet, RateTable},
    services::RatesApi,
};

pub fn sample_rates() -> RateTable {
    RateTable::from_rates(HashMap::from([
        (String::from("USD"), 1.1),
        (String::from("GBP"), 0.85),
    ]))
}

pub fn sample_currencies() -> CurrencySet {
    CurrencySet::from_symbols([
        (String::from("EUR"), String::from("Euro")),
        (String::from("GBP"), String::from("British Pound Sterling")),
        (String::from("USD"), String::from("United States Dollar")),
    ])
}

/// Canned responses for whatever credential is asked for.
pub struct FakeRatesApi {
    symbols: Mutex<Result<CurrencySet, ConverterError>>,
    rates: Mutex<Result<RateTable, ConverterError>>,
    calls: AtomicUsize,
}

impl FakeRatesApi {
    pub fn new(
        symbols: Result<CurrencySet, ConverterError>,
        rates: Result<RateTable, ConverterError>,
    ) -> Self {
        Self {
            symbols: Mutex::new(symbols),
            rates: Mutex::new(rates),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn working() -> Self {
        Self::new(Ok(sample_currencies()), Ok(sample_rates()))
    }

    pub fn set_rates(&self, rates: Result<RateTable, ConverterError>) {
        *self.rates.lock().unwrap() = rates;
    }

    pub fn set_symbols(&self, symbols: Result<CurrencySet, ConverterError>) {
        *self.symbols.lock().unwrap() = symbols;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RatesApi for FakeRatesApi {
    async fn symbols(&self, _credential: &Credential) -> Result<CurrencySet, ConverterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.symbols.lock().unwrap().clone()
    }

    async fn latest(&self, _credential: &Credential) -> Result<RateTable, ConverterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rates.lock().unwrap().clone()
    }
}
