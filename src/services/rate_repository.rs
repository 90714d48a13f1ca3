//! Owns the fetched currency list and rate table for the current credential.
//!
//! Tables are only ever replaced wholesale. A failed refresh keeps whatever
//! was fetched before, so readers may see stale data but never a partial one.
//!
//! Each credential change bumps a generation counter. Refreshes run off a
//! [`RefreshTicket`] stamped with the generation it was issued for, and
//! [`RateRepository::apply`] drops outcomes whose generation is outdated.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::{
    error::ConverterError,
    models::{Credential, CurrencySet, RateTable},
};

/// Source of EUR-based rates and currency names.
#[async_trait]
pub trait RatesApi: Send + Sync {
    async fn symbols(&self, credential: &Credential) -> Result<CurrencySet, ConverterError>;

    async fn latest(&self, credential: &Credential) -> Result<RateTable, ConverterError>;
}

pub struct RateRepository {
    api: Arc<dyn RatesApi>,
    credential: Credential,
    generation: u64,
    currencies: CurrencySet,
    rates: RateTable,
    last_updated: Option<DateTime<Local>>,
}

/// A refresh issued for one credential generation.
#[derive(Clone)]
pub struct RefreshTicket {
    api: Arc<dyn RatesApi>,
    credential: Credential,
    generation: u64,
}

pub struct RefreshOutcome {
    generation: u64,
    symbols: Result<CurrencySet, ConverterError>,
    rates: Result<RateTable, ConverterError>,
    fetched_at: DateTime<Local>,
}

/// What [`RateRepository::apply`] did with an outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum Applied {
    Fresh {
        rates_updated: bool,
        error: Option<ConverterError>,
    },
    Stale,
}

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn fetch(self) -> RefreshOutcome {
        let (symbols, rates) = tokio::join!(
            self.api.symbols(&self.credential),
            self.api.latest(&self.credential)
        );

        RefreshOutcome {
            generation: self.generation,
            symbols,
            rates,
            fetched_at: Local::now(),
        }
    }
}

impl RateRepository {
    pub fn new(api: Arc<dyn RatesApi>) -> Self {
        Self {
            api,
            credential: Credential::default(),
            generation: 0,
            currencies: CurrencySet::default(),
            rates: RateTable::default(),
            last_updated: None,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn currencies(&self) -> &CurrencySet {
        &self.currencies
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn last_updated(&self) -> Option<&DateTime<Local>> {
        self.last_updated.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` when the trimmed credential actually changed.
    pub fn set_credential(&mut self, credential: Credential) -> bool {
        if credential == self.credential {
            return false;
        }

        self.credential = credential;
        self.generation += 1;
        info!(
            generation = self.generation,
            blank = self.credential.is_blank(),
            "API key changed"
        );
        true
    }

    /// `None` when there is no usable credential to fetch with.
    pub fn ticket(&self) -> Option<RefreshTicket> {
        if self.credential.is_blank() {
            return None;
        }

        Some(RefreshTicket {
            api: Arc::clone(&self.api),
            credential: self.credential.clone(),
            generation: self.generation,
        })
    }

    /// Single-call variant of a refresh that only fetches the currency list.
    pub async fn refresh_symbols(&mut self) -> Result<Option<&CurrencySet>, ConverterError> {
        if self.credential.is_blank() {
            return Ok(None);
        }

        let symbols = self.api.symbols(&self.credential).await;
        self.store_symbols(symbols)?;
        Ok(Some(&self.currencies))
    }

    /// Single-call variant of a refresh that only fetches the rate table.
    pub async fn refresh_rates(&mut self) -> Result<Option<&RateTable>, ConverterError> {
        if self.credential.is_blank() {
            return Ok(None);
        }

        let rates = self.api.latest(&self.credential).await;
        self.store_rates(rates, Local::now())?;
        Ok(Some(&self.rates))
    }

    /// Stores the successful parts of `outcome`. The rates error wins over
    /// the symbols error when both fail.
    pub fn apply(&mut self, outcome: RefreshOutcome) -> Applied {
        if outcome.generation != self.generation {
            warn!(
                issued = outcome.generation,
                current = self.generation,
                "Discarding refresh issued for a previous API key"
            );
            return Applied::Stale;
        }

        let symbols = self.store_symbols(outcome.symbols);
        let rates = self.store_rates(outcome.rates, outcome.fetched_at);

        Applied::Fresh {
            rates_updated: rates.is_ok(),
            error: rates.and(symbols).err(),
        }
    }

    fn store_symbols(
        &mut self,
        symbols: Result<CurrencySet, ConverterError>,
    ) -> Result<(), ConverterError> {
        match symbols {
            Ok(currencies) => {
                debug!(count = currencies.len(), "Currency symbols refreshed");
                self.currencies = currencies;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to refresh currency symbols: {:?}", err);
                Err(err)
            }
        }
    }

    fn store_rates(
        &mut self,
        rates: Result<RateTable, ConverterError>,
        fetched_at: DateTime<Local>,
    ) -> Result<(), ConverterError> {
        match rates {
            Ok(rates) => {
                info!(count = rates.len(), "Exchange rates refreshed");
                self.rates = rates;
                self.last_updated = Some(fetched_at);
                Ok(())
            }
            Err(err) => {
                warn!("Failed to refresh exchange rates: {:?}", err);
                Err(err)
            }
        }
    }
}
