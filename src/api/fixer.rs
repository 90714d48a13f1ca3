use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{
    fixer_dto::{FixerLatestDto, FixerSymbolsDto},
    utils::make_request,
};
use crate::{
    error::{ConverterError, Resource},
    models::{Credential, CurrencySet, RateTable},
    services::RatesApi,
};

pub const BASE_URL: &str = "https://data.fixer.io/api";

#[derive(Clone, Debug)]
pub struct FixerApi {
    client: Client,
    base_url: String,
}

impl Default for FixerApi {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl FixerApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub async fn get_symbols(&self, access_key: &str) -> Result<FixerSymbolsDto> {
        make_request(&self.client, &self.base_url, "symbols", access_key).await
    }

    pub async fn get_latest(&self, access_key: &str) -> Result<FixerLatestDto> {
        make_request(&self.client, &self.base_url, "latest", access_key).await
    }
}

#[async_trait]
impl RatesApi for FixerApi {
    async fn symbols(&self, credential: &Credential) -> Result<CurrencySet, ConverterError> {
        debug!("Fetching currency symbols");
        let dto = self
            .get_symbols(credential.expose())
            .await
            .map_err(|err| ConverterError::Network {
                resource: Resource::Currencies,
                detail: format!("{:#}", err),
            })?;

        Ok(dto.to_currency_set()?)
    }

    async fn latest(&self, credential: &Credential) -> Result<RateTable, ConverterError> {
        debug!("Fetching latest rates");
        let dto = self
            .get_latest(credential.expose())
            .await
            .map_err(|err| ConverterError::Network {
                resource: Resource::ExchangeRates,
                detail: format!("{:#}", err),
            })?;

        Ok(dto.to_rate_table()?)
    }
}
