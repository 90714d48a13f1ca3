#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        error::{ConverterError, ProviderError, Resource},
        models::{Credential, CurrencyCode, RateTable},
        services::{Applied, RateRepository},
        test::{FakeRatesApi, sample_rates},
    };

    fn network_error() -> ConverterError {
        ConverterError::Network {
            resource: Resource::ExchangeRates,
            detail: String::from("connection refused"),
        }
    }

    #[tokio::test]
    async fn blank_credential_skips_the_network() {
        let api = Arc::new(FakeRatesApi::working());
        let mut repository = RateRepository::new(api.clone());
        repository.set_credential(Credential::new("   "));

        assert_eq!(repository.refresh_symbols().await.unwrap(), None);
        assert_eq!(repository.refresh_rates().await.unwrap(), None);
        assert!(repository.ticket().is_none());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn refresh_replaces_tables_and_stamps_time() {
        let api = Arc::new(FakeRatesApi::working());
        let mut repository = RateRepository::new(api.clone());
        repository.set_credential(Credential::new("key"));

        let currencies = repository.refresh_symbols().await.unwrap().unwrap();
        assert_eq!(currencies.len(), 3);

        let rates = repository.refresh_rates().await.unwrap().unwrap();
        assert_eq!(rates.rate(&CurrencyCode::usd()), Some(1.1));
        assert!(repository.last_updated().is_some());
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_stale_rates() {
        let api = Arc::new(FakeRatesApi::working());
        let mut repository = RateRepository::new(api.clone());
        repository.set_credential(Credential::new("key"));
        repository.refresh_rates().await.unwrap();
        let updated = repository.last_updated().copied();

        api.set_rates(Err(ConverterError::Provider(ProviderError::UsageLimitExceeded)));
        let err = repository.refresh_rates().await.unwrap_err();

        assert_eq!(err.to_string(), "Current usage limit exceeded.");
        assert_eq!(repository.rates(), &sample_rates());
        assert_eq!(repository.last_updated().copied(), updated);
    }

    #[tokio::test]
    async fn ticket_outcome_is_applied_for_current_key() {
        let api = Arc::new(FakeRatesApi::working());
        let mut repository = RateRepository::new(api);
        repository.set_credential(Credential::new("key"));

        let outcome = repository.ticket().unwrap().fetch().await;

        assert_eq!(
            repository.apply(outcome),
            Applied::Fresh {
                rates_updated: true,
                error: None
            }
        );
        assert!(!repository.rates().is_empty());
        assert!(!repository.currencies().is_empty());
    }

    #[tokio::test]
    async fn outcome_for_previous_key_is_discarded() {
        let api = Arc::new(FakeRatesApi::working());
        let mut repository = RateRepository::new(api);
        repository.set_credential(Credential::new("old-key"));
        let ticket = repository.ticket().unwrap();

        repository.set_credential(Credential::new("new-key"));
        let outcome = ticket.fetch().await;

        assert_eq!(repository.apply(outcome), Applied::Stale);
        assert_eq!(repository.rates(), &RateTable::default());
        assert!(repository.currencies().is_empty());
        assert!(repository.last_updated().is_none());
    }

    #[tokio::test]
    async fn partial_failure_keeps_the_successful_half() {
        let api = Arc::new(FakeRatesApi::working());
        api.set_rates(Err(network_error()));
        let mut repository = RateRepository::new(api);
        repository.set_credential(Credential::new("key"));

        let outcome = repository.ticket().unwrap().fetch().await;
        let Applied::Fresh {
            rates_updated,
            error: Some(err),
        } = repository.apply(outcome)
        else {
            panic!("expected a fresh outcome carrying the rates error");
        };

        assert!(!rates_updated);
        assert_eq!(
            err.to_string(),
            "Failed to fetch exchange rates. Please check your internet connection."
        );
        assert_eq!(repository.currencies().len(), 3);
        assert!(repository.rates().is_empty());
    }

    #[tokio::test]
    async fn failed_symbols_still_report_updated_rates() {
        let api = Arc::new(FakeRatesApi::working());
        api.set_symbols(Err(ConverterError::Network {
            resource: Resource::Currencies,
            detail: String::from("timed out"),
        }));
        let mut repository = RateRepository::new(api);
        repository.set_credential(Credential::new("key"));

        let outcome = repository.ticket().unwrap().fetch().await;

        match repository.apply(outcome) {
            Applied::Fresh {
                rates_updated: true,
                error: Some(err),
            } => assert_eq!(
                err.to_string(),
                "Failed to fetch currencies. Please check your internet connection."
            ),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!repository.rates().is_empty());
        assert!(repository.last_updated().is_some());
    }

    #[test]
    fn same_trimmed_key_is_not_a_change() {
        let mut repository = RateRepository::new(Arc::new(FakeRatesApi::working()));

        assert!(repository.set_credential(Credential::new("key")));
        assert!(!repository.set_credential(Credential::new("  key ")));
        assert_eq!(repository.generation(), 1);
    }
}
