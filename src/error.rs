//! Failure taxonomy shared by the converter, the rate repository and the UI.
//!
//! Every variant renders as the plain-text message shown to the user.

use std::fmt;

use crate::api::fixer_dto::FixerErrorDto;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConverterError {
    #[error("{0}")]
    Validation(String),

    #[error("Loading exchange rates...")]
    RatesUnavailable,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to fetch {resource}. Please check your internet connection.")]
    Network { resource: Resource, detail: String },

    #[error("Unable to calculate conversion. Please try again.")]
    Conversion,
}

impl ConverterError {
    pub fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resource {
    Currencies,
    ExchangeRates,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Currencies => f.write_str("currencies"),
            Resource::ExchangeRates => f.write_str("exchange rates"),
        }
    }
}

/// Structured failure reported by fixer.io in a `success: false` body.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid API key. Please check your API key.")]
    InvalidApiKey,

    #[error("Account inactive or suspended.")]
    AccountInactive,

    #[error("This endpoint requires a paid plan. Using free plan workaround.")]
    PaidPlanRequired,

    #[error("Monthly usage limit exceeded. Try again next month.")]
    MonthlyLimitExceeded,

    #[error("Current usage limit exceeded.")]
    UsageLimitExceeded,

    #[error("Invalid source currency.")]
    InvalidSourceCurrency,

    #[error("Invalid target currency.")]
    InvalidTargetCurrency,

    #[error("{}", .info.as_deref().unwrap_or("An error occurred"))]
    Other { code: i64, info: Option<String> },

    #[error("Unknown error occurred")]
    Unknown,
}

impl ProviderError {
    pub fn from_code(code: i64, info: Option<String>) -> Self {
        match code {
            101 => ProviderError::InvalidApiKey,
            102 => ProviderError::AccountInactive,
            103 => ProviderError::PaidPlanRequired,
            104 => ProviderError::MonthlyLimitExceeded,
            105 => ProviderError::UsageLimitExceeded,
            201 => ProviderError::InvalidSourceCurrency,
            202 => ProviderError::InvalidTargetCurrency,
            _ => ProviderError::Other { code, info },
        }
    }
}

impl From<Option<FixerErrorDto>> for ProviderError {
    fn from(error: Option<FixerErrorDto>) -> Self {
        match error {
            Some(error) => ProviderError::from_code(*error.code(), error.info().clone()),
            None => ProviderError::Unknown,
        }
    }
}
