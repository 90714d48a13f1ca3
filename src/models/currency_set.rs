use std::collections::BTreeMap;

use super::{CurrencyCode, currency::DEFAULT_CURRENCIES};

/// Display names for the currencies the provider knows about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrencySet {
    names: BTreeMap<CurrencyCode, String>,
}

impl CurrencySet {
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let names = symbols
            .into_iter()
            .filter_map(|(code, name)| CurrencyCode::parse(&code).ok().map(|code| (code, name)))
            .collect();

        Self { names }
    }

    pub fn name(&self, code: &CurrencyCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Selector entries, falling back to the built-in major currencies.
    pub fn options(&self) -> Vec<(CurrencyCode, String)> {
        if self.names.is_empty() {
            return DEFAULT_CURRENCIES
                .iter()
                .filter_map(|(code, name)| {
                    CurrencyCode::parse(code)
                        .ok()
                        .map(|code| (code, name.to_string()))
                })
                .collect();
        }

        self.names
            .iter()
            .map(|(code, name)| (code.clone(), name.clone()))
            .collect()
    }
}
