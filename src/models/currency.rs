use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency code pattern"));

/// Shown in the selectors until the provider's symbol list has been fetched.
pub const DEFAULT_CURRENCIES: [(&str, &str); 6] = [
    ("EUR", "Euro"),
    ("USD", "US Dollar"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
];

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim().to_uppercase();
        if !CODE_PATTERN.is_match(&code) {
            return Err(Error::msg(format!("Invalid currency code '{}'", code)));
        }
        Ok(Self(code))
    }

    pub fn eur() -> Self {
        Self(String::from("EUR"))
    }

    pub fn usd() -> Self {
        Self(String::from("USD"))
    }

    pub fn is_base(&self) -> bool {
        self.0 == "EUR"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
