pub mod conversion;
pub mod credential;
pub mod currency;
pub mod currency_set;
pub mod rate_table;

pub use conversion::{ConversionRequest, ConversionResult, MAX_AMOUNT};
pub use credential::Credential;
pub use currency::{CurrencyCode, DEFAULT_CURRENCIES};
pub use currency_set::CurrencySet;
pub use rate_table::RateTable;
