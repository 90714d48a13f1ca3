pub mod rate_repository;

pub use rate_repository::{Applied, RateRepository, RatesApi, RefreshOutcome, RefreshTicket};
