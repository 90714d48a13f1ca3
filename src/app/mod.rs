pub mod app;
pub mod calc;
pub mod converter;
pub mod schedule;
pub mod ui;
pub mod utils;

pub use app::{App, Field};
pub use converter::Converter;
