pub mod fixer;
pub mod fixer_dto;
pub mod utils;

pub use fixer::FixerApi;
