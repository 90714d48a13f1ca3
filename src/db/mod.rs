pub mod init;
pub mod utils;
pub mod write;

/// Settings key the API key is persisted under.
pub const CREDENTIAL_KEY: &str = "fixer_api_key";

pub use init::connect;
pub use utils::load_setting;
pub use write::{delete_setting, save_setting};
