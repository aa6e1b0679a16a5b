pub mod js;
pub mod errors;
pub mod config;

pub use config::TimeoutConfig;
pub use errors::{check_outcome, to_util_error};
