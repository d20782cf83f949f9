//! Infrastructure layer
//!
//! Configuration loading and logging setup.

mod config;
mod logging;

pub use config::{Auth, Config, ENV_LOG, ENV_PASSWORD, ENV_URL, ENV_USERNAME};
pub use logging::init_logging;
