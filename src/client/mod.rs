//! REST client layer
//!
//! Turns locators into requests and responses into domain records.

mod errors;
mod teamcity;
mod transport;

pub use errors::{ClientError, ConfigError};
pub use teamcity::TeamCityClient;
pub use transport::{ApiRequest, HttpTransport, Transport};
