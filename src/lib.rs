//! # fluenttc - A fluent TeamCity REST client
//!
//! fluenttc builds *locators*, the server's compact filter syntax, from
//! chained method calls, sends them to the REST API and maps the JSON
//! answers onto a typed domain model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fluenttc::prelude::*;
//!
//! # async fn example() -> Result<(), ClientError> {
//! let client = TeamCityClient::connect(&Config::new("https://teamcity.example.com"))?;
//!
//! let failed = client
//!     .builds(|b| {
//!         b.build_configuration(|c| c.id("Tools_Compile"))
//!             .branch(|br| br.name("main"))
//!             .status(BuildStatus::Failure)
//!             .count(10)
//!     })
//!     .await?;
//!
//! for build in &failed {
//!     println!("{build}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`locators`]: having-builders and the [`Locator`](locators::Locator) render contract
//! - [`domain`]: build configurations, builds, projects and users
//! - [`client`]: the async client and its [`Transport`](client::Transport) seam
//! - [`infrastructure`]: configuration and logging
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod macros;

pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod locators;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use client::{ApiRequest, ClientError, ConfigError, HttpTransport, TeamCityClient, Transport};
pub use domain::{Build, BuildConfig, BuildState, BuildStatus, Project, User};
pub use infrastructure::{Auth, Config, init_logging};
pub use locators::{
    BranchHavingBuilder, BuildConfigurationHavingBuilder, BuildHavingBuilder,
    BuildProjectHavingBuilder, Clauses, Locator, UserHavingBuilder,
};

/// Version of the fluenttc crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
