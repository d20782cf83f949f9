//! Prelude module for common imports

pub use crate::client::{ClientError, TeamCityClient, Transport};
pub use crate::domain::{Build, BuildConfig, BuildStatus, Project, User};
pub use crate::infrastructure::{Auth, Config};
pub use crate::locators::{
    BranchHavingBuilder, BuildConfigurationHavingBuilder, BuildHavingBuilder,
    BuildProjectHavingBuilder, Locator, UserHavingBuilder,
};
