//! Locator builders
//!
//! A locator is the server's compact filter syntax: a comma separated list
//! of `dimension:value` clauses, where a value may itself be a locator
//! (`buildType:project:id:Tools`). Each "having" builder in this module
//! appends one clause per call and renders them, in call order, with
//! [`Locator::locator`].
//!
//! Builders never validate: empty tag lists, repeated dimensions and odd
//! dates are rendered as given and left for the server to accept or reject.
//!
//! ```
//! use fluenttc::locators::{BuildHavingBuilder, Locator};
//!
//! let locator = BuildHavingBuilder::new()
//!     .build_configuration(|c| c.id("Tools_Compile"))
//!     .branch(|b| b.name("main"))
//!     .not_personal()
//!     .locator();
//!
//! assert_eq!(locator, "buildType:id:Tools_Compile,branch:name:main,personal:False");
//! ```

pub mod branch;
pub mod build;
pub mod build_configuration;
pub mod project;
pub mod user;

pub use branch::BranchHavingBuilder;
pub use build::BuildHavingBuilder;
pub use build_configuration::BuildConfigurationHavingBuilder;
pub use project::BuildProjectHavingBuilder;
pub use user::UserHavingBuilder;

use chrono::{DateTime, Offset, TimeZone};
use std::fmt;

/// Rendering of `true` inside a locator
pub const TRUE: &str = "True";

/// Rendering of `false` inside a locator
pub const FALSE: &str = "False";

/// Render contract shared by every having-builder
pub trait Locator {
    /// Renders all clauses joined by `,`; empty when nothing was added
    fn locator(&self) -> String;
}

/// Ordered `key:value` clauses
///
/// Keys are not unique: pushing the same key twice keeps both clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses {
    items: Vec<String>,
}

impl Clauses {
    /// Creates an empty clause list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key:value`
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.items.push(format!("{key}:{value}"));
    }

    /// Appends `key:True` or `key:False`
    pub fn push_flag(&mut self, key: &str, value: bool) {
        self.push(key, bool_literal(value));
    }

    /// Appends `key:<nested locator>`
    pub fn push_nested(&mut self, key: &str, nested: &impl Locator) {
        let rendered = nested.locator();
        tracing::trace!(dimension = key, locator = %rendered, "nested locator");
        self.push(key, rendered);
    }

    /// Number of clauses
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no clause was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the rendered clauses in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Joins all clauses with `,`
    #[must_use]
    pub fn render(&self) -> String {
        self.items.join(",")
    }
}

/// `True` / `False`
#[must_use]
pub fn bool_literal(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}

/// Formats a timestamp as `yyyyMMddTHHmmss` followed by the signed
/// two-digit offset hours and a literal `00`, e.g. `20240115T103000+0200`.
///
/// Offset minutes are dropped: `+05:30` renders as `+0500`.
pub fn format_locator_date<Tz: TimeZone>(when: &DateTime<Tz>) -> String {
    let offset = when.offset().fix();
    let local = when.with_timezone(&offset);
    let hours = offset.local_minus_utc() / 3600;
    format!("{}{:+03}00", local.format("%Y%m%dT%H%M%S"), hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_clauses_empty_render() {
        let clauses = Clauses::new();
        assert!(clauses.is_empty());
        assert_eq!(clauses.render(), "");
    }

    #[test]
    fn test_clauses_keep_duplicates_in_order() {
        let mut clauses = Clauses::new();
        clauses.push("id", 1);
        clauses.push_flag("running", true);
        clauses.push("id", 2);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses.render(), "id:1,running:True,id:2");
        assert_eq!(clauses.iter().last(), Some("id:2"));
    }

    #[test]
    fn test_bool_literal() {
        assert_eq!(bool_literal(true), "True");
        assert_eq!(bool_literal(false), "False");
    }

    #[test]
    fn test_format_date_positive_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let when = tz.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_locator_date(&when), "20240115T103000+0200");
    }

    #[test]
    fn test_format_date_negative_offset() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let when = tz.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_locator_date(&when), "20231231T235959-0500");
    }

    #[test]
    fn test_format_date_utc() {
        let when = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 5).unwrap();
        assert_eq!(format_locator_date(&when), "20240601T000005+0000");
    }

    #[test]
    fn test_format_date_drops_offset_minutes() {
        let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let when = tz.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        assert_eq!(format_locator_date(&when), "20240310T080000+0500");
    }
}
