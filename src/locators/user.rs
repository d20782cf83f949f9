//! User locator

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::{Clauses, Locator};
use std::fmt;

/// Fluent filter over users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserHavingBuilder {
    clauses: Clauses,
}

impl UserHavingBuilder {
    /// Creates an empty user filter
    pub fn new() -> Self {
        Self::default()
    }

    /// `id:<n>`
    pub fn id(mut self, id: i64) -> Self {
        self.clauses.push("id", id);
        self
    }

    /// `username:<login>`
    pub fn username(mut self, username: impl AsRef<str>) -> Self {
        self.clauses.push("username", username.as_ref());
        self
    }

    /// `name:<display name>`
    pub fn name(mut self, name: impl AsRef<str>) -> Self {
        self.clauses.push("name", name.as_ref());
        self
    }

    /// `email:<address>`
    pub fn email(mut self, email: impl AsRef<str>) -> Self {
        self.clauses.push("email", email.as_ref());
        self
    }
}

impl Locator for UserHavingBuilder {
    fn locator(&self) -> String {
        self.clauses.render()
    }
}

impl fmt::Display for UserHavingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator())
    }
}
