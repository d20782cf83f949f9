//! Users

use serde::{Deserialize, Serialize};
use std::fmt;

/// A server user account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,

    /// Login name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub username: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// E-mail address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,

    /// REST href
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub href: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self
            .name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_default();
        f.write_str(shown)
    }
}

/// `GET app/rest/users` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Users {
    /// Number of users
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u32>,

    /// Users in server order
    #[serde(default)]
    pub user: Vec<User>,
}
