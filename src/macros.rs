//! Declarative macros shared by the locator builders and the domain model
//!
//! These are crate-internal: they remove the repetition of boolean
//! predicate pairs and of the server's `{ count, <item>: [...] }` wrappers.

/// Generates a `name()` / `not_name()` pair that appends `key:True` and
/// `key:False` respectively.
macro_rules! flag_pair {
    ($(#[$on_doc:meta])* $on:ident, $(#[$off_doc:meta])* $off:ident, $key:literal) => {
        $(#[$on_doc])*
        pub fn $on(self) -> Self {
            self.flag($key, true)
        }

        $(#[$off_doc])*
        pub fn $off(self) -> Self {
            self.flag($key, false)
        }
    };
}

/// Generates a counted collection wrapper as returned by the server, e.g.
/// `{"count": 2, "step": [...]}`.
macro_rules! counted_collection {
    ($(#[$doc:meta])* $name:ident, $item:ty, $wire:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            /// Number of items reported by the server
            #[serde(skip_serializing_if = "Option::is_none", default)]
            pub count: Option<u32>,

            /// Items in server order
            #[serde(rename = $wire, default)]
            pub items: Vec<$item>,
        }

        impl $name {
            /// Returns the number of items actually present
            #[must_use]
            pub fn len(&self) -> usize {
                self.items.len()
            }

            /// Returns true if there are no items
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            /// Iterates over the items
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.items.iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }
    };
}

pub(crate) use counted_collection;
pub(crate) use flag_pair;
