//! Identifier management using string interning.
//!
//! Network columns are referenced by [`Id`] rather than by pointer so that
//! elements never own the network they belong to.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Cheap, copyable identifier backed by an interned string.
///
/// Two identifiers created from the same string compare equal and hash
/// identically, which makes `Id` a natural map key.
///
/// # Examples
///
/// ```
/// use nwdiag_core::identifier::Id;
///
/// let dmz = Id::new("dmz");
/// assert_eq!(dmz, Id::new("dmz"));
/// assert_eq!(dmz, "dmz");
/// assert_eq!(dmz.to_string(), "dmz");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        interner
            .resolve(self.0)
            .is_some_and(|self_str| self_str == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(Id::new("lan"), Id::new("lan"));
        assert_ne!(Id::new("lan"), Id::new("wan"));
    }

    #[test]
    fn test_display_round_trips_name() {
        let id: Id = "internal-net".into();
        assert_eq!(id.to_string(), "internal-net");
    }

    #[test]
    fn test_compare_with_str() {
        let id = Id::new("dmz");
        assert!(id == "dmz");
        assert!(id != "lan");
    }

    #[test]
    fn test_ids_hash_by_name() {
        let mut set = HashSet::new();
        set.insert(Id::new("a"));
        set.insert(Id::new("a"));
        set.insert(Id::new("b"));
        assert_eq!(set.len(), 2);
    }
}
