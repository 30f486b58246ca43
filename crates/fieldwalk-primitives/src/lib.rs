#[macro_use]
mod macros;

use std::fmt;

///
/// Kind
///
/// Canonical value kind carried by every reflected type.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Unit,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    Text,
    /// User leaf type compared as a whole (enums, newtypes).
    Opaque,
    /// `Option<T>` and `Box<T>`; only `None` is nil.
    Pointer,
    /// Growable sequence (`Vec<T>`).
    Slice,
    /// Fixed-size sequence (`[T; N]`), never nil.
    Array,
    Map,
    Struct,
}

impl Kind {
    /// Return the full metadata descriptor for one kind.
    #[must_use]
    pub const fn metadata(self) -> KindMetadata {
        kind_registry!(metadata_from_registry, self)
    }

    /// Return whether values of this kind can represent "no value".
    #[must_use]
    pub const fn is_nilable(self) -> bool {
        self.metadata().is_nilable
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.metadata().name
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// KindMetadata
///
/// Registry row for one kind. `is_nilable` drives nil detection.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KindMetadata {
    pub is_nilable: bool,
    pub name: &'static str,
}

/// Ordered list of all kinds in registry order.
pub const ALL_KINDS: [Kind; 13] = kind_registry!(all_kinds_from_registry);

/// Kinds whose values can be nil.
pub const NILABLE_KINDS: [Kind; 3] = [Kind::Pointer, Kind::Slice, Kind::Map];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_every_kind_once() {
        for (i, kind) in ALL_KINDS.iter().enumerate() {
            assert!(
                !ALL_KINDS[i + 1..].contains(kind),
                "duplicate kind in registry: {kind}"
            );
        }
    }

    #[test]
    fn nilable_constant_matches_metadata() {
        let nilable: Vec<Kind> = ALL_KINDS.into_iter().filter(|k| k.is_nilable()).collect();

        assert_eq!(nilable, NILABLE_KINDS.to_vec());
    }

    #[test]
    fn only_indirect_and_growable_kinds_are_nilable() {
        assert!(Kind::Pointer.is_nilable());
        assert!(Kind::Slice.is_nilable());
        assert!(Kind::Map.is_nilable());
        assert!(!Kind::Array.is_nilable());
        assert!(!Kind::Struct.is_nilable());
        assert!(!Kind::Opaque.is_nilable());
    }

    #[test]
    fn display_uses_registry_name() {
        assert_eq!(Kind::Opaque.to_string(), "opaque");
        assert_eq!(Kind::Struct.to_string(), "struct");
    }
}
