//! Core runtime for fieldwalk: the reflection schema, the `Reflect` traits,
//! and the flattening, zero-detection and validation walks built on them.
#![warn(unreachable_pub)]

extern crate self as fieldwalk;

// public exports are one module level down
pub mod convert;
pub mod error;
pub mod normalize;
pub mod options;
pub mod schema;
pub mod traits;
pub mod validate;
pub mod walk;
pub mod zero;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{ErrorClass, ReflectError};
pub use fieldwalk_primitives::{ALL_KINDS, Kind, KindMetadata, NILABLE_KINDS};

///
/// CONSTANTS
///

/// Maximum struct nesting followed by any walk unless configured otherwise.
///
/// Value-level nesting is always finite in Rust; the bound exists for
/// type-level queries over self-embedding schemas.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tag name that removes a field from every name-resolved view.
pub const IGNORE_NAME: &str = "-";

///
/// Prelude
///
/// Traits and the entry points most callers need.
///

pub mod prelude {
    pub use crate::{
        Kind,
        normalize::{is_nil_like, is_zero_value, normalize},
        options::WalkOptions,
        schema::{FieldInfo, Tag, TypeInfo},
        traits::{List as _, Map as _, Reflect, ReflectMut, ReflectRef, Struct as _, Typed},
        validate::{FieldError, FieldErrors, Probe, Reach, validate_fields},
        walk::{flat_exported_fields, flat_exported_fields_iter, flat_exported_named_fields},
        zero::zero_field_names,
    };
}
