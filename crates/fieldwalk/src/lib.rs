//! ## Crate layout
//! - `core`: reflection schema, `Reflect` traits, and the field walks.
//! - `derive`: `#[derive(Reflect)]` for structs, `#[derive(ReflectValue)]` for leaves.
//! - `primitives`: the `Kind` registry shared by schema and walks.
//!
//! Everything in `core` is also re-exported at the crate root, which is
//! where generated code looks for it.

pub use fieldwalk_core as core;
pub use fieldwalk_derive as derive;
pub use fieldwalk_primitives as primitives;

pub use fieldwalk_core::*;
pub use fieldwalk_derive::{Reflect, ReflectValue};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use fieldwalk_core::prelude::*;
    pub use fieldwalk_derive::{Reflect, ReflectValue};
}
