//! Pointer and value normalization.
//!
//! Every walk starts here: the argument may be a struct, any depth of
//! `Option`/`Box` around one, or an already-normalized handle.

use crate::{
    Kind,
    schema::TypeInfo,
    traits::{Reflect, ReflectMut, ReflectRef},
};

///
/// Resolved
///
/// Terminal value of a pointer chain. `value` is `None` when the chain
/// ended at a nil pointer; `type_info` is then the nil pointer's own type.
///

#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    pub value: Option<&'a dyn Reflect>,
    pub type_info: TypeInfo,
    /// Number of pointers followed to get here.
    pub indirections: usize,
}

impl Resolved<'_> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

/// Follow pointer indirection until a non-pointer value or a nil pointer.
#[must_use]
pub fn normalize(value: &dyn Reflect) -> Resolved<'_> {
    let mut current = value;
    let mut indirections = 0;

    loop {
        match current.reflect_ref() {
            ReflectRef::Pointer(Some(inner)) => {
                current = inner;
                indirections += 1;
            }
            ReflectRef::Pointer(None) => {
                return Resolved {
                    value: None,
                    type_info: current.type_info(),
                    indirections,
                };
            }
            _ => {
                return Resolved {
                    value: Some(current),
                    type_info: current.type_info(),
                    indirections,
                };
            }
        }
    }
}

/// Value-only form of [`normalize`].
#[must_use]
pub fn deref_value(value: &dyn Reflect) -> Option<&dyn Reflect> {
    normalize(value).value
}

/// Mutable form of [`deref_value`].
pub fn deref_value_mut(value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    if value.kind() != Kind::Pointer {
        return Some(value);
    }

    match value.reflect_mut() {
        ReflectMut::Pointer(Some(inner)) => deref_value_mut(inner),
        _ => None,
    }
}

/// Follow pointer types down to the first non-pointer type.
#[must_use]
pub fn deref_type(mut info: TypeInfo) -> TypeInfo {
    while info.is_pointer() {
        match info.elem() {
            Some(elem) => info = elem,
            None => break,
        }
    }

    info
}

/// Whether `value` is absent or a nil value of a nilable kind.
///
/// Total over every kind: zero scalars, arrays and structs are never nil.
#[must_use]
pub fn is_nil_like(value: Option<&dyn Reflect>) -> bool {
    let Some(value) = value else {
        return true;
    };
    if !value.kind().is_nilable() {
        return false;
    }

    match value.reflect_ref() {
        ReflectRef::Pointer(inner) => inner.is_none(),
        ReflectRef::List(list) => list.is_nil(),
        ReflectRef::Map(map) => map.is_nil(),
        ReflectRef::Scalar(_) | ReflectRef::Struct(_) => false,
    }
}

/// Whether `value` is absent or structurally equal to its type's zero value.
#[must_use]
pub fn is_zero_value(value: Option<&dyn Reflect>) -> bool {
    value.is_none_or(|v| v.is_zero())
}
