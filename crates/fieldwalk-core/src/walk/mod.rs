//! Flattening traversal.
//!
//! Walks a struct's declared fields in order. Fields marked
//! `#[reflect(flatten)]` are never emitted themselves; their own flattened
//! fields are spliced in at that position instead. Every view here shares
//! that traversal and differs only in what it attaches to each entry.

mod iter;
mod name;
mod types;


pub use iter::FlatFields;
pub use name::{FieldName, child_prefix, element_name, is_allowed, resolve_field_name};
pub use types::{
    flat_exported_named_fields_of, flat_field_count, flat_field_names, flat_field_tags,
    flat_field_tags_or_names,
};

use crate::{
    DEFAULT_MAX_DEPTH, ReflectError,
    normalize::{Resolved, deref_value_mut, normalize},
    schema::FieldInfo,
    traits::{Reflect, ReflectMut, ReflectRef, Struct},
};
use std::collections::BTreeMap;

// ============================================================================
// Entries
// ============================================================================

///
/// FieldBinding
///
/// A field's declaration paired with its value inside one instance.
/// `addressable` is true when the field was reached through a pointer,
/// directly or via an enclosing struct or slice. `depth` is the nesting
/// level of the struct that declares the field, counting embedded levels;
/// the root struct is 0.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldBinding<'a> {
    pub field: &'static FieldInfo,
    pub value: &'a dyn Reflect,
    pub addressable: bool,
    pub depth: usize,
}

///
/// FieldBindingMut
///

#[derive(Debug)]
pub struct FieldBindingMut<'a> {
    pub field: &'static FieldInfo,
    pub value: &'a mut dyn Reflect,
}

///
/// NamedBinding
///

#[derive(Clone, Debug)]
pub struct NamedBinding<'a> {
    pub field: &'static FieldInfo,
    pub value: &'a dyn Reflect,
    pub name: String,
}

///
/// NamedField
/// Descriptor plus resolved name, without an instance.
///

#[derive(Clone, Debug)]
pub struct NamedField {
    pub field: &'static FieldInfo,
    pub name: String,
}

// ============================================================================
// Traversal
// ============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Visibility {
    All,
    Exported,
}

impl Visibility {
    const fn admits(self, field: &FieldInfo) -> bool {
        match self {
            Self::All => true,
            Self::Exported => field.exported,
        }
    }
}

/// Resolve the walk argument to a struct, failing on anything else.
/// The second value is whether the struct was reached through a pointer.
pub(crate) fn enter_root<'a>(
    op: &'static str,
    value: &'a dyn Reflect,
) -> Result<(&'a dyn Struct, bool), ReflectError> {
    let resolved = normalize(value);

    match embedded_struct(op, resolved)? {
        Some(st) => Ok((st, resolved.indirections > 0)),
        None => {
            tracing::debug!(op, type_name = resolved.type_info.type_name, "nil pointer argument");
            Err(ReflectError::not_a_struct(op, resolved.type_info.type_name))
        }
    }
}

/// A nil pointer yields `Ok(None)`; a non-struct is an error.
pub(crate) fn embedded_struct<'a>(
    op: &'static str,
    resolved: Resolved<'a>,
) -> Result<Option<&'a dyn Struct>, ReflectError> {
    let Some(value) = resolved.value else {
        return Ok(None);
    };

    match value.reflect_ref() {
        ReflectRef::Struct(st) => Ok(Some(st)),
        _ => {
            tracing::debug!(op, type_name = resolved.type_info.type_name, "not a struct");
            Err(ReflectError::not_a_struct(op, resolved.type_info.type_name))
        }
    }
}

pub(crate) fn walk_struct<'a>(
    op: &'static str,
    st: &'a dyn Struct,
    addressable: bool,
    visibility: Visibility,
    depth: usize,
    max_depth: usize,
    visit: &mut dyn FnMut(FieldBinding<'a>),
) -> Result<(), ReflectError> {
    let info = st.type_info();
    if depth > max_depth {
        return Err(ReflectError::depth_exceeded(max_depth, info.type_name));
    }

    for field in info.fields {
        let Some(value) = st.field(field.index) else {
            continue;
        };

        if field.embedded {
            let resolved = normalize(value);
            if let Some(inner) = embedded_struct(op, resolved)? {
                let addressable = addressable || resolved.indirections > 0;
                walk_struct(
                    op,
                    inner,
                    addressable,
                    visibility,
                    depth + 1,
                    max_depth,
                    visit,
                )?;
            }
        } else if visibility.admits(field) {
            visit(FieldBinding {
                field,
                value,
                addressable,
                depth,
            });
        }
    }

    Ok(())
}

fn walk_struct_mut<'a>(
    op: &'static str,
    st: &'a mut dyn Struct,
    visibility: Visibility,
    depth: usize,
    out: &mut Vec<FieldBindingMut<'a>>,
) -> Result<(), ReflectError> {
    let info = st.type_info();
    if depth > DEFAULT_MAX_DEPTH {
        return Err(ReflectError::depth_exceeded(DEFAULT_MAX_DEPTH, info.type_name));
    }

    for (field, value) in info.fields.iter().zip(st.fields_mut()) {
        if field.embedded {
            let Some(target) = deref_value_mut(value) else {
                continue;
            };
            let type_name = target.type_name();
            match target.reflect_mut() {
                ReflectMut::Struct(inner) => walk_struct_mut(op, inner, visibility, depth + 1, out)?,
                _ => return Err(ReflectError::not_a_struct(op, type_name)),
            }
        } else if visibility.admits(field) {
            out.push(FieldBindingMut { field, value });
        }
    }

    Ok(())
}

fn collect<'a>(
    op: &'static str,
    value: &'a dyn Reflect,
    visibility: Visibility,
) -> Result<Vec<FieldBinding<'a>>, ReflectError> {
    let (st, addressable) = enter_root(op, value)?;
    let mut fields = Vec::with_capacity(st.type_info().num_fields());

    walk_struct(
        op,
        st,
        addressable,
        visibility,
        0,
        DEFAULT_MAX_DEPTH,
        &mut |binding| fields.push(binding),
    )?;

    Ok(fields)
}

// ============================================================================
// Value-level views
// ============================================================================

/// Every flattened field, exported or not.
pub fn flat_fields(value: &dyn Reflect) -> Result<Vec<FieldBinding<'_>>, ReflectError> {
    collect("flat_fields", value, Visibility::All)
}

/// Flattened `pub` fields.
pub fn flat_exported_fields(value: &dyn Reflect) -> Result<Vec<FieldBinding<'_>>, ReflectError> {
    collect("flat_exported_fields", value, Visibility::Exported)
}

/// Flattened `pub` fields, mutably. Writes go straight into `value`.
pub fn flat_exported_fields_mut(
    value: &mut dyn Reflect,
) -> Result<Vec<FieldBindingMut<'_>>, ReflectError> {
    const OP: &str = "flat_exported_fields_mut";

    let type_name = value.type_name();
    let Some(target) = deref_value_mut(value) else {
        return Err(ReflectError::not_a_struct(OP, type_name));
    };
    let type_name = target.type_name();
    let ReflectMut::Struct(st) = target.reflect_mut() else {
        return Err(ReflectError::not_a_struct(OP, type_name));
    };

    let mut fields = Vec::new();
    walk_struct_mut(OP, st, Visibility::Exported, 0, &mut fields)?;

    Ok(fields)
}

/// Call `f` for every flattened field, exported or not.
pub fn for_each_flat_field<'a, F>(value: &'a dyn Reflect, mut f: F) -> Result<(), ReflectError>
where
    F: FnMut(&'static FieldInfo, &'a dyn Reflect),
{
    let (st, addressable) = enter_root("for_each_flat_field", value)?;

    walk_struct(
        "for_each_flat_field",
        st,
        addressable,
        Visibility::All,
        0,
        DEFAULT_MAX_DEPTH,
        &mut |binding| f(binding.field, binding.value),
    )
}

/// Call `f` for every flattened `pub` field.
pub fn for_each_flat_exported_field<'a, F>(
    value: &'a dyn Reflect,
    mut f: F,
) -> Result<(), ReflectError>
where
    F: FnMut(&'static FieldInfo, &'a dyn Reflect),
{
    let (st, addressable) = enter_root("for_each_flat_exported_field", value)?;

    walk_struct(
        "for_each_flat_exported_field",
        st,
        addressable,
        Visibility::Exported,
        0,
        DEFAULT_MAX_DEPTH,
        &mut |binding| f(binding.field, binding.value),
    )
}

/// Lazy form of [`flat_exported_fields`]. Only the argument is checked up
/// front; a malformed embedded field surfaces as an `Err` item when reached.
pub fn flat_exported_fields_iter(value: &dyn Reflect) -> Result<FlatFields<'_>, ReflectError> {
    let (st, addressable) = enter_root("flat_exported_fields_iter", value)?;

    Ok(FlatFields::new(st, addressable, DEFAULT_MAX_DEPTH))
}

/// Values of every flattened field, exported or not.
pub fn flat_field_values(value: &dyn Reflect) -> Result<Vec<&dyn Reflect>, ReflectError> {
    Ok(collect("flat_field_values", value, Visibility::All)?
        .into_iter()
        .map(|binding| binding.value)
        .collect())
}

/// Flattened `pub` fields with their names resolved under `tag_key`.
/// Fields tagged `-` are left out.
pub fn flat_exported_named_fields<'a>(
    value: &'a dyn Reflect,
    tag_key: &str,
) -> Result<Vec<NamedBinding<'a>>, ReflectError> {
    Ok(
        collect("flat_exported_named_fields", value, Visibility::Exported)?
            .into_iter()
            .filter_map(|binding| {
                resolve_field_name(binding.field, "", tag_key).map(|name| NamedBinding {
                    field: binding.field,
                    value: binding.value,
                    name: name.into_string(),
                })
            })
            .collect(),
    )
}

/// Like [`flat_exported_named_fields`], keyed by resolved name. A later
/// field replaces an earlier one with the same name.
pub fn flat_exported_named_field_map<'a>(
    value: &'a dyn Reflect,
    tag_key: &str,
) -> Result<BTreeMap<String, NamedBinding<'a>>, ReflectError> {
    Ok(flat_exported_named_fields(value, tag_key)?
        .into_iter()
        .map(|binding| (binding.name.clone(), binding))
        .collect())
}
