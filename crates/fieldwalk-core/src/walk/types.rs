//! Type-level views: the same flattening, driven by `TypeInfo` alone.
//!
//! A nil embedded pointer can't exist without an instance, so every
//! embedded field is followed here, including self-embedding ones up to
//! the depth bound.

use crate::{
    DEFAULT_MAX_DEPTH, ReflectError,
    normalize::deref_type,
    schema::{FieldInfo, TypeInfo},
    walk::{NamedField, resolve_field_name},
};

fn struct_type(op: &'static str, info: TypeInfo) -> Result<TypeInfo, ReflectError> {
    let resolved = deref_type(info);

    if resolved.is_struct() {
        Ok(resolved)
    } else {
        Err(ReflectError::not_a_struct(op, resolved.type_name))
    }
}

fn walk_type(
    op: &'static str,
    info: TypeInfo,
    depth: usize,
    visit: &mut dyn FnMut(&'static FieldInfo),
) -> Result<(), ReflectError> {
    if depth > DEFAULT_MAX_DEPTH {
        return Err(ReflectError::depth_exceeded(DEFAULT_MAX_DEPTH, info.type_name));
    }

    for field in info.fields {
        if field.embedded {
            let inner = struct_type(op, field.type_info())?;
            walk_type(op, inner, depth + 1, visit)?;
        } else {
            visit(field);
        }
    }

    Ok(())
}

fn collect_type(op: &'static str, info: TypeInfo) -> Result<Vec<&'static FieldInfo>, ReflectError> {
    let root = struct_type(op, info)?;
    let mut fields = Vec::with_capacity(root.num_fields());

    walk_type(op, root, 0, &mut |field| fields.push(field))?;

    Ok(fields)
}

/// Number of flattened fields, exported or not.
pub fn flat_field_count(info: TypeInfo) -> Result<usize, ReflectError> {
    let root = struct_type("flat_field_count", info)?;
    let mut count = 0;

    walk_type("flat_field_count", root, 0, &mut |_| count += 1)?;

    Ok(count)
}

/// Declared names of the flattened fields.
pub fn flat_field_names(info: TypeInfo) -> Result<Vec<&'static str>, ReflectError> {
    Ok(collect_type("flat_field_names", info)?
        .into_iter()
        .map(|field| field.name)
        .collect())
}

/// Full tag value under `tag_key` for each flattened field, `""` when absent.
pub fn flat_field_tags(info: TypeInfo, tag_key: &str) -> Result<Vec<String>, ReflectError> {
    Ok(collect_type("flat_field_tags", info)?
        .into_iter()
        .map(|field| field.tag.get(tag_key))
        .collect())
}

/// Like [`flat_field_tags`], with the declared name standing in for an
/// absent or empty tag.
pub fn flat_field_tags_or_names(info: TypeInfo, tag_key: &str) -> Result<Vec<String>, ReflectError> {
    Ok(collect_type("flat_field_tags_or_names", info)?
        .into_iter()
        .map(|field| match field.tag.get(tag_key) {
            tag if tag.is_empty() => field.name.to_string(),
            tag => tag,
        })
        .collect())
}

/// Flattened `pub` fields with resolved names; fields tagged `-` are left out.
pub fn flat_exported_named_fields_of(
    info: TypeInfo,
    tag_key: &str,
) -> Result<Vec<NamedField>, ReflectError> {
    Ok(collect_type("flat_exported_named_fields_of", info)?
        .into_iter()
        .filter(|field| field.exported)
        .filter_map(|field| {
            resolve_field_name(field, "", tag_key).map(|name| NamedField {
                field,
                name: name.into_string(),
            })
        })
        .collect())
}
