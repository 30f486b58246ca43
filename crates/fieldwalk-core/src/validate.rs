//! Per-field validation over the flattened exported fields of a struct.
//!
//! The validator is a closure over a [`Probe`]. For every field it is called
//! with the field's value, then (when the field is addressable) once more as
//! [`Reach::Address`], then with the pointee of a non-nil pointer. The first
//! error in that chain is recorded against the field name and the walk moves
//! on.

use crate::{
    DEFAULT_MAX_DEPTH, ReflectError,
    normalize::normalize,
    traits::{List, Reflect, ReflectRef, Struct},
    walk::{
        FieldBinding, Visibility, child_prefix, element_name, enter_root, is_allowed,
        resolve_field_name, walk_struct,
    },
};
use derive_more::Deref;
use std::{error::Error, fmt};

const OP: &str = "validate_fields";

// ============================================================================
// Probe
// ============================================================================

///
/// Reach
/// How the probed value was reached from its field.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Reach {
    /// The field value itself.
    Value,
    /// The field value, offered again because it is addressable.
    Address,
    /// The pointee of a non-nil pointer field.
    Pointee,
}

///
/// Probe
///

#[derive(Clone, Copy, Debug)]
pub struct Probe<'a> {
    value: &'a dyn Reflect,
    reach: Reach,
}

impl<'a> Probe<'a> {
    #[must_use]
    pub const fn new(value: &'a dyn Reflect, reach: Reach) -> Self {
        Self { value, reach }
    }

    #[must_use]
    pub const fn value(&self) -> &'a dyn Reflect {
        self.value
    }

    #[must_use]
    pub const fn reach(&self) -> Reach {
        self.reach
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    #[must_use]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }
}

/// Wrap a rule for a single concrete type into a validator.
///
/// The rule sees the field value and any pointee of type `T`. Probes of
/// other types pass.
pub fn for_type<T, E, F>(mut rule: F) -> impl FnMut(Probe<'_>) -> Result<(), E>
where
    T: Reflect,
    F: FnMut(&T) -> Result<(), E>,
{
    move |probe: Probe<'_>| match (probe.reach(), probe.downcast_ref::<T>()) {
        (Reach::Value | Reach::Pointee, Some(value)) => rule(value),
        _ => Ok(()),
    }
}

// ============================================================================
// Errors
// ============================================================================

///
/// FieldError
///
/// A validation failure for one named field. Displays as `name: error`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError<E> {
    pub name: String,
    pub error: E,
}

impl<E: fmt::Display> fmt::Display for FieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.error)
    }
}

impl<E: Error + 'static> Error for FieldError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

///
/// FieldErrors
/// Field errors in traversal order.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct FieldErrors<E>(Vec<FieldError<E>>);

impl<E> FieldErrors<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|err| err.name.as_str()).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError<E>> {
        self.0
    }

    fn push(&mut self, name: String, error: E) {
        tracing::trace!(field = %name, "field failed validation");
        self.0.push(FieldError { name, error });
    }
}

impl<E> Default for FieldErrors<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> IntoIterator for FieldErrors<E> {
    type Item = FieldError<E>;
    type IntoIter = std::vec::IntoIter<FieldError<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a FieldErrors<E> {
    type Item = &'a FieldError<E>;
    type IntoIter = std::slice::Iter<'a, FieldError<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Walk
// ============================================================================

/// Run `validate` over every exported field of `value`.
///
/// Names are resolved and filtered exactly as for
/// [`zero_field_names`](crate::zero::zero_field_names). Returns the collected
/// field errors; an empty list means every field passed.
pub fn validate_fields<E, F>(
    validate: F,
    value: &dyn Reflect,
    name_prefix: &str,
    tag_key: &str,
    names_to_validate: &[&str],
) -> Result<FieldErrors<E>, ReflectError>
where
    F: FnMut(Probe<'_>) -> Result<(), E>,
{
    ValidateWalk {
        tag_key,
        allow_list: names_to_validate,
        max_depth: DEFAULT_MAX_DEPTH,
        validate,
    }
    .run(value, name_prefix)
}

///
/// ValidateWalk
///

pub(crate) struct ValidateWalk<'o, S, F> {
    pub(crate) tag_key: &'o str,
    pub(crate) allow_list: &'o [S],
    pub(crate) max_depth: usize,
    pub(crate) validate: F,
}

impl<S, F> ValidateWalk<'_, S, F>
where
    S: AsRef<str>,
{
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(type_name = value.type_name(), prefix = name_prefix)
    )]
    pub(crate) fn run<E>(
        mut self,
        value: &dyn Reflect,
        name_prefix: &str,
    ) -> Result<FieldErrors<E>, ReflectError>
    where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        let (st, addressable) = enter_root(OP, value)?;
        let mut errors = FieldErrors::new();

        self.visit_struct(st, addressable, name_prefix, 0, &mut errors)?;

        Ok(errors)
    }

    fn visit_struct<E>(
        &mut self,
        st: &dyn Struct,
        addressable: bool,
        prefix: &str,
        depth: usize,
        errors: &mut FieldErrors<E>,
    ) -> Result<(), ReflectError>
    where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        let mut bindings: Vec<FieldBinding<'_>> = Vec::new();
        walk_struct(
            OP,
            st,
            addressable,
            Visibility::Exported,
            depth,
            self.max_depth,
            &mut |binding| bindings.push(binding),
        )?;

        for binding in bindings {
            let Some(name) = resolve_field_name(binding.field, prefix, self.tag_key) else {
                continue;
            };
            if !is_allowed(self.allow_list, name.as_str()) {
                continue;
            }

            self.check_field(binding, name.into_string(), errors)?;
        }

        Ok(())
    }

    fn check_field<E>(
        &mut self,
        binding: FieldBinding<'_>,
        name: String,
        errors: &mut FieldErrors<E>,
    ) -> Result<(), ReflectError>
    where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        let FieldBinding {
            value,
            addressable,
            depth,
            ..
        } = binding;

        match value.reflect_ref() {
            ReflectRef::Map(map) => {
                if !map.is_nil() {
                    tracing::debug!(field = %name, type_name = value.type_name(), "map field");
                    return Err(ReflectError::unsupported_map(OP, name, value.type_name()));
                }
                self.record(value, addressable, &name, errors);
            }

            ReflectRef::Struct(st) => {
                self.record(value, addressable, &name, errors);
                self.visit_struct(st, addressable, &child_prefix(&name), depth + 1, errors)?;
            }

            ReflectRef::Pointer(Some(_)) => {
                self.record(value, addressable, &name, errors);

                let resolved = normalize(value);
                if let Some(target) = resolved.value
                    && let ReflectRef::Struct(st) = target.reflect_ref()
                {
                    self.visit_struct(st, true, &child_prefix(&name), depth + 1, errors)?;
                }
            }

            ReflectRef::List(list) => {
                self.record(value, addressable, &name, errors);
                self.check_elements(list, addressable, &name, errors);
            }

            ReflectRef::Pointer(None) | ReflectRef::Scalar(_) => {
                self.record(value, addressable, &name, errors);
            }
        }

        Ok(())
    }

    // Slice elements live behind the slice's own pointer; array elements
    // share the array's addressability.
    fn check_elements<E>(
        &mut self,
        list: &dyn List,
        addressable: bool,
        name: &str,
        errors: &mut FieldErrors<E>,
    ) where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        let addressable = addressable || list.type_info().kind == crate::Kind::Slice;

        for index in 0..list.len() {
            if let Some(element) = list.get(index) {
                self.record(element, addressable, &element_name(name, index), errors);
            }
        }
    }

    fn record<E>(
        &mut self,
        value: &dyn Reflect,
        addressable: bool,
        name: &str,
        errors: &mut FieldErrors<E>,
    ) where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        if let Err(error) = self.run_chain(value, addressable) {
            errors.push(name.to_string(), error);
        }
    }

    fn run_chain<E>(&mut self, value: &dyn Reflect, addressable: bool) -> Result<(), E>
    where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        (self.validate)(Probe::new(value, Reach::Value))?;

        if addressable {
            (self.validate)(Probe::new(value, Reach::Address))?;
        }

        if let ReflectRef::Pointer(Some(pointee)) = value.reflect_ref() {
            (self.validate)(Probe::new(pointee, Reach::Pointee))?;
        }

        Ok(())
    }
}
