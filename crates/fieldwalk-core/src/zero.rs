//! Zero-value detection over the flattened exported fields of a struct.

use crate::{
    DEFAULT_MAX_DEPTH, ReflectError,
    normalize::normalize,
    traits::{List, Reflect, ReflectRef, Struct},
    walk::{
        FieldBinding, Visibility, child_prefix, element_name, enter_root, is_allowed,
        resolve_field_name, walk_struct,
    },
};

const OP: &str = "zero_field_names";

/// Names of the exported fields of `value` holding zero values.
///
/// Names are resolved under `tag_key` and prefixed with `name_prefix`.
/// Nested structs report their fields as `outer.inner`; zero slice and
/// array elements as `field[i]`. A non-empty `names_to_validate` restricts
/// the walk to exactly those resolved names, at every level.
pub fn zero_field_names(
    value: &dyn Reflect,
    name_prefix: &str,
    tag_key: &str,
    names_to_validate: &[&str],
) -> Result<Vec<String>, ReflectError> {
    ZeroWalk {
        tag_key,
        allow_list: names_to_validate,
        max_depth: DEFAULT_MAX_DEPTH,
    }
    .run(value, name_prefix)
}

///
/// ZeroWalk
///

pub(crate) struct ZeroWalk<'o, S> {
    pub(crate) tag_key: &'o str,
    pub(crate) allow_list: &'o [S],
    pub(crate) max_depth: usize,
}

impl<S: AsRef<str>> ZeroWalk<'_, S> {
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(type_name = value.type_name(), prefix = name_prefix)
    )]
    pub(crate) fn run(
        &self,
        value: &dyn Reflect,
        name_prefix: &str,
    ) -> Result<Vec<String>, ReflectError> {
        let (st, addressable) = enter_root(OP, value)?;
        let mut names = Vec::new();

        self.visit_struct(st, addressable, name_prefix, 0, &mut names)?;

        Ok(names)
    }

    fn visit_struct(
        &self,
        st: &dyn Struct,
        addressable: bool,
        prefix: &str,
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<(), ReflectError> {
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

            self.check_field(binding.value, name.into_string(), binding.depth, out)?;
        }

        Ok(())
    }

    fn check_field(
        &self,
        value: &dyn Reflect,
        name: String,
        depth: usize,
        out: &mut Vec<String>,
    ) -> Result<(), ReflectError> {
        match value.reflect_ref() {
            ReflectRef::Pointer(None) => report(out, name),

            ReflectRef::Pointer(Some(_)) => {
                let resolved = normalize(value);
                match resolved.value {
                    None => report(out, name),
                    Some(target) => match target.reflect_ref() {
                        ReflectRef::Struct(st) => {
                            self.visit_struct(st, true, &child_prefix(&name), depth + 1, out)?;
                        }
                        _ if target.is_zero() => report(out, name),
                        _ => {}
                    },
                }
            }

            ReflectRef::Struct(st) => {
                self.visit_struct(st, false, &child_prefix(&name), depth + 1, out)?;
            }

            ReflectRef::List(list) => {
                if list.is_nil() {
                    report(out, name);
                } else {
                    report_zero_elements(list, &name, out);
                }
            }

            ReflectRef::Map(map) => {
                if !map.is_nil() {
                    tracing::debug!(field = %name, type_name = value.type_name(), "map field");
                    return Err(ReflectError::unsupported_map(OP, name, value.type_name()));
                }
                report(out, name);
            }

            ReflectRef::Scalar(scalar) => {
                if scalar.is_zero() {
                    report(out, name);
                }
            }
        }

        Ok(())
    }
}

fn report_zero_elements(list: &dyn List, name: &str, out: &mut Vec<String>) {
    for index in 0..list.len() {
        if list.get(index).is_some_and(Reflect::is_zero) {
            report(out, element_name(name, index));
        }
    }
}

fn report(out: &mut Vec<String>, name: String) {
    tracing::trace!(field = %name, "zero field");
    out.push(name);
}
