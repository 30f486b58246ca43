use crate::{IGNORE_NAME, schema::FieldInfo};
use std::fmt;

///
/// FieldName
///
/// Externally visible name of a field: the tag-derived (or declared) name
/// with the caller's prefix, plus the tag's option string after the first
/// comma. Options are carried along, never interpreted here.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldName {
    pub name: String,
    pub options: String,
}

impl FieldName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Whether `option` appears in the comma-separated option string.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        !option.is_empty() && self.options.split(',').any(|o| o == option)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Resolve the visible name of `field`.
///
/// Returns `None` when the tag under `tag_key` names the field `-`.
#[must_use]
pub fn resolve_field_name(field: &FieldInfo, name_prefix: &str, tag_key: &str) -> Option<FieldName> {
    let (candidate, options) = match field.tag.lookup(tag_key) {
        None => (String::new(), String::new()),
        Some(value) => match value.split_once(',') {
            Some((name, options)) => (name.to_string(), options.to_string()),
            None => (value, String::new()),
        },
    };

    if candidate == IGNORE_NAME {
        return None;
    }

    let base = if candidate.is_empty() {
        field.name
    } else {
        candidate.as_str()
    };

    Some(FieldName {
        name: format!("{name_prefix}{base}"),
        options,
    })
}

/// Prefix handed to the fields of a nested struct.
#[must_use]
pub fn child_prefix(parent: &str) -> String {
    format!("{parent}.")
}

/// Name reported for one element of a slice or array field.
#[must_use]
pub fn element_name(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Exact-membership allow-list check; an empty list allows everything.
#[must_use]
pub fn is_allowed<S: AsRef<str>>(allow_list: &[S], name: &str) -> bool {
    allow_list.is_empty() || allow_list.iter().any(|n| n.as_ref() == name)
}
