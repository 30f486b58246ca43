use crate::{
    DEFAULT_MAX_DEPTH, ReflectError,
    traits::Reflect,
    validate::{FieldErrors, Probe, ValidateWalk},
    zero::ZeroWalk,
};

///
/// WalkOptions
///
/// Reusable settings for zero detection and validation. The free functions
/// [`zero_field_names`](crate::zero::zero_field_names) and
/// [`validate_fields`](crate::validate::validate_fields) behave like
/// `WalkOptions::default()` with the corresponding fields set.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalkOptions {
    /// Prepended verbatim to every top-level name.
    pub name_prefix: String,
    /// Tag key names are resolved under; empty means declared names only.
    pub tag_key: String,
    /// Exact resolved names to visit; empty visits every field.
    pub allow_list: Vec<String>,
    /// Struct nesting limit; see [`DEFAULT_MAX_DEPTH`].
    pub max_depth: usize,
}

impl WalkOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    #[must_use]
    pub fn with_allow_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Names of the exported fields of `value` holding zero values.
    pub fn zero_field_names(&self, value: &dyn Reflect) -> Result<Vec<String>, ReflectError> {
        ZeroWalk {
            tag_key: &self.tag_key,
            allow_list: self.allow_list.as_slice(),
            max_depth: self.max_depth,
        }
        .run(value, &self.name_prefix)
    }

    /// Run `validate` over the exported fields of `value`.
    pub fn validate_fields<E, F>(
        &self,
        validate: F,
        value: &dyn Reflect,
    ) -> Result<FieldErrors<E>, ReflectError>
    where
        F: FnMut(Probe<'_>) -> Result<(), E>,
    {
        ValidateWalk {
            tag_key: &self.tag_key,
            allow_list: self.allow_list.as_slice(),
            max_depth: self.max_depth,
            validate,
        }
        .run(value, &self.name_prefix)
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            name_prefix: String::new(),
            tag_key: String::new(),
            allow_list: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
