use thiserror::Error as ThisError;

///
/// ReflectError
///
/// Programmer errors raised by the walkers. A walk that hits one of these
/// stops immediately and returns no partial output; these describe a wrong
/// input shape, never invalid data.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReflectError {
    #[error("{op} expects a struct or a pointer to a struct, but got: {type_name}")]
    NotAStruct {
        op: &'static str,
        type_name: &'static str,
    },

    #[error("map field '{field}' ({type_name}) is not supported by {op}")]
    UnsupportedMap {
        op: &'static str,
        field: String,
        type_name: &'static str,
    },

    #[error("struct nesting exceeds max depth {max_depth} at {type_name}")]
    DepthExceeded {
        max_depth: usize,
        type_name: &'static str,
    },
}

impl ReflectError {
    pub(crate) const fn not_a_struct(op: &'static str, type_name: &'static str) -> Self {
        Self::NotAStruct { op, type_name }
    }

    pub(crate) fn unsupported_map(
        op: &'static str,
        field: impl Into<String>,
        type_name: &'static str,
    ) -> Self {
        Self::UnsupportedMap {
            op,
            field: field.into(),
            type_name,
        }
    }

    pub(crate) const fn depth_exceeded(max_depth: usize, type_name: &'static str) -> Self {
        Self::DepthExceeded {
            max_depth,
            type_name,
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotAStruct { .. } => ErrorClass::InvalidInput,
            Self::UnsupportedMap { .. } => ErrorClass::Unsupported,
            Self::DepthExceeded { .. } => ErrorClass::LimitExceeded,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    Unsupported,
    LimitExceeded,
}
