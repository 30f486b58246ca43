mod tag;

#[cfg(test)]
mod tests;

pub use tag::Tag;

use crate::Kind;

///
/// TypeInfo
///
/// Static description of one reflected type. Pointer and container types
/// reach their element type through `elem`; structs carry their declared
/// fields in declaration order.
///

#[derive(Clone, Copy, Debug)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub kind: Kind,
    pub elem: Option<fn() -> TypeInfo>,
    pub fields: &'static [FieldInfo],
}

impl TypeInfo {
    #[must_use]
    pub const fn scalar(type_name: &'static str, kind: Kind) -> Self {
        Self {
            type_name,
            kind,
            elem: None,
            fields: &[],
        }
    }

    #[must_use]
    pub const fn pointer(type_name: &'static str, elem: fn() -> Self) -> Self {
        Self {
            type_name,
            kind: Kind::Pointer,
            elem: Some(elem),
            fields: &[],
        }
    }

    /// Slice or array type; `kind` picks which.
    #[must_use]
    pub const fn sequence(type_name: &'static str, kind: Kind, elem: fn() -> Self) -> Self {
        Self {
            type_name,
            kind,
            elem: Some(elem),
            fields: &[],
        }
    }

    /// Map type; `value` describes the map's values.
    #[must_use]
    pub const fn mapping(type_name: &'static str, value: fn() -> Self) -> Self {
        Self {
            type_name,
            kind: Kind::Map,
            elem: Some(value),
            fields: &[],
        }
    }

    #[must_use]
    pub const fn structure(type_name: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self {
            type_name,
            kind: Kind::Struct,
            elem: None,
            fields,
        }
    }

    #[must_use]
    pub fn elem(&self) -> Option<Self> {
        self.elem.map(|elem| elem())
    }

    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self.kind, Kind::Struct)
    }

    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self.kind, Kind::Pointer)
    }

    /// Number of declared fields; embedded fields count once.
    #[must_use]
    pub const fn num_fields(&self) -> usize {
        self.fields.len()
    }
}

///
/// FieldInfo
///
/// Declaration metadata for one struct field, generated by
/// `#[derive(Reflect)]`.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldInfo {
    /// Declared identifier.
    pub name: &'static str,
    /// Position in the declaring struct.
    pub index: usize,
    pub ty: fn() -> TypeInfo,
    /// Declared `pub`.
    pub exported: bool,
    /// Marked `#[reflect(flatten)]`; its fields are spliced into the parent.
    pub embedded: bool,
    pub tag: Tag,
}

impl FieldInfo {
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        (self.ty)()
    }

    #[must_use]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}
