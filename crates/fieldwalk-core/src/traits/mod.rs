#[macro_use]
mod macros;
mod impls;

use crate::{
    Kind,
    schema::{FieldInfo, TypeInfo},
};
use std::{any::Any, fmt};

// ============================================================================
// DYNAMIC ACCESS
// ============================================================================
//
// Object-safe traits the walkers operate on. Every walk takes a
// `&dyn Reflect` and dispatches on `reflect_ref`.
//

///
/// Reflect
///
/// A value whose type is described by a `TypeInfo` and whose contents can
/// be reached without knowing the concrete type.
///

pub trait Reflect: Any {
    fn type_info(&self) -> TypeInfo;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Whether this value equals the zero value of its type.
    ///
    /// Structs are zero when every field is zero; pointers are zero when
    /// nil or when their pointee is zero.
    fn is_zero(&self) -> bool;
}

impl dyn Reflect {
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.type_info().kind
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_info().type_name
    }

    #[must_use]
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.type_name())
    }
}

///
/// Struct
///
/// Field access for reflected structs. `field` takes the declared index
/// from `FieldInfo::index`.
///

pub trait Struct: Reflect {
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    /// All fields, mutably, in declaration order.
    fn fields_mut(&mut self) -> Vec<&mut dyn Reflect>;
}

///
/// List
///

pub trait List: Reflect {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this list is the nil value of its type. Arrays never are.
    fn is_nil(&self) -> bool;

    fn get(&self, index: usize) -> Option<&dyn Reflect>;
}

///
/// Map
///
/// Maps are reachable only far enough to tell nil from non-nil.
///

pub trait Map: Reflect {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_nil(&self) -> bool;
}

///
/// ReflectRef
///

pub enum ReflectRef<'a> {
    Scalar(&'a dyn Reflect),
    /// `None` is a nil pointer.
    Pointer(Option<&'a dyn Reflect>),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Struct(&'a dyn Struct),
}

///
/// ReflectMut
///

pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Reflect),
    Pointer(Option<&'a mut dyn Reflect>),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Struct(&'a mut dyn Struct),
}

// ============================================================================
// STATIC SCHEMA
// ============================================================================

///
/// Typed
///
/// Type-level access to a `TypeInfo`, for queries that have no instance.
///

pub trait Typed {
    fn info() -> TypeInfo;
}

///
/// StructSchema
///
/// Declared field table of a reflected struct, generated by the derive.
///

pub trait StructSchema {
    const FIELDS: &'static [FieldInfo];
}

/// Shorthand for `<T as Typed>::info()`.
#[must_use]
pub fn type_info_of<T: Typed>() -> TypeInfo {
    T::info()
}
