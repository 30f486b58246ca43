use crate::{
    Kind,
    schema::TypeInfo,
    traits::{List, Map, Reflect, ReflectMut, ReflectRef, Typed},
};
use std::{
    any::{Any, type_name},
    collections::{BTreeMap, HashMap},
};

// ============================================================================
// SCALARS
// ============================================================================

impl_reflect_scalar! {
    () => Unit,
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    i128 => Int,
    isize => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    u128 => Uint,
    usize => Uint,
    f32 => Float,
    f64 => Float,
    char => Char,
    String => Text,
    &'static str => Text,
}

// ============================================================================
// POINTERS
// ============================================================================

impl<T: Reflect + Typed> Typed for Option<T> {
    fn info() -> TypeInfo {
        TypeInfo::pointer(type_name::<Self>(), T::info)
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self.as_mut().map(|v| v as &mut dyn Reflect))
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_none_or(Reflect::is_zero)
    }
}

// Box is a pointer that is never nil.
impl<T: Reflect + Typed> Typed for Box<T> {
    fn info() -> TypeInfo {
        TypeInfo::pointer(type_name::<Self>(), T::info)
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(Some(&mut **self))
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// ============================================================================
// SEQUENCES
// ============================================================================

// An empty Vec is the nil slice: it is what `Default` produces.
impl<T: Reflect + Typed> Typed for Vec<T> {
    fn info() -> TypeInfo {
        TypeInfo::sequence(type_name::<Self>(), Kind::Slice, T::info)
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect + Typed> List for Vec<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_nil(&self) -> bool {
        Self::is_empty(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn info() -> TypeInfo {
        TypeInfo::sequence(type_name::<Self>(), Kind::Array, T::info)
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }

    fn is_zero(&self) -> bool {
        self.iter().all(Reflect::is_zero)
    }
}

impl<T: Reflect + Typed, const N: usize> List for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn is_nil(&self) -> bool {
        false
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }
}

// ============================================================================
// MAPS
// ============================================================================

macro_rules! impl_reflect_map {
    ($map:ident $(, $extra:ident)*) => {
        impl<K: 'static, V: Reflect + Typed $(, $extra: 'static)*> Typed for $map<K, V $(, $extra)*> {
            fn info() -> TypeInfo {
                TypeInfo::mapping(type_name::<Self>(), V::info)
            }
        }

        impl<K: 'static, V: Reflect + Typed $(, $extra: 'static)*> Reflect for $map<K, V $(, $extra)*> {
            fn type_info(&self) -> TypeInfo {
                <Self as Typed>::info()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Map(self)
            }

            fn is_zero(&self) -> bool {
                self.is_empty()
            }
        }

        impl<K: 'static, V: Reflect + Typed $(, $extra: 'static)*> Map for $map<K, V $(, $extra)*> {
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn is_nil(&self) -> bool {
                Self::is_empty(self)
            }
        }
    };
}

impl_reflect_map!(HashMap, S);
impl_reflect_map!(BTreeMap);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn scalar_zero_matches_default() {
        assert!(0i32.is_zero());
        assert!(!1i32.is_zero());
        assert!(String::new().is_zero());
        assert!(!"x".is_zero());
        assert!(false.is_zero());
        assert!(0.0f64.is_zero());
        assert!(!f64::NAN.is_zero());
        assert!('\0'.is_zero());
        assert!(().is_zero());
    }

    #[test]
    fn pointer_zero_follows_pointee() {
        assert!(None::<i32>.is_zero());
        assert!(Some(0i32).is_zero());
        assert!(!Some(3i32).is_zero());
        assert!(Box::new(0u8).is_zero());
        assert!(Some(Box::new(String::new())).is_zero());
    }

    #[test]
    fn sequences_report_nil_and_zero() {
        let empty: Vec<i32> = Vec::new();
        let filled = vec![0, 0];

        assert!(List::is_nil(&empty));
        assert!(!List::is_nil(&filled));
        assert!(!filled.is_zero());
        assert!([0u8; 3].is_zero());
        assert!(!List::is_nil(&[0u8; 0]));
        assert_eq!(List::len(&[1u8, 2, 3]), 3);
        assert!(List::get(&filled, 2).is_none());
    }

    #[test]
    fn maps_are_nil_when_empty() {
        let mut map: HashMap<String, i32> = HashMap::new();
        assert!(Map::is_nil(&map));
        assert!(map.is_zero());

        map.insert("a".into(), 0);
        assert!(!Map::is_nil(&map));
        assert_eq!(Map::len(&map), 1);
    }

    #[test]
    fn kinds_follow_containers() {
        assert_eq!((&5u32 as &dyn Reflect).kind(), Kind::Uint);
        assert_eq!((&Some(5u32) as &dyn Reflect).kind(), Kind::Pointer);
        assert_eq!((&vec![1u8] as &dyn Reflect).kind(), Kind::Slice);
        assert_eq!((&[1u8; 2] as &dyn Reflect).kind(), Kind::Array);
        assert_eq!((&BTreeMap::<u8, u8>::new() as &dyn Reflect).kind(), Kind::Map);
    }

    #[test]
    fn downcast_recovers_concrete_type() {
        let value: &dyn Reflect = &String::from("abc");

        assert!(value.is::<String>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("abc"));
        assert!(value.downcast_ref::<i32>().is_none());
    }
}
