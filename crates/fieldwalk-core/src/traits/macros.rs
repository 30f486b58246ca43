// impl_reflect_scalar
// leaf types whose zero value is their `Default`
macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::traits::Typed for $ty {
                fn info() -> $crate::schema::TypeInfo {
                    $crate::schema::TypeInfo::scalar(
                        ::std::any::type_name::<Self>(),
                        $crate::Kind::$kind,
                    )
                }
            }

            impl $crate::traits::Reflect for $ty {
                fn type_info(&self) -> $crate::schema::TypeInfo {
                    <Self as $crate::traits::Typed>::info()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }

                fn reflect_ref(&self) -> $crate::traits::ReflectRef<'_> {
                    $crate::traits::ReflectRef::Scalar(self)
                }

                fn reflect_mut(&mut self) -> $crate::traits::ReflectMut<'_> {
                    $crate::traits::ReflectMut::Scalar(self)
                }

                #[allow(clippy::float_cmp, clippy::unit_cmp)]
                fn is_zero(&self) -> bool {
                    *self == <$ty as ::std::default::Default>::default()
                }
            }
        )*
    };
}
