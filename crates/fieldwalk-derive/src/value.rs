use crate::util::{type_param_bounds, where_clause_with_bounds};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

// derive_reflect_value
//
// Opaque leaf: no fields are exposed and zero means equal to `Default`.
pub fn derive_reflect_value(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let mut bounds = type_param_bounds(&input.generics, &quote!('static));
    bounds.push(quote!(#ident #ty_generics: ::std::cmp::PartialEq + ::std::default::Default));
    let where_clause = where_clause_with_bounds(where_clause, &bounds);

    quote! {
        impl #impl_generics ::fieldwalk::traits::Typed for #ident #ty_generics #where_clause {
            fn info() -> ::fieldwalk::schema::TypeInfo {
                ::fieldwalk::schema::TypeInfo::scalar(
                    ::std::any::type_name::<Self>(),
                    ::fieldwalk::Kind::Opaque,
                )
            }
        }

        impl #impl_generics ::fieldwalk::traits::Reflect for #ident #ty_generics #where_clause {
            fn type_info(&self) -> ::fieldwalk::schema::TypeInfo {
                <Self as ::fieldwalk::traits::Typed>::info()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn reflect_ref(&self) -> ::fieldwalk::traits::ReflectRef<'_> {
                ::fieldwalk::traits::ReflectRef::Scalar(self)
            }

            fn reflect_mut(&mut self) -> ::fieldwalk::traits::ReflectMut<'_> {
                ::fieldwalk::traits::ReflectMut::Scalar(self)
            }

            fn is_zero(&self) -> bool {
                *self == <Self as ::std::default::Default>::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_is_opaque_scalar() {
        let out = derive_reflect_value(quote! {
            pub enum Status { #[default] Active, Closed }
        })
        .to_string();

        assert!(out.contains("Opaque"));
        assert!(out.contains("Scalar"));
        assert!(!out.contains("Struct"));
    }
}
