use crate::{
    attr::FieldAttrs,
    util::{type_param_bounds, where_clause_with_bounds},
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Visibility};

const NOT_A_STRUCT: &str = "Reflect can only be derived for structs with named fields; \
                            use ReflectValue for leaf types";

// derive_reflect
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

///
/// FieldDef
///

struct FieldDef {
    ident: syn::Ident,
    ty: syn::Type,
    exported: bool,
    attrs: FieldAttrs,
}

fn parse_fields(input: &DeriveInput) -> Result<Vec<FieldDef>, Error> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(&input.ident, NOT_A_STRUCT));
    };

    match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                Ok(FieldDef {
                    ident: field.ident.clone().expect("named field"),
                    ty: field.ty.clone(),
                    exported: matches!(field.vis, Visibility::Public(_)),
                    attrs: FieldAttrs::parse(&field.attrs)?,
                })
            })
            .collect(),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(Error::new_spanned(&data.fields, NOT_A_STRUCT)),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let fields = parse_fields(&input)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let bounds = type_param_bounds(
        &input.generics,
        &quote!(::fieldwalk::traits::Reflect + ::fieldwalk::traits::Typed),
    );
    let where_clause = where_clause_with_bounds(where_clause, &bounds);

    let field_infos = fields.iter().enumerate().map(|(index, field)| {
        let name = field.ident.to_string();
        let ty = &field.ty;
        let exported = field.exported;
        let embedded = field.attrs.flatten;
        let tag = field.attrs.tag();

        quote! {
            ::fieldwalk::schema::FieldInfo {
                name: #name,
                index: #index,
                ty: <#ty as ::fieldwalk::traits::Typed>::info,
                exported: #exported,
                embedded: #embedded,
                tag: ::fieldwalk::schema::Tag::new(#tag),
            }
        }
    });

    let field_arms = fields.iter().enumerate().map(|(index, field)| {
        let field_ident = &field.ident;

        quote! {
            #index => Some(&self.#field_ident as &dyn ::fieldwalk::traits::Reflect),
        }
    });

    let field_refs_mut = fields.iter().map(|field| {
        let field_ident = &field.ident;

        quote!(&mut self.#field_ident as &mut dyn ::fieldwalk::traits::Reflect)
    });

    let zero_checks = fields.iter().map(|field| {
        let field_ident = &field.ident;

        quote!(&& ::fieldwalk::traits::Reflect::is_zero(&self.#field_ident))
    });

    Ok(quote! {
        impl #impl_generics ::fieldwalk::traits::StructSchema for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::fieldwalk::schema::FieldInfo] = &[
                #(#field_infos),*
            ];
        }

        impl #impl_generics ::fieldwalk::traits::Typed for #ident #ty_generics #where_clause {
            fn info() -> ::fieldwalk::schema::TypeInfo {
                ::fieldwalk::schema::TypeInfo::structure(
                    ::std::any::type_name::<Self>(),
                    <Self as ::fieldwalk::traits::StructSchema>::FIELDS,
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
                ::fieldwalk::traits::ReflectRef::Struct(self)
            }

            fn reflect_mut(&mut self) -> ::fieldwalk::traits::ReflectMut<'_> {
                ::fieldwalk::traits::ReflectMut::Struct(self)
            }

            fn is_zero(&self) -> bool {
                true #(#zero_checks)*
            }
        }

        impl #impl_generics ::fieldwalk::traits::Struct for #ident #ty_generics #where_clause {
            fn field(&self, index: usize) -> Option<&dyn ::fieldwalk::traits::Reflect> {
                match index {
                    #(#field_arms)*
                    _ => None,
                }
            }

            fn fields_mut(&mut self) -> Vec<&mut dyn ::fieldwalk::traits::Reflect> {
                vec![#(#field_refs_mut),*]
            }
        }
    })
}
