use proc_macro::TokenStream;

mod attr;
mod reflect;
mod util;
mod value;

/// Reflection for structs with named fields.
///
/// Field attributes:
/// - `#[reflect(flatten)]` splices the field's own fields into this struct
/// - `#[reflect(tag(json = "name,omitempty"))]` attaches tag values by key
/// - `#[reflect(tag = "json:\"name\"")]` attaches a raw tag string
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input.into()).into()
}

/// Reflection for leaf types compared against their `Default` value.
#[proc_macro_derive(ReflectValue)]
pub fn derive_reflect_value(input: TokenStream) -> TokenStream {
    value::derive_reflect_value(input.into()).into()
}
