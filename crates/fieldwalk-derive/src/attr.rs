use syn::{Attribute, Error, LitStr, meta::ParseNestedMeta};

///
/// FieldAttrs
///
/// Parsed `#[reflect(...)]` options for one field.
///

#[derive(Default)]
pub struct FieldAttrs {
    pub flatten: bool,
    raw_tag: Option<String>,
    pairs: Vec<(String, String)>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| out.parse_meta(&meta))?;
        }

        Ok(out)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> Result<(), Error> {
        if meta.path.is_ident("flatten") {
            if self.flatten {
                return Err(meta.error("duplicate `flatten`"));
            }
            self.flatten = true;
            return Ok(());
        }

        if meta.path.is_ident("tag") {
            // tag = "key:\"value\""
            if meta.input.peek(syn::Token![=]) {
                if self.raw_tag.is_some() {
                    return Err(meta.error("duplicate raw `tag`"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                self.raw_tag = Some(lit.value());
                return Ok(());
            }

            // tag(key = "value", ...)
            return meta.parse_nested_meta(|pair| {
                let Some(key) = pair.path.get_ident() else {
                    return Err(pair.error("tag key must be a single identifier"));
                };
                let key = key.to_string();
                if self.pairs.iter().any(|(k, _)| *k == key) {
                    return Err(pair.error(format!("duplicate tag key `{key}`")));
                }
                let lit: LitStr = pair.value()?.parse()?;
                self.pairs.push((key, lit.value()));

                Ok(())
            });
        }

        Err(meta.error("unsupported reflect attribute; expected `flatten` or `tag`"))
    }

    /// Render the tag in `key:"value"` form, raw text first.
    pub fn tag(&self) -> String {
        let mut parts = Vec::with_capacity(self.pairs.len() + 1);

        if let Some(raw) = self.raw_tag.as_ref().filter(|raw| !raw.is_empty()) {
            parts.push(raw.clone());
        }
        for (key, value) in &self.pairs {
            parts.push(format!("{key}:\"{}\"", escape(value)));
        }

        parts.join(" ")
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }

    out
}
