use std::fmt;

///
/// Tag
///
/// Raw declarative tag attached to a field, in the conventional
/// `key:"value" other:"value"` form. Values are double-quoted and may
/// escape `"` and `\` with a backslash.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Tag(&'static str);

impl Tag {
    pub const EMPTY: Self = Self("");

    #[must_use]
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the value stored under `key`, or `None` if the key is absent.
    ///
    /// An empty key never matches. Parsing stops at the first malformed
    /// pair, so keys after it are not found.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }

        let mut rest = self.0;
        while !rest.is_empty() {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                break;
            }

            let bytes = rest.as_bytes();
            let name_len = bytes
                .iter()
                .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
                .unwrap_or(bytes.len());
            if name_len == 0
                || name_len + 1 >= bytes.len()
                || bytes[name_len] != b':'
                || bytes[name_len + 1] != b'"'
            {
                break;
            }

            let name = &rest[..name_len];
            rest = &rest[name_len + 1..];

            // rest starts at the opening quote
            let bytes = rest.as_bytes();
            let mut i = 1;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= bytes.len() {
                break;
            }

            let quoted = &rest[..=i];
            rest = &rest[i + 1..];

            if name == key {
                return unquote(quoted);
            }
        }

        None
    }

    /// Like [`Tag::lookup`], but an absent key yields an empty string.
    #[must_use]
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Strip the surrounding quotes and resolve backslash escapes.
fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }

    Some(out)
}
