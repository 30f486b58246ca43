use crate::{
    ReflectError,
    normalize::normalize,
    schema::FieldInfo,
    traits::Struct,
    walk::{FieldBinding, embedded_struct},
};
use std::iter::FusedIterator;

const OP: &str = "flat_exported_fields_iter";

///
/// FlatFields
///
/// Lazy walk over the flattened `pub` fields of one struct. Embedded structs
/// are entered only when the walk reaches them. The first error ends the
/// iteration.
///

pub struct FlatFields<'a> {
    stack: Vec<Frame<'a>>,
    max_depth: usize,
}

struct Frame<'a> {
    st: &'a dyn Struct,
    fields: &'static [FieldInfo],
    next: usize,
    addressable: bool,
}

impl<'a> Frame<'a> {
    fn new(st: &'a dyn Struct, addressable: bool) -> Self {
        Self {
            st,
            fields: st.type_info().fields,
            next: 0,
            addressable,
        }
    }
}

impl<'a> FlatFields<'a> {
    pub(crate) fn new(st: &'a dyn Struct, addressable: bool, max_depth: usize) -> Self {
        Self {
            stack: vec![Frame::new(st, addressable)],
            max_depth,
        }
    }

    fn fail(&mut self, err: ReflectError) -> Option<Result<FieldBinding<'a>, ReflectError>> {
        self.stack.clear();

        Some(Err(err))
    }
}

impl<'a> Iterator for FlatFields<'a> {
    type Item = Result<FieldBinding<'a>, ReflectError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;

            let fields = frame.fields;
            let Some(field) = fields.get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            let (st, addressable) = (frame.st, frame.addressable);
            let Some(value) = st.field(field.index) else {
                continue;
            };

            if field.embedded {
                let resolved = normalize(value);
                match embedded_struct(OP, resolved) {
                    Ok(Some(inner)) => {
                        if depth > self.max_depth {
                            let type_name = inner.type_info().type_name;
                            return self.fail(ReflectError::depth_exceeded(self.max_depth, type_name));
                        }
                        self.stack
                            .push(Frame::new(inner, addressable || resolved.indirections > 0));
                    }
                    Ok(None) => {}
                    Err(err) => return self.fail(err),
                }
                continue;
            }

            if field.exported {
                return Some(Ok(FieldBinding {
                    field,
                    value,
                    addressable,
                    depth: depth - 1,
                }));
            }
        }
    }
}

impl FusedIterator for FlatFields<'_> {}
