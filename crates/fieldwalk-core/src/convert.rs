use crate::{traits::Reflect, walk::FieldBinding};
use std::any::Any;

/// Erase reflected values to `&dyn Any`, preserving order.
#[must_use]
pub fn values_to_any<'a>(values: &[&'a dyn Reflect]) -> Vec<&'a dyn Any> {
    values.iter().map(|&value| value.as_any()).collect()
}

/// Erase the values of a set of field bindings to `&dyn Any`.
#[must_use]
pub fn bindings_to_any<'a>(bindings: &[FieldBinding<'a>]) -> Vec<&'a dyn Any> {
    bindings.iter().map(|&FieldBinding { value, .. }| value.as_any()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_fixtures::Inner, walk::flat_exported_fields};

    #[test]
    fn erased_values_downcast_in_order() {
        let values: [&dyn Reflect; 3] = [&42i32, &String::from("hello"), &true];

        let erased = values_to_any(&values);

        assert_eq!(erased.len(), 3);
        assert_eq!(erased[0].downcast_ref::<i32>(), Some(&42));
        assert_eq!(erased[1].downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert_eq!(erased[2].downcast_ref::<bool>(), Some(&true));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(values_to_any(&[]).is_empty());
    }

    #[test]
    fn bindings_erase_field_values() {
        let inner = Inner {
            count: 3,
            ..Inner::default()
        };
        let bindings = flat_exported_fields(&inner).unwrap();

        let erased = bindings_to_any(&bindings);

        assert_eq!(erased[0].downcast_ref::<u32>(), Some(&3));
        assert!(erased[1].is::<String>());
    }
}
