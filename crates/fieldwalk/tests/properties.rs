use fieldwalk::{prelude::*, walk::is_allowed};
use proptest::prelude::*;

///
/// Row
///

#[derive(Clone, Debug, Default, Reflect)]
pub struct Row {
    #[reflect(tag(json = "alpha,omitempty"))]
    pub a: i64,
    #[reflect(tag(json = "beta"))]
    pub b: String,
    pub c: bool,
    pub d: Option<u8>,
    #[reflect(tag(json = "-"))]
    pub e: u16,
    pub list: Vec<i32>,
    pub nested: Pair,
}

///
/// Pair
///

#[derive(Clone, Debug, Default, Reflect)]
pub struct Pair {
    pub left: u32,
    pub right: u32,
}

///
/// Embedded
///

#[derive(Clone, Debug, Default, Reflect)]
pub struct Embedded {
    pub x: i64,
}

///
/// Host
///

#[derive(Clone, Debug, Default, Reflect)]
pub struct Host {
    #[reflect(flatten)]
    pub embedded: Embedded,
    pub y: i64,
}

///
/// Letters
///

#[derive(Clone, Debug, Default, Reflect)]
pub struct Letters {
    pub a: i64,
    pub b: Option<Box<i64>>,
    pub c: Vec<i64>,
    pub d: Pair,
}

fn arb_row() -> impl Strategy<Value = Row> {
    (
        any::<i64>(),
        "[a-z]{0,3}",
        any::<bool>(),
        any::<Option<u8>>(),
        any::<u16>(),
        prop::collection::vec(-2i32..3, 0..4),
        (0u32..3, 0u32..3),
    )
        .prop_map(|(a, b, c, d, e, list, (left, right))| Row {
            a,
            b,
            c,
            d,
            e,
            list,
            nested: Pair { left, right },
        })
}

#[test]
fn letters_example() {
    let value = Letters {
        a: 0,
        b: Some(Box::new(0)),
        c: vec![1, 0, 2],
        d: Pair::default(),
    };

    let names = zero_field_names(&value, "", "", &[]).unwrap();
    assert_eq!(names, vec!["a", "b", "c[1]", "d.left", "d.right"]);

    let names = zero_field_names(&value, "", "", &["a"]).unwrap();
    assert_eq!(names, vec!["a"]);
}

#[test]
fn embedded_struct_is_never_an_entry() {
    let names: Vec<_> = flat_exported_fields(&Host::default())
        .unwrap()
        .iter()
        .map(|b| b.field.name)
        .collect();

    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn nil_is_zero() {
    assert!(is_zero_value(None));
    assert!(is_nil_like(None));
}

proptest! {
    #[test]
    fn scalar_zero_iff_default(n in any::<i64>(), s in "[a-z]{0,2}", flag in any::<bool>()) {
        prop_assert_eq!(n.is_zero(), n == 0);
        prop_assert_eq!(s.is_zero(), s.is_empty());
        prop_assert_eq!(flag.is_zero(), !flag);
        prop_assert!(!is_nil_like(Some(&n)));
    }

    #[test]
    fn pointer_zero_follows_pointee(n in any::<i32>()) {
        prop_assert_eq!(Some(n).is_zero(), n == 0);
        prop_assert_eq!(Some(Box::new(n)).is_zero(), n == 0);
        prop_assert!(None::<i32>.is_zero());
    }

    #[test]
    fn traversals_are_idempotent(row in arb_row()) {
        prop_assert_eq!(
            zero_field_names(&row, "p.", "json", &[]).unwrap(),
            zero_field_names(&row, "p.", "json", &[]).unwrap()
        );

        let first: Vec<_> = flat_exported_named_fields(&row, "json")
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        let second: Vec<_> = flat_exported_named_fields(&row, "json")
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ignored_field_never_appears(row in arb_row()) {
        let zero = zero_field_names(&row, "", "json", &[]).unwrap();

        prop_assert!(zero.iter().all(|name| name != "e" && name != "-"));
    }

    #[test]
    fn resolved_names_survive_their_own_allow_list(row in arb_row()) {
        for binding in flat_exported_named_fields(&row, "json").unwrap() {
            let name = binding.name.as_str();
            prop_assert!(is_allowed(&[name], name));

            let zero = zero_field_names(&row, "", "json", &[name]).unwrap();
            let prefix = format!("{name}[");
            prop_assert!(zero.iter().all(|z| z == name || z.starts_with(&prefix)));

            let scalar = !matches!(binding.value.kind(), Kind::Slice | Kind::Struct);
            if scalar {
                prop_assert_eq!(zero.contains(&name.to_string()), binding.value.is_zero());
            }
        }
    }

    #[test]
    fn allow_list_output_is_a_subset(row in arb_row(), pick in 0usize..4) {
        let names = ["alpha", "beta", "c", "d"];
        let allowed = &names[..pick];

        let zero = zero_field_names(&row, "", "json", allowed).unwrap();

        prop_assert!(zero.iter().all(|z| allowed.contains(&z.as_str())));
    }
}
