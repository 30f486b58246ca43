use crate::{
    Kind,
    schema::{Tag, TypeInfo},
    traits::Typed,
};

// ---- tag parsing -------------------------------------------------------

#[test]
fn lookup_finds_each_key() {
    let tag = Tag::new(r#"json:"name,omitempty" db:"user_name""#);

    assert_eq!(tag.lookup("json").as_deref(), Some("name,omitempty"));
    assert_eq!(tag.lookup("db").as_deref(), Some("user_name"));
    assert_eq!(tag.lookup("xml"), None);
}

#[test]
fn lookup_distinguishes_empty_from_absent() {
    let tag = Tag::new(r#"json:"""#);

    assert_eq!(tag.lookup("json").as_deref(), Some(""));
    assert_eq!(tag.get("json"), "");
    assert_eq!(tag.lookup("db"), None);
    assert_eq!(tag.get("db"), "");
}

#[test]
fn empty_key_never_matches() {
    let tag = Tag::new(r#"json:"x""#);

    assert_eq!(tag.lookup(""), None);
    assert_eq!(Tag::EMPTY.lookup(""), None);
}

#[test]
fn lookup_resolves_escapes() {
    let tag = Tag::new(r#"doc:"say \"hi\" \\ bye""#);

    assert_eq!(tag.lookup("doc").as_deref(), Some(r#"say "hi" \ bye"#));
}

#[test]
fn lookup_stops_at_malformed_pair() {
    let tag = Tag::new(r#"json:"a" broken db:"b""#);

    assert_eq!(tag.lookup("json").as_deref(), Some("a"));
    assert_eq!(tag.lookup("db"), None);
}

#[test]
fn lookup_tolerates_extra_spaces() {
    let tag = Tag::new(r#"  json:"a"    db:"b"  "#);

    assert_eq!(tag.lookup("db").as_deref(), Some("b"));
}

#[test]
fn unterminated_value_is_absent() {
    let tag = Tag::new(r#"json:"abc"#);

    assert_eq!(tag.lookup("json"), None);
}

// ---- type info ---------------------------------------------------------

#[test]
fn pointer_info_reaches_element() {
    let info = <Option<Box<i32>> as Typed>::info();

    assert_eq!(info.kind, Kind::Pointer);
    let inner = info.elem().expect("option has element");
    assert_eq!(inner.kind, Kind::Pointer);
    assert_eq!(inner.elem().expect("box has element").kind, Kind::Int);
}

#[test]
fn scalar_info_has_no_fields() {
    let info = TypeInfo::scalar("u8", Kind::Uint);

    assert!(!info.is_struct());
    assert_eq!(info.num_fields(), 0);
    assert!(info.elem().is_none());
}
