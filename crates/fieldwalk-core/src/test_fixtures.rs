#![allow(dead_code)]

use fieldwalk_derive::Reflect;
use std::collections::BTreeMap;

///
/// Inner
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Inner {
    pub count: u32,
    pub label: String,
    pub ratio: f64,
    pub(crate) hidden: u8,
}

///
/// Outer
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Outer {
    pub a: Option<i32>,
    pub b: Option<Box<i32>>,
    pub c: Vec<i32>,
    pub d: Inner,
    pub e: String,
    pub f: bool,
    pub(crate) hidden: u8,
}

impl Outer {
    pub fn populated() -> Self {
        Self {
            a: Some(1),
            b: Some(Box::new(2)),
            c: vec![1, 2],
            d: Inner {
                count: 1,
                label: "x".into(),
                ratio: 0.5,
                hidden: 0,
            },
            e: "e".into(),
            f: true,
            hidden: 0,
        }
    }
}

///
/// Account
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Account {
    #[reflect(tag(json = "id,omitempty"))]
    pub id: u64,
    #[reflect(tag(json = "display_name"))]
    pub name: String,
    #[reflect(tag(json = "-"))]
    pub password: String,
    #[reflect(tag(json = "home"))]
    pub address: Inner,
}

///
/// Labels
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Labels {
    pub inner: Option<Box<Inner>>,
    pub names: BTreeMap<String, u32>,
}

///
/// Base
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Base {
    #[reflect(tag(json = "base_id"))]
    pub id: u64,
    pub(crate) revision: u32,
}

///
/// Meta
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Meta {
    pub owner: String,
}

///
/// Record
///
/// Embeds a direct struct and an optional one between plain fields.
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Record {
    pub title: String,
    #[reflect(flatten)]
    pub base: Base,
    pub(crate) note: String,
    #[reflect(flatten)]
    pub meta: Option<Box<Meta>>,
    pub done: bool,
}

///
/// Chain
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Chain {
    pub value: u8,
    #[reflect(flatten)]
    pub next: Option<Box<Chain>>,
}

///
/// Broken
/// Flattens a field that is not a struct.
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Broken {
    pub name: String,
    #[reflect(flatten)]
    pub count: u32,
}

///
/// Shell
/// Nests a struct inside an embedded one.
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Shell {
    #[reflect(flatten)]
    pub layer: Layer,
}

///
/// Layer
///

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct Layer {
    pub inner: Inner,
}
