use fieldwalk::prelude::*;
use std::collections::BTreeMap;

#[derive(Default, Reflect)]
pub struct Page<T>
where
    T: Clone,
{
    pub items: Vec<T>,
    pub index: BTreeMap<String, T>,
    pub cursor: Option<T>,
}

#[derive(Default, Reflect)]
pub struct Marker;

fn main() {
    let page: Page<u32> = Page::default();

    assert!(page.is_zero());
    assert!(Marker.is_zero());
    assert_eq!(<Page<u32> as Typed>::info().fields.len(), 3);
}
