use fieldwalk::prelude::*;

#[derive(Default, Reflect)]
pub struct Base {
    pub id: u64,
}

#[derive(Default, Reflect)]
pub struct Meta {
    pub owner: String,
}

#[derive(Default, Reflect)]
pub struct Post {
    #[reflect(flatten)]
    pub base: Base,
    #[reflect(flatten)]
    pub meta: Option<Box<Meta>>,
    pub title: String,
}

fn main() {
    let post = Post::default();
    let count = flat_exported_fields(&post).unwrap().len();

    assert_eq!(count, 2);
}
