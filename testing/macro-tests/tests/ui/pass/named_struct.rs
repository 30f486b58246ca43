use fieldwalk::prelude::*;

#[derive(Default, Reflect)]
pub struct Account {
    #[reflect(tag(json = "id,omitempty", db = "account_id"))]
    pub id: u64,
    #[reflect(tag = "json:\"display\"")]
    pub name: String,
    secret: String,
}

fn main() {
    let account = Account::default();
    let names = zero_field_names(&account, "", "json", &[]).unwrap();

    assert_eq!(names, vec!["id", "display"]);
    assert!(account.secret.is_empty());
}
