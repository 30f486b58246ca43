use fieldwalk::prelude::*;

#[derive(Clone, Default, PartialEq, ReflectValue)]
pub enum Level {
    #[default]
    Low,
    High,
}

#[derive(Default, PartialEq, ReflectValue)]
pub struct Celsius(i32);

#[derive(Default, Reflect)]
pub struct Reading {
    pub level: Level,
    pub temperature: Celsius,
}

fn main() {
    let reading = Reading {
        level: Level::High,
        temperature: Celsius(0),
    };
    let names = zero_field_names(&reading, "", "", &[]).unwrap();

    assert_eq!(names, vec!["temperature"]);
    assert_eq!((&reading.level as &dyn Reflect).kind(), Kind::Opaque);
}
