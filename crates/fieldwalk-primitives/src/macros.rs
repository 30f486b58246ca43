#[macro_export]
macro_rules! kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Unit, is_nilable = false, as_str = "unit"),
            (Bool, is_nilable = false, as_str = "bool"),
            (Int, is_nilable = false, as_str = "int"),
            (Uint, is_nilable = false, as_str = "uint"),
            (Float, is_nilable = false, as_str = "float"),
            (Char, is_nilable = false, as_str = "char"),
            (Text, is_nilable = false, as_str = "text"),
            (Opaque, is_nilable = false, as_str = "opaque"),
            (Pointer, is_nilable = true, as_str = "pointer"),
            (Slice, is_nilable = true, as_str = "slice"),
            (Array, is_nilable = false, as_str = "array"),
            (Map, is_nilable = true, as_str = "map"),
            (Struct, is_nilable = false, as_str = "struct"),
        }
    };
}

#[macro_export]
macro_rules! kind_registry {
    ($macro:ident) => {
        $crate::kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($variant:ident, is_nilable = $is_nilable:expr, as_str = $as_str:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::Kind::$variant => $crate::KindMetadata {
                    is_nilable: $is_nilable,
                    name: $as_str,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($variant:ident, is_nilable = $is_nilable:expr, as_str = $as_str:expr) ),* $(,)? ) => {
        [ $( $crate::Kind::$variant ),* ]
    };
}
