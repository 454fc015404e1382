//! Declarative mapping targets.

/// Declare a struct as a csv entity.
///
/// Every field carries a `#[column(...)]` attribute with any of the keys
/// `name = "..."`, `pos = N`, `format = "..."`, `required` and `readonly`.
/// An empty `#[column()]` declares a field with no column metadata, which
/// the resolver rejects for reading. Field kinds come from the Rust field
/// type through [`FieldValue`](crate::FieldValue), so a field type without
/// a conversion does not compile.
///
/// The macro derives `Default` and implements [`Record`](crate::Record) and
/// [`CsvEntity`](crate::CsvEntity); the record type descriptor is built on
/// first use and cached for the life of the process.
///
/// ```
/// use chrono::NaiveDate;
/// use csvorm_map::csv_entity;
///
/// csv_entity! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct User {
///         #[column(name = "name", pos = 0)]
///         pub name: String,
///         #[column(name = "dob", pos = 1, format = "yyyy-MM-dd")]
///         pub dob: NaiveDate,
///         #[column(name = "nick", required)]
///         pub nick: Option<String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! csv_entity {
    (@binding $field:ident : $fty:ty, ( $($key:ident $(= $val:expr)?),* $(,)? )) => {
        $crate::FieldBinding::new(
            stringify!($field),
            <$fty as $crate::FieldValue>::kind(),
        )
        $( .$key($($val)?) )*
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                #[column $args:tt]
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $fty,
            )*
        }

        impl $crate::Record for $name {
            fn assign(
                &mut self,
                binding: &$crate::FieldBinding,
                value: $crate::Value,
            ) -> $crate::Result<()> {
                $(
                    if binding.field == stringify!($field) {
                        self.$field =
                            <$fty as $crate::FieldValue>::from_bound_value(binding, value)?;
                        return Ok(());
                    }
                )*
                let _ = value;
                Err($crate::MappingError::UnknownField {
                    field: binding.field.clone(),
                    record_type: stringify!($name).to_string(),
                })
            }

            fn value_of(&self, binding: &$crate::FieldBinding) -> $crate::Result<$crate::Value> {
                $(
                    if binding.field == stringify!($field) {
                        return Ok($crate::FieldValue::to_value(&self.$field));
                    }
                )*
                Err($crate::MappingError::UnknownField {
                    field: binding.field.clone(),
                    record_type: stringify!($name).to_string(),
                })
            }
        }

        impl $crate::CsvEntity for $name {
            fn record_type() -> &'static $crate::RecordType {
                static RECORD_TYPE: ::std::sync::OnceLock<$crate::RecordType> =
                    ::std::sync::OnceLock::new();
                RECORD_TYPE.get_or_init(|| {
                    $crate::RecordType::entity(
                        stringify!($name),
                        vec![$($crate::csv_entity!(@binding $field : $fty, $args)),*],
                    )
                })
            }
        }
    };
}
