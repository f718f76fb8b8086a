/// Implements [`Entity`](crate::compare::Entity) from a field manifest.
///
/// Each entry is `shape field`, where `shape` names a [`Walker`] method
/// (`scalar`, `optional`, `sequence`, `mapping`, `entity`,
/// `optional_entity`, `entity_sequence`, `entity_mapping`). The diff key
/// defaults to the field name and can be overridden with `as "key"`. A
/// trailing `: volatile` marks the field skippable.
///
/// ```
/// use hapmodel_core::entity_fields;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Acl {
///     index: Option<i64>,
///     acl_name: String,
///     #[serde(rename = "type")]
///     kind: Option<String>,
/// }
///
/// entity_fields!(Acl {
///     optional index: volatile,
///     scalar acl_name,
///     optional kind as "type",
/// });
/// ```
///
/// [`Walker`]: crate::compare::Walker
#[macro_export]
macro_rules! entity_fields {
    (@field $field:ident [] []) => {
        $crate::compare::Field::new(stringify!($field))
    };
    (@field $field:ident [$name:literal] []) => {
        $crate::compare::Field::new($name)
    };
    (@field $field:ident [] [$flag:ident]) => {
        $crate::compare::Field::new(stringify!($field)).$flag()
    };
    (@field $field:ident [$name:literal] [$flag:ident]) => {
        $crate::compare::Field::new($name).$flag()
    };

    ($ty:ty {
        $( $shape:ident $field:ident $(as $name:literal)? $(: $flag:ident)? ),* $(,)?
    }) => {
        impl $crate::compare::Entity for $ty {
            fn walk<S: $crate::compare::Sink>(
                a: &Self,
                b: &Self,
                walker: &mut $crate::compare::Walker<S>,
            ) -> ::std::ops::ControlFlow<()> {
                $(
                    walker.$shape(
                        $crate::entity_fields!(@field $field [$($name)?] [$($flag)?]),
                        &a.$field,
                        &b.$field,
                    )?;
                )*
                ::std::ops::ControlFlow::Continue(())
            }
        }
    };
}
