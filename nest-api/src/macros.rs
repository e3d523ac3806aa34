//! Declarative macros for per-resource field getters
//!
//! Every getter is the same round trip: read one field of one resource as
//! raw text, then convert it with [`FromFieldText`](crate::FromFieldText).
//! The macro stamps out one `NestClient` method per field.

/// Generate single-field getters on `NestClient`
///
/// Each entry produces `<prefix>_<field>(&self, id) -> Result<type>`, where
/// the field name doubles as the wire name.
///
/// # Example
/// ```rust,ignore
/// define_field_getters! {
///     kind: SmokeCoAlarms,
///     prefix: smoke_co_alarm,
///     fields: {
///         battery_health: String,
///         is_online: bool,
///     }
/// }
/// ```
macro_rules! define_field_getters {
    (
        kind: $kind:ident,
        prefix: $prefix:ident,
        fields: {
            $($field:ident: $ret:ty),* $(,)?
        } $(,)?
    ) => {
        paste::paste! {
            impl $crate::client::NestClient {
                $(
                    pub fn [<$prefix _ $field>](&self, id: &str) -> $crate::Result<$ret> {
                        let raw = self.get_value(
                            $crate::resource::ResourceKind::$kind,
                            id,
                            stringify!($field),
                        )?;
                        <$ret as $crate::value::FromFieldText>::from_field_text(&raw)
                    }
                )*
            }
        }
    };
}
