use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit JSON `null` from an absent field in patch bodies.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent => `None`, `null` => `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Resolves a required text field, rejecting missing and empty values.
pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(v) if !v.is_empty() => {
            storable(field, &v)?;
            Ok(v)
        }
        _ => Err(format!("{} is required", field)),
    }
}

/// Rejects text the store cannot hold: NUL is not allowed in TEXT columns.
pub(crate) fn storable(field: &str, value: &str) -> Result<(), String> {
    if value.contains('\0') {
        Err(format!("{} must not contain NUL characters", field))
    } else {
        Ok(())
    }
}

/// [`storable`] for optional fields; `None` always passes.
pub(crate) fn storable_opt(field: &str, value: &Option<String>) -> Result<(), String> {
    value.as_deref().map_or(Ok(()), |v| storable(field, v))
}
