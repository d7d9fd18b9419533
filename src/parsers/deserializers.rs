use serde::{Deserialize, Deserializer};

/// Deserialize a field that the search tool may emit as `null`, using the
/// type's default value in that case
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
