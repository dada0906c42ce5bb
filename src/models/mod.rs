use serde::{Deserialize, Deserializer};

pub mod booking;
pub mod flat;
pub mod office;
pub mod reservation;

/// Nullable backend columns arrive as an explicit `null`; read those as the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
