//! This module exports different types for JSON interactions.
//! It encapsulates the differences between serde_json and simd-json to allow
//! ignoring those in the rest of the codebase.

use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use crate::Result;

#[cfg(not(feature = "simd-json"))]
pub type Value = serde_json::Value;
#[cfg(feature = "simd-json")]
pub type Value = simd_json::OwnedValue;

#[cfg(not(feature = "simd-json"))]
pub use serde_json::json;
#[cfg(not(feature = "simd-json"))]
pub use serde_json::Error as JsonError;
#[cfg(feature = "simd-json")]
pub use simd_json::json;
#[cfg(feature = "simd-json")]
pub use simd_json::Error as JsonError;

#[cfg(not(feature = "simd-json"))]
pub type JsonMap = serde_json::Map<String, Value>;
#[cfg(feature = "simd-json")]
pub type JsonMap = simd_json::owned::Object;

#[cfg(not(feature = "simd-json"))]
pub const NULL: Value = Value::Null;
#[cfg(feature = "simd-json")]
pub const NULL: Value = Value::Static(simd_json::StaticNode::Null);

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn to_string<T>(v: &T) -> Result<String>
where
    T: Serialize,
{
    #[cfg(not(feature = "simd-json"))]
    let result = serde_json::to_string(v)?;
    #[cfg(feature = "simd-json")]
    let result = simd_json::to_string(v)?;
    Ok(result)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn to_value<T>(v: T) -> Result<Value>
where
    T: Serialize,
{
    #[cfg(not(feature = "simd-json"))]
    let result = serde_json::to_value(v)?;
    #[cfg(feature = "simd-json")]
    let result = simd_json::serde::to_owned_value(v)?;
    Ok(result)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_str<T>(s: &mut str) -> Result<T>
where
    T: DeserializeOwned,
{
    #[cfg(not(feature = "simd-json"))]
    let result = serde_json::from_str(s)?;
    #[cfg(feature = "simd-json")]
    let result = {
        let mut bytes = s.as_bytes().to_vec();
        simd_json::from_slice(&mut bytes)?
    };
    Ok(result)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_slice<T>(v: &mut [u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    #[cfg(not(feature = "simd-json"))]
    let result = serde_json::from_slice(v)?;
    #[cfg(feature = "simd-json")]
    let result = simd_json::from_slice(v)?;
    Ok(result)
}

/// Deserializes an owned [`Value`] into `T`.
///
/// The raw backend error is preserved so that callers performing payload
/// dispatch can classify the failure; see [`crate::model::error::Error`].
pub(crate) fn from_value_raw<T>(v: Value) -> std::result::Result<T, JsonError>
where
    T: DeserializeOwned,
{
    #[cfg(not(feature = "simd-json"))]
    let result = serde_json::from_value(v)?;
    #[cfg(feature = "simd-json")]
    let result = simd_json::serde::from_owned_value(v)?;
    Ok(result)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_value<T>(v: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(from_value_raw(v)?)
}
