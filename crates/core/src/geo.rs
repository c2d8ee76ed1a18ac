//! Geolocation payload shared by SOS events and check-in requests.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A latitude/longitude pair as supplied by the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Parse and validate a location from raw request JSON.
    ///
    /// The payload must be an object with numeric, finite `lat` and `lng`
    /// fields. Anything else (missing fields, strings, NaN, null) is a
    /// [`CoreError::Validation`], so the caller surfaces a 400 rather than
    /// a body-deserialization rejection.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let obj = value
            .as_object()
            .ok_or_else(|| CoreError::Validation("location must be an object".into()))?;

        let lat = finite_field(obj, "lat")?;
        let lng = finite_field(obj, "lng")?;

        Ok(Location { lat, lng })
    }
}

/// Extract a required finite numeric field from a JSON object.
fn finite_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<f64, CoreError> {
    let value = obj
        .get(key)
        .ok_or_else(|| CoreError::Validation(format!("location.{key} is required")))?;

    let num = value
        .as_f64()
        .ok_or_else(|| CoreError::Validation(format!("location.{key} must be a number")))?;

    if !num.is_finite() {
        return Err(CoreError::Validation(format!(
            "location.{key} must be a finite number"
        )));
    }

    Ok(num)
}
