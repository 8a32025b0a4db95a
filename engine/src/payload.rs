//! Decoding of API response bodies into record types.

use crate::{error::Result, Error};
use serde::de::DeserializeOwned;

/// Decode a JSON body, naming the call it came from on failure.
pub fn decode<T: DeserializeOwned>(source_name: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::InvalidPayload {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
