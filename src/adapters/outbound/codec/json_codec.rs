use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

use crate::ports::codec::{CodecError, FigureCodec};

/// Codec for figures that serialize to JSON through serde.
///
/// The default figure type is a raw `serde_json::Value`, which carries a
/// plotly figure (`{"data": [...], "layout": {...}}`) without interpreting it.
pub struct JsonCodec<T = serde_json::Value> {
    _figure: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        Self {
            _figure: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonCodec").finish()
    }
}

impl<T> FigureCodec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    type Figure = T;

    fn encode(&self, figure: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(figure).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
