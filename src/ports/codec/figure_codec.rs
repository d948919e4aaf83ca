/// Content type of JSON payloads
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors raised while turning figures into bytes and back
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Failed to encode figure: {0}")]
    Encode(String),

    #[error("Failed to decode figure: {0}")]
    Decode(String),
}

/// Port for the charting library's own figure serialization.
/// The client never looks inside the bytes.
pub trait FigureCodec: Send + Sync + 'static {
    /// In-memory figure type handled by this codec
    type Figure;

    fn encode(&self, figure: &Self::Figure) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Figure, CodecError>;

    /// Content type stored alongside encoded figures
    fn content_type(&self) -> &str {
        JSON_CONTENT_TYPE
    }
}
