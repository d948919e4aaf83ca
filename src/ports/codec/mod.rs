mod figure_codec;

pub use figure_codec::{CodecError, FigureCodec, JSON_CONTENT_TYPE};
