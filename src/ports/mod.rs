pub mod codec;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use codec::{CodecError, FigureCodec};
pub use services::ArtifactService;
pub use storage::{ObjectInfo, ObjectStore, PutReceipt};
