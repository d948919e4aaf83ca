pub mod artifact;
pub mod metadata;

pub use artifact::*;
pub use metadata::MetadataRecord;
