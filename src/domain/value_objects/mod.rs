mod bucket_name;
mod object_key;
mod slug;

pub use bucket_name::BucketName;
pub use object_key::{ARTIFACT_SUFFIX, METADATA_SUFFIX, ObjectKey};
pub use slug::Slug;
