/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ObjectKey validation errors
    EmptyObjectKey,
    ObjectKeyTooLong {
        actual: usize,
        max: usize,
    },
    InvalidObjectKeyCharacter(char),
    ObjectKeyStartsWithSlash,
    ObjectKeyContainsDoubleSlash,
    ObjectKeyDotSegment,

    // Slug validation errors
    EmptySlug,
    SlugCollidesWithMetadataKey(String),

    // BucketName validation errors
    EmptyBucketName,
    BucketNameInvalidCharacter(char),

    // MetadataRecord validation errors
    MissingField(&'static str),
    InvalidField {
        field: String,
        value: String,
        expected: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ObjectKey errors
            ValidationError::EmptyObjectKey => write!(f, "Object key cannot be empty"),
            ValidationError::ObjectKeyTooLong { actual, max } => {
                write!(f, "Object key too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidObjectKeyCharacter(c) => {
                write!(f, "Invalid character in object key: {:?}", c)
            }
            ValidationError::ObjectKeyStartsWithSlash => {
                write!(f, "Object key cannot start with '/'")
            }
            ValidationError::ObjectKeyContainsDoubleSlash => {
                write!(f, "Object key cannot contain '//'")
            }
            ValidationError::ObjectKeyDotSegment => {
                write!(f, "Object key cannot contain '.' or '..' segments")
            }

            // Slug errors
            ValidationError::EmptySlug => write!(f, "Slug cannot be empty"),
            ValidationError::SlugCollidesWithMetadataKey(slug) => {
                write!(
                    f,
                    "Slug '{}' ends in '.meta' and would collide with a metadata object",
                    slug
                )
            }

            // BucketName errors
            ValidationError::EmptyBucketName => write!(f, "Bucket name cannot be empty"),
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(f, "Invalid character in bucket name: {:?}", c)
            }

            // MetadataRecord errors
            ValidationError::MissingField(field) => {
                write!(f, "Missing required field '{}'", field)
            }
            ValidationError::InvalidField {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value for field '{}': '{}' (expected: {})",
                    field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
