use crate::domain::errors::ValidationError;

/// Suffix of the object holding a serialized figure
pub const ARTIFACT_SUFFIX: &str = ".json";

/// Suffix of the object holding a figure's metadata record
pub const METADATA_SUFFIX: &str = ".meta.json";

/// Maximum key length accepted by S3-compatible stores
const MAX_KEY_LENGTH: usize = 1024;

/// Characters object stores percent-encode or recommend avoiding in keys.
/// A key containing one would not be stored (or listed) under its own name.
const RESERVED_CHARACTERS: &[char] = &[
    '%', '#', '?', '*', '[', ']', '{', '}', '~', '|', '<', '>', '\\', '^', '"', '`',
];

/// A validated object key in the bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > MAX_KEY_LENGTH {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_LENGTH,
            });
        }

        if let Some(c) = value
            .chars()
            .find(|c| c.is_control() || RESERVED_CHARACTERS.contains(c))
        {
            return Err(ValidationError::InvalidObjectKeyCharacter(c));
        }

        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        if value.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(ValidationError::ObjectKeyDotSegment);
        }

        Ok(Self(value))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `<slug>.meta.json` keys
    pub fn is_metadata(&self) -> bool {
        self.0.ends_with(METADATA_SUFFIX)
    }

    /// True for `<slug>.json` keys that are not metadata keys
    pub fn is_artifact(&self) -> bool {
        self.0.ends_with(ARTIFACT_SUFFIX) && !self.is_metadata()
    }

    /// The slug stem of an artifact key, `None` for any other key
    pub fn artifact_stem(&self) -> Option<&str> {
        if self.is_artifact() {
            self.0.strip_suffix(ARTIFACT_SUFFIX)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object_key() {
        assert!(ObjectKey::new("plot.json".to_string()).is_ok());
        assert!(ObjectKey::new("folder/plot.meta.json".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_object_key() {
        assert!(ObjectKey::new("".to_string()).is_err());
        assert!(ObjectKey::new("/leading-slash".to_string()).is_err());
        assert!(ObjectKey::new("double//slash".to_string()).is_err());
        assert!(ObjectKey::new("null\0byte".to_string()).is_err());
        assert!(ObjectKey::new("x".repeat(1025)).is_err());
        assert!(ObjectKey::new("./plot.json".to_string()).is_err());
        assert!(ObjectKey::new("a/../plot.json".to_string()).is_err());
    }

    #[test]
    fn test_key_length_boundary() {
        assert!(ObjectKey::new("x".repeat(MAX_KEY_LENGTH)).is_ok());
        assert_eq!(
            ObjectKey::new("x".repeat(MAX_KEY_LENGTH + 1)),
            Err(ValidationError::ObjectKeyTooLong {
                actual: MAX_KEY_LENGTH + 1,
                max: MAX_KEY_LENGTH,
            })
        );
    }

    #[test]
    fn test_reserved_characters_are_rejected() {
        for (key, c) in [
            ("50%growth.json", '%'),
            ("q1#draft.json", '#'),
            ("what?.json", '?'),
            ("a*b.json", '*'),
            ("tab\tkey.json", '\t'),
        ] {
            assert_eq!(
                ObjectKey::new(key.to_string()),
                Err(ValidationError::InvalidObjectKeyCharacter(c))
            );
        }
        // Unicode and ordinary punctuation are stored verbatim
        assert!(ObjectKey::new("ventes-été_2024 (v2).json".to_string()).is_ok());
    }

    #[test]
    fn test_key_classification() {
        let artifact = ObjectKey::new("plot.json".to_string()).unwrap();
        assert!(artifact.is_artifact());
        assert!(!artifact.is_metadata());
        assert_eq!(artifact.artifact_stem(), Some("plot"));

        let meta = ObjectKey::new("plot.meta.json".to_string()).unwrap();
        assert!(meta.is_metadata());
        assert!(!meta.is_artifact());
        assert_eq!(meta.artifact_stem(), None);

        let other = ObjectKey::new("notes.txt".to_string()).unwrap();
        assert!(!other.is_artifact());
        assert_eq!(other.artifact_stem(), None);

        // Exact suffix match only; no character-set trimming
        let dotted = ObjectKey::new("son.json".to_string()).unwrap();
        assert_eq!(dotted.artifact_stem(), Some("son"));
    }
}
