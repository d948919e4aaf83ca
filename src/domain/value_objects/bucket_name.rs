use crate::domain::errors::ValidationError;

/// Letter that replaces the first character of an access key in the
/// per-account bucket name
const BUCKET_PREFIX: char = 'b';

/// A bucket name.
///
/// Account buckets are derived from access keys and may carry uppercase
/// letters, so only characters that break URL or key composition are refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Create a new BucketName with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }

        if let Some(c) = value
            .chars()
            .find(|c| *c == '/' || *c == '?' || *c == '&' || c.is_whitespace() || c.is_control())
        {
            return Err(ValidationError::BucketNameInvalidCharacter(c));
        }

        Ok(Self(value))
    }

    /// Derive the account bucket from an access key: `b` + key without its
    /// first character
    pub fn from_access_key(access_key: &str) -> Result<Self, ValidationError> {
        let mut chars = access_key.chars();
        if chars.next().is_none() {
            return Err(ValidationError::EmptyBucketName);
        }

        let mut name = String::with_capacity(access_key.len());
        name.push(BUCKET_PREFIX);
        name.push_str(chars.as_str());
        Self::new(name)
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
