use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::errors::ValidationError;

/// Descriptive record stored next to a figure as `<slug>.meta.json`.
///
/// Every constructor, setter and deserialization path runs the same checks,
/// so a `MetadataRecord` in hand is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMetadataRecord")]
pub struct MetadataRecord {
    title: String,
    author: String,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

/// Unvalidated field set, from the wire or from a constructor/setter
#[derive(Debug, Deserialize, Validate)]
struct RawMetadataRecord {
    #[validate(length(min = 1), custom(function = "not_blank"))]
    title: String,
    #[validate(length(min = 1), custom(function = "not_blank"))]
    author: String,
    #[serde(default = "today")]
    date: NaiveDate,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    #[validate(email)]
    author_email: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl TryFrom<RawMetadataRecord> for MetadataRecord {
    type Error = ValidationError;

    fn try_from(raw: RawMetadataRecord) -> Result<Self, Self::Error> {
        raw.validate().map_err(|errors| field_error(&errors, &raw))?;

        Ok(Self {
            title: raw.title,
            author: raw.author,
            date: raw.date,
            description: raw.description,
            author_email: raw.author_email,
            avatar: raw.avatar,
        })
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Report the first failing field, required fields before the email
fn field_error(errors: &ValidationErrors, raw: &RawMetadataRecord) -> ValidationError {
    let fields = errors.field_errors();
    if fields.contains_key("title") {
        return ValidationError::MissingField("title");
    }
    if fields.contains_key("author") {
        return ValidationError::MissingField("author");
    }
    ValidationError::InvalidField {
        field: "author_email".to_string(),
        value: raw.author_email.clone().unwrap_or_default(),
        expected: "an email address".to_string(),
    }
}

impl MetadataRecord {
    /// Create a record dated today
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_from(RawMetadataRecord {
            title: title.into(),
            author: author.into(),
            date: today(),
            description: None,
            author_email: None,
            avatar: None,
        })
    }

    fn to_raw(&self) -> RawMetadataRecord {
        RawMetadataRecord {
            title: self.title.clone(),
            author: self.author.clone(),
            date: self.date,
            description: self.description.clone(),
            author_email: self.author_email.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_author_email(
        mut self,
        author_email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.set_author_email(Some(author_email.into()))?;
        Ok(self)
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn author_email(&self) -> Option<&str> {
        self.author_email.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    // Setters validate a candidate record; a rejected value leaves the record as it was.

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::try_from(RawMetadataRecord {
            title: title.into(),
            ..self.to_raw()
        })?;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::try_from(RawMetadataRecord {
            author: author.into(),
            ..self.to_raw()
        })?;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_author_email(&mut self, author_email: Option<String>) -> Result<(), ValidationError> {
        *self = Self::try_from(RawMetadataRecord {
            author_email,
            ..self.to_raw()
        })?;
        Ok(())
    }

    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.avatar = avatar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_defaults_to_today() {
        let record = MetadataRecord::new("Test Plot", "Tester").unwrap();
        assert_eq!(record.title(), "Test Plot");
        assert_eq!(record.author(), "Tester");
        assert_eq!(record.date(), chrono::Local::now().date_naive());
        assert_eq!(record.description(), None);
        assert_eq!(record.author_email(), None);
        assert_eq!(record.avatar(), None);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            MetadataRecord::new("", "Tester"),
            Err(ValidationError::MissingField("title"))
        );
        assert_eq!(
            MetadataRecord::new("Test Plot", "   "),
            Err(ValidationError::MissingField("author"))
        );
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        assert!(serde_json::from_value::<MetadataRecord>(json!({ "author": "Tester" })).is_err());
        assert!(serde_json::from_value::<MetadataRecord>(json!({ "title": "Test Plot" })).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_email() {
        let result = serde_json::from_value::<MetadataRecord>(json!({
            "title": "Test Plot",
            "author": "Tester",
            "author_email": "not-an-email",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_blank_required_fields() {
        let err = serde_json::from_value::<MetadataRecord>(json!({
            "title": "",
            "author": "Tester",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("title"), "{err}");
    }

    #[test]
    fn test_email_error_names_the_value() {
        let err = MetadataRecord::new("Test Plot", "Tester")
            .unwrap()
            .with_author_email("tester@")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidField {
                field: "author_email".to_string(),
                value: "tester@".to_string(),
                expected: "an email address".to_string(),
            }
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let record: MetadataRecord = serde_json::from_value(json!({
            "title": "Test Plot",
            "author": "Tester",
            "description": null,
        }))
        .unwrap();
        assert_eq!(record.date(), chrono::Local::now().date_naive());
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let record = MetadataRecord::new("Test Plot", "Tester")
            .unwrap()
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .with_author_email("tester@example.com")
            .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Test Plot",
                "author": "Tester",
                "date": "2024-03-01",
                "author_email": "tester@example.com",
            })
        );

        let back: MetadataRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_setters_validate_assignment() {
        let mut record = MetadataRecord::new("Test Plot", "Tester").unwrap();

        assert!(record.set_author_email(Some("tester@".to_string())).is_err());
        assert_eq!(record.author_email(), None);

        record
            .set_author_email(Some("tester@example.com".to_string()))
            .unwrap();
        assert_eq!(record.author_email(), Some("tester@example.com"));

        assert!(record.set_title("").is_err());
        assert_eq!(record.title(), "Test Plot");
        assert_eq!(
            record.set_author(" "),
            Err(ValidationError::MissingField("author"))
        );
        assert_eq!(record.author(), "Tester");

        record.set_author("Someone Else").unwrap();
        assert_eq!(record.author(), "Someone Else");

        record.set_author_email(None).unwrap();
        assert_eq!(record.author_email(), None);
    }
}
