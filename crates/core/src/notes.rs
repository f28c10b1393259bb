//! Note and category records as they travel over the wire, plus the
//! validation rules applied to a note before it is stored.
//!
//! The same [`Note`] type is produced by the server and consumed by the
//! client, so a note returned from `POST /api/notes` can be prepended to a
//! list fetched from `GET /api/notes` without conversion.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_NOTE_TITLE_LENGTH: usize = 255;

/// Maximum length of note content in characters.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

/// A category as exposed by `GET /api/categories` and embedded in notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// A note joined with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub category: Option<Category>,
}

/// Request body for `POST /api/notes`.
///
/// Every field is optional at the type level so that a missing field is
/// reported as a validation failure rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Accepted as a JSON number or a numeric string; always sent as a number.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<DbId>,
}

/// A note that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
}

impl CreateNote {
    /// Validate the request, producing an insertable [`NewNote`].
    ///
    /// Title and content are kept exactly as sent; whitespace only matters
    /// for the blank check.
    pub fn validate(self) -> Result<NewNote, CoreError> {
        let title = required_field("title", self.title)?;
        validate_note_title(&title).map_err(CoreError::Validation)?;

        let content = required_field("content", self.content)?;
        validate_note_content(&content).map_err(CoreError::Validation)?;

        Ok(NewNote {
            title,
            content,
            category_id: self.category_id,
        })
    }
}

fn required_field(name: &str, value: Option<String>) -> Result<String, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required field: {name}")))
}

/// Read an optional id that may arrive as `3`, `"3"` or `null`.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Number(DbId),
        Text(String),
    }

    match Option::<WireId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireId::Number(id)) => Ok(Some(id)),
        Some(WireId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id: {text:?}"))),
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: must be non-empty and within the length limit.
pub fn validate_note_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Note title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_NOTE_TITLE_LENGTH {
        return Err(format!(
            "Note title exceeds maximum length of {MAX_NOTE_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content: must be non-empty and within the length limit.
pub fn validate_note_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Note content cannot be empty".to_string());
    }
    if content.chars().count() > MAX_NOTE_CONTENT_LENGTH {
        return Err(format!(
            "Note content exceeds maximum length of {MAX_NOTE_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: Option<&str>, content: Option<&str>) -> CreateNote {
        CreateNote {
            title: title.map(String::from),
            content: content.map(String::from),
            category_id: None,
        }
    }

    // -- validate_note_title -------------------------------------------------

    #[test]
    fn valid_title_accepted() {
        assert!(validate_note_title("Groceries").is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        assert!(validate_note_title("").is_err());
        assert!(validate_note_title("   ").is_err());
    }

    #[test]
    fn title_at_max_length_accepted() {
        let title = "t".repeat(MAX_NOTE_TITLE_LENGTH);
        assert!(validate_note_title(&title).is_ok());
    }

    #[test]
    fn title_over_max_length_rejected() {
        let title = "t".repeat(MAX_NOTE_TITLE_LENGTH + 1);
        let result = validate_note_title(&title);
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    #[test]
    fn title_with_tab_accepted() {
        assert!(validate_note_title("Plan\tA").is_ok());
    }

    // -- validate_note_content -----------------------------------------------

    #[test]
    fn multiline_content_accepted() {
        assert!(validate_note_content("Milk\neggs\nbread").is_ok());
    }

    #[test]
    fn empty_content_rejected() {
        let result = validate_note_content("");
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn content_over_max_length_rejected() {
        let content = "a".repeat(MAX_NOTE_CONTENT_LENGTH + 1);
        assert!(validate_note_content(&content).is_err());
    }

    // -- CreateNote::validate ------------------------------------------------

    #[test]
    fn validate_keeps_fields_verbatim_and_keeps_category() {
        let input = CreateNote {
            title: Some("  Groceries ".into()),
            content: Some("Milk, eggs\n".into()),
            category_id: Some(7),
        };

        let note = input.validate().unwrap();

        assert_eq!(note.title, "  Groceries ");
        assert_eq!(note.content, "Milk, eggs\n");
        assert_eq!(note.category_id, Some(7));
    }

    #[test]
    fn validate_reports_missing_title() {
        let err = request(None, Some("x")).validate().unwrap_err();
        assert!(err.to_string().contains("Missing required field: title"));
    }

    #[test]
    fn validate_reports_missing_content() {
        let err = request(Some("x"), None).validate().unwrap_err();
        assert!(err.to_string().contains("Missing required field: content"));
    }

    #[test]
    fn validate_rejects_empty_title() {
        let err = request(Some(""), Some("x")).validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    // -- serde ---------------------------------------------------------------

    #[test]
    fn create_note_reads_camel_case_and_null_category() {
        let input: CreateNote = serde_json::from_value(serde_json::json!({
            "title": "Groceries",
            "content": "Milk, eggs",
            "categoryId": null
        }))
        .unwrap();

        assert_eq!(input.title.as_deref(), Some("Groceries"));
        assert_eq!(input.category_id, None);
    }

    #[test]
    fn create_note_tolerates_absent_category() {
        let input: CreateNote =
            serde_json::from_value(serde_json::json!({ "title": "a", "content": "b" })).unwrap();
        assert_eq!(input.category_id, None);
    }

    #[test]
    fn create_note_accepts_string_category_id() {
        let input: CreateNote = serde_json::from_value(serde_json::json!({
            "title": "a",
            "content": "b",
            "categoryId": "3"
        }))
        .unwrap();
        assert_eq!(input.category_id, Some(3));

        let numeric: CreateNote = serde_json::from_value(serde_json::json!({
            "title": "a",
            "content": "b",
            "categoryId": 3
        }))
        .unwrap();
        assert_eq!(numeric.category_id, Some(3));
    }

    #[test]
    fn create_note_rejects_non_numeric_category_id() {
        let result = serde_json::from_value::<CreateNote>(serde_json::json!({
            "title": "a",
            "content": "b",
            "categoryId": "work"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn note_serializes_with_camel_case_keys() {
        let note = Note {
            id: 1,
            title: "Groceries".into(),
            content: "Milk, eggs".into(),
            category_id: None,
            user_id: 3,
            created_at: chrono::Utc::now(),
            category: None,
        };

        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(json["userId"], 3);
        assert!(json["categoryId"].is_null());
        assert!(json["category"].is_null());
        assert!(json["createdAt"].is_string());
    }
}
