//! Poem domain model.
//!
//! # Responsibility
//! - Define the canonical poem record and its serialized shape.
//! - Validate caller input before it reaches the collection.
//! - Normalize category labels into an ordered, duplicate-free set.
//!
//! # Invariants
//! - `id` is stable and never reused for another poem.
//! - `date` is assigned at creation and never changes afterwards.
//! - `categories`, when present, is non-empty and contains no duplicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every poem in the collection.
///
/// UUIDv7 keeps ids time-ordered, so newly assigned ids are monotonically
/// distinct across the process lifetime and cannot collide with existing ones.
pub type PoemId = Uuid;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum content length in characters.
pub const CONTENT_MAX_CHARS: usize = 2000;

/// Validation failure for poem input.
///
/// This is the only failure a caller can provoke through create/update;
/// everything else in the collection API is normal control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemValidationError {
    /// Title is empty after trimming surrounding whitespace.
    EmptyTitle,
    /// Content is empty after trimming surrounding whitespace.
    EmptyContent,
    /// Title exceeds [`TITLE_MAX_CHARS`].
    TitleTooLong { chars: usize },
    /// Content exceeds [`CONTENT_MAX_CHARS`].
    ContentTooLong { chars: usize },
}

impl Display for PoemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "poem title cannot be empty"),
            Self::EmptyContent => write!(f, "poem content cannot be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "poem title has {chars} characters, maximum is {TITLE_MAX_CHARS}"
            ),
            Self::ContentTooLong { chars } => write!(
                f,
                "poem content has {chars} characters, maximum is {CONTENT_MAX_CHARS}"
            ),
        }
    }
}

impl Error for PoemValidationError {}

/// Canonical persisted record for one poem.
///
/// The serialized shape is a JSON object with string fields `id`, `title`,
/// `content`, `date` (`YYYY-MM-DD`) and an optional string array
/// `categories`, omitted entirely when the poem has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    /// Stable id assigned at creation, immutable thereafter.
    pub id: PoemId,
    /// Trimmed, non-empty, at most [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Trimmed, non-empty, at most [`CONTENT_MAX_CHARS`] characters.
    pub content: String,
    /// Calendar date of creation. Not updated on edit.
    pub date: NaiveDate,
    /// Ordered set of labels. `None` when the poem has no categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Poem {
    /// Returns the poem's category labels, empty when it has none.
    pub fn category_labels(&self) -> &[String] {
        self.categories.as_deref().unwrap_or(&[])
    }

    /// Returns whether the poem carries the given label (exact match).
    pub fn has_category(&self, label: &str) -> bool {
        self.category_labels().iter().any(|value| value == label)
    }
}

/// Caller-provided input for create/update operations.
///
/// Drafts are raw user input; validation and normalization happen when the
/// collection store accepts the draft, never inside field setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemDraft {
    pub title: String,
    pub content: String,
    pub categories: Vec<String>,
}

impl PoemDraft {
    /// Creates a draft without categories.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            categories: Vec::new(),
        }
    }

    /// Replaces the draft's category labels.
    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Validates a title and returns the trimmed value that gets stored.
pub fn validate_title(title: &str) -> Result<String, PoemValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(PoemValidationError::EmptyTitle);
    }
    let chars = trimmed.chars().count();
    if chars > TITLE_MAX_CHARS {
        return Err(PoemValidationError::TitleTooLong { chars });
    }
    Ok(trimmed.to_string())
}

/// Validates content and returns the trimmed value that gets stored.
pub fn validate_content(content: &str) -> Result<String, PoemValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(PoemValidationError::EmptyContent);
    }
    let chars = trimmed.chars().count();
    if chars > CONTENT_MAX_CHARS {
        return Err(PoemValidationError::ContentTooLong { chars });
    }
    Ok(trimmed.to_string())
}

/// Normalizes category labels into the stored representation.
///
/// Rules:
/// - Each label is trimmed; blank labels are dropped.
/// - Duplicates (exact string match) are dropped, keeping the first
///   occurrence so display order follows insertion order.
/// - An empty result collapses to `None`.
pub fn normalize_categories(categories: &[String]) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for label in categories {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            normalized.push(trimmed.to_string());
        }
    }

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_categories, validate_content, validate_title, Poem, PoemValidationError,
        TITLE_MAX_CHARS,
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn validate_title_trims_and_rejects_blank() {
        assert_eq!(validate_title("  Nocturne  ").unwrap(), "Nocturne");
        assert_eq!(
            validate_title("   ").unwrap_err(),
            PoemValidationError::EmptyTitle
        );
    }

    #[test]
    fn validate_title_enforces_character_bound() {
        let at_limit = "a".repeat(TITLE_MAX_CHARS);
        assert!(validate_title(&at_limit).is_ok());

        let over_limit = "a".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            validate_title(&over_limit).unwrap_err(),
            PoemValidationError::TitleTooLong {
                chars: TITLE_MAX_CHARS + 1
            }
        );
    }

    #[test]
    fn validate_content_rejects_blank() {
        assert_eq!(
            validate_content("\n\t").unwrap_err(),
            PoemValidationError::EmptyContent
        );
    }

    #[test]
    fn normalize_categories_keeps_insertion_order_and_drops_duplicates() {
        let input = vec![
            " love ".to_string(),
            "nature".to_string(),
            "love".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(
            normalize_categories(&input),
            Some(vec!["love".to_string(), "nature".to_string()])
        );
    }

    #[test]
    fn normalize_categories_collapses_empty_result_to_none() {
        assert_eq!(normalize_categories(&[]), None);
        assert_eq!(normalize_categories(&["  ".to_string()]), None);
    }

    #[test]
    fn poem_serializes_date_as_iso_and_omits_absent_categories() {
        let poem = Poem {
            id: Uuid::now_v7(),
            title: "Tide".to_string(),
            content: "Salt on the morning wind.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date"),
            categories: None,
        };

        let json = serde_json::to_value(&poem).expect("poem serializes");
        assert_eq!(json["date"], "2024-01-20");
        assert!(json.get("categories").is_none());
    }
}
