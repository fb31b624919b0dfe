//! Derived filtered view over the collection.
//!
//! # Responsibility
//! - Provide pure query functions over a poem slice.
//! - Keep result shaping deterministic: collection order is preserved.
//!
//! # Invariants
//! - The view owns no state beyond the filter criteria; it is recomputed
//!   from the authoritative list on every call.
//! - Search and category criteria compose with logical AND.

use crate::model::poem::Poem;
use std::collections::BTreeSet;

/// Filter criteria for the derived view.
///
/// Both criteria are optional; an absent criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemFilter {
    /// Case-insensitive substring matched against title, content, or any
    /// category label. Blank text means match-all.
    pub query: Option<String>,
    /// Exact membership test against the poem's category labels.
    pub category: Option<String>,
}

impl PoemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query criterion.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the category criterion.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns whether the poem satisfies every present criterion.
    pub fn matches(&self, poem: &Poem) -> bool {
        self.matches_query(poem) && self.matches_category(poem)
    }

    fn matches_query(&self, poem: &Poem) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        poem.title.to_lowercase().contains(&needle)
            || poem.content.to_lowercase().contains(&needle)
            || poem
                .category_labels()
                .iter()
                .any(|label| label.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, poem: &Poem) -> bool {
        match self.category.as_deref() {
            Some(category) => poem.has_category(category),
            None => true,
        }
    }
}

/// Computes the derived filtered view, preserving collection order.
pub fn filter_poems<'a>(poems: &'a [Poem], filter: &PoemFilter) -> Vec<&'a Poem> {
    poems.iter().filter(|poem| filter.matches(poem)).collect()
}

/// Searches by free text only.
pub fn search<'a>(poems: &'a [Poem], query: &str) -> Vec<&'a Poem> {
    filter_poems(poems, &PoemFilter::new().with_query(query))
}

/// Filters by exact category membership only.
pub fn filter_by_category<'a>(poems: &'a [Poem], category: &str) -> Vec<&'a Poem> {
    filter_poems(poems, &PoemFilter::new().with_category(category))
}

/// Returns all distinct category labels across the collection,
/// lexicographically sorted.
pub fn list_categories(poems: &[Poem]) -> Vec<String> {
    let mut labels = BTreeSet::new();
    for poem in poems {
        for label in poem.category_labels() {
            labels.insert(label.clone());
        }
    }
    labels.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::PoemFilter;
    use crate::model::poem::Poem;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn poem_with(title: &str, content: &str, categories: &[&str]) -> Poem {
        Poem {
            id: Uuid::now_v7(),
            title: title.to_string(),
            content: content.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            categories: if categories.is_empty() {
                None
            } else {
                Some(categories.iter().map(|label| label.to_string()).collect())
            },
        }
    }

    #[test]
    fn blank_query_matches_everything() {
        let poem = poem_with("Tide", "Salt wind.", &[]);
        assert!(PoemFilter::new().with_query("   ").matches(&poem));
        assert!(PoemFilter::new().matches(&poem));
    }

    #[test]
    fn query_matches_category_labels_case_insensitively() {
        let poem = poem_with("Tide", "Salt wind.", &["Seascapes"]);
        assert!(PoemFilter::new().with_query("seascape").matches(&poem));
    }

    #[test]
    fn category_criterion_is_exact_membership() {
        let poem = poem_with("Tide", "Salt wind.", &["love"]);
        assert!(PoemFilter::new().with_category("love").matches(&poem));
        assert!(!PoemFilter::new().with_category("Love").matches(&poem));
        assert!(!PoemFilter::new().with_category("lov").matches(&poem));
    }
}
