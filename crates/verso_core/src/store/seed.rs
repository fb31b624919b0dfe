//! Built-in seed collection.
//!
//! Used only when no persisted snapshot exists, so a fresh install opens on
//! a non-empty collection with categories to filter on.

use crate::model::poem::Poem;
use chrono::NaiveDate;
use uuid::Uuid;

/// Returns the fallback seed collection, newest first.
pub fn seed_poems() -> Vec<Poem> {
    vec![
        Poem {
            id: Uuid::now_v7(),
            title: "First Page".to_string(),
            content: "Welcome to your poetry collection.\n\n\
                      This is the first poem in your notebook.\n\
                      Edit or remove it whenever you like."
                .to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid seed date"),
            categories: Some(vec!["notes".to_string()]),
        },
        Poem {
            id: Uuid::now_v7(),
            title: "Night Reflections".to_string(),
            content: "The moon paints the river silver,\n\
                      and in its current I carry my dreams,\n\
                      like leaves the autumn lets go."
                .to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 18).expect("valid seed date"),
            categories: Some(vec!["nature".to_string()]),
        },
    ]
}
