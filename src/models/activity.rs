// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model shared by the gateway, the store and the form.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Fixed set of activity categories offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    Drinks,
    Culture,
    Film,
    Food,
    Music,
    Travel,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Drinks,
        Category::Culture,
        Category::Film,
        Category::Food,
        Category::Music,
        Category::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Drinks => "drinks",
            Category::Culture => "culture",
            Category::Film => "film",
            Category::Food => "food",
            Category::Music => "music",
            Category::Travel => "travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| wanted.to_string())
    }
}

/// One event record, as held by the store and exchanged with the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Client-generated UUID, immutable once assigned
    pub id: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    /// Combined date and time, no offset
    #[serde(with = "crate::time_utils::serde_timestamp")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDateTime,
    pub city: String,
    pub venue: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Music".parse::<Category>(), Ok(Category::Music));
        assert_eq!(" travel ".parse::<Category>(), Ok(Category::Travel));
        assert_eq!("opera".parse::<Category>(), Err("opera".to_string()));
    }

    #[test]
    fn test_activity_deserializes_service_payload() {
        let json = r#"{
            "id": "a",
            "title": "Past Activity 1",
            "category": "drinks",
            "description": "Activity 2 months ago",
            "date": "2021-01-01T10:00:00.000Z",
            "city": "London",
            "venue": "Pub"
        }"#;

        let activity: Activity = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(activity.category, Category::Drinks);
        assert_eq!(
            crate::time_utils::format_timestamp(activity.date),
            "2021-01-01T10:00:00"
        );
    }

    #[test]
    fn test_activity_serializes_canonical_date() {
        let activity = Activity {
            id: "a".to_string(),
            title: "Film night".to_string(),
            category: Category::Film,
            description: "Watching a film".to_string(),
            date: crate::time_utils::parse_timestamp("2021-01-01T10:00:00").unwrap(),
            city: "Paris".to_string(),
            venue: "Cinema".to_string(),
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["date"], "2021-01-01T10:00:00");
        assert_eq!(value["category"], "film");
    }
}
