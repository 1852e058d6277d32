//! Expense categories
//!
//! The category set is closed: every expense belongs to exactly one of the
//! six variants below. Ordering follows declaration order, which is also the
//! order the entry form cycles through and the order of the breakdown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    Food,
    Transport,
    #[serde(rename = "Health & Personal Care")]
    HealthPersonalCare,
    Travel,
    Leisure,
    Clothing,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::HealthPersonalCare,
        Category::Travel,
        Category::Leisure,
        Category::Clothing,
    ];

    /// The user-facing label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::HealthPersonalCare => "Health & Personal Care",
            Self::Travel => "Travel",
            Self::Leisure => "Leisure",
            Self::Clothing => "Clothing",
        }
    }

    /// All labels, in display order
    pub fn labels() -> [&'static str; 6] {
        Self::ALL.map(Self::label)
    }

    /// Position within [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next category, wrapping around (for selector widgets)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Matches labels exactly after trimming surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_order() {
        assert_eq!(
            Category::labels(),
            [
                "Food",
                "Transport",
                "Health & Personal Care",
                "Travel",
                "Leisure",
                "Clothing"
            ]
        );
    }

    #[test]
    fn test_parse_round_trips_labels() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Travel ".parse::<Category>(), Ok(Category::Travel));
    }

    #[test]
    fn test_parse_rejects_non_members() {
        assert!("Rent".parse::<Category>().is_err());
        assert!("food".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_cycling() {
        assert_eq!(Category::Food.next(), Category::Transport);
        assert_eq!(Category::Clothing.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Clothing);
        for category in Category::ALL {
            assert_eq!(category.next().prev(), category);
        }
    }

    #[test]
    fn test_index_matches_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::HealthPersonalCare).unwrap();
        assert_eq!(json, "\"Health & Personal Care\"");
        let parsed: Category = serde_json::from_str("\"Leisure\"").unwrap();
        assert_eq!(parsed, Category::Leisure);
    }
}
