// src/domain/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fixed topic tags an article (or a user's preference) can carry.
/// The `ALL` wildcard lives in [`CategoryFilter`] and is never stored
/// on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Chat,
    Study,
    Question,
    Notice,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chat => "CHAT",
            Category::Study => "STUDY",
            Category::Question => "QUESTION",
            Category::Notice => "NOTICE",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Chat,
            Category::Study,
            Category::Question,
            Category::Notice,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHAT" => Ok(Category::Chat),
            "STUDY" => Ok(Category::Study),
            "QUESTION" => Ok(Category::Question),
            "NOTICE" => Ok(Category::Notice),
            other => Err(DomainError::Validation(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}

/// Listing filter: either everything or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value == "ALL" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(value.parse()?))
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}
