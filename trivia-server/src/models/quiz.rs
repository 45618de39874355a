//! Quiz play request types

use serde::Deserialize;

use super::validation::{IntOrString, ValidationError};

/// Category id the front end sends for "All"
pub const ANY_CATEGORY_ID: i64 = 0;

/// Body of `POST /play`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector: `{"id": 1, "type": "Science"}` or a bare id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Selector {
        id: IntOrString,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    Id(IntOrString),
}

/// Which questions a quiz may draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(i64),
}

impl QuizCategory {
    pub fn filter(&self) -> Result<CategoryFilter, ValidationError> {
        let id = match self {
            Self::Selector { id, .. } | Self::Id(id) => id.to_int("quiz_category")?,
        };
        Ok(if id == ANY_CATEGORY_ID {
            CategoryFilter::Any
        } else {
            CategoryFilter::Only(id)
        })
    }
}

impl QuizRequest {
    /// Resolve the category filter; a missing selector is an error.
    pub fn category_filter(&self) -> Result<CategoryFilter, ValidationError> {
        self.quiz_category
            .as_ref()
            .ok_or(ValidationError::Missing {
                field: "quiz_category",
            })?
            .filter()
    }
}

impl CategoryFilter {
    pub fn category_id(&self) -> Option<i64> {
        match self {
            Self::Any => None,
            Self::Only(id) => Some(*id),
        }
    }
}
