//! Question and category records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_text, IntOrString, IntRule, ValidationError};

/// Category ids accepted when adding a question
pub const CATEGORY_RULE: IntRule = IntRule {
    field: "category",
    min: 1,
    max: 6,
};

/// Difficulty levels accepted when adding a question
pub const DIFFICULTY_RULE: IntRule = IntRule {
    field: "difficulty",
    min: 1,
    max: 4,
};

/// Question record, serialized as `{id, question, answer, category, difficulty}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Category record, serialized as `{id, type}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Raw body of `POST /questions/add`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<IntOrString>,
    pub difficulty: Option<IntOrString>,
}

/// Validated question ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Validate all four fields in order; the first failure wins.
    ///
    /// Category and difficulty must both be in range.
    pub fn new(req: NewQuestionRequest) -> Result<Self, ValidationError> {
        let question = require_text("question", req.question)?;
        let answer = require_text("answer", req.answer)?;
        let category = CATEGORY_RULE.check(req.category.as_ref())?;
        let difficulty = DIFFICULTY_RULE.check(req.difficulty.as_ref())?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

impl TryFrom<NewQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: NewQuestionRequest) -> Result<Self, Self::Error> {
        Self::new(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> IntOrString {
        IntOrString::Int(n)
    }

    fn request(category: IntOrString, difficulty: IntOrString) -> NewQuestionRequest {
        NewQuestionRequest {
            question: Some("Who painted Guernica?".into()),
            answer: Some("Picasso".into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }

    #[test]
    fn valid_request() {
        let q = NewQuestion::new(request(int(2), IntOrString::Text("1".into()))).unwrap();
        assert_eq!(q.category, 2);
        assert_eq!(q.difficulty, 1);
    }

    #[test]
    fn rejects_category_out_of_range_even_with_valid_difficulty() {
        let err = NewQuestion::new(request(int(7), int(2))).unwrap_err();
        assert_eq!(err.field(), "category");
    }

    #[test]
    fn rejects_difficulty_out_of_range_even_with_valid_category() {
        let err = NewQuestion::new(request(int(3), int(6))).unwrap_err();
        assert_eq!(err.field(), "difficulty");
    }

    #[test]
    fn rejects_both_out_of_range() {
        assert!(NewQuestion::new(request(int(0), int(0))).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut req = request(int(1), int(1));
        req.answer = None;
        assert_eq!(
            NewQuestion::try_from(req).unwrap_err(),
            ValidationError::Missing { field: "answer" }
        );
    }

    #[test]
    fn category_serializes_type_key() {
        let c = Category {
            id: 1,
            kind: "Science".into(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"id": 1, "type": "Science"})
        );
    }
}
