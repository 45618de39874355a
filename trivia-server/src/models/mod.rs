//! Domain models with validation at construction
//!
//! Request bodies are deserialized into loose request types and then
//! converted into validated domain types. Invalid input returns
//! ValidationError, not panic.

pub mod validation;
pub mod pagination;
pub mod question;
pub mod quiz;

pub use validation::{IntOrString, IntRule, ValidationError};
pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{Category, NewQuestion, NewQuestionRequest, Question};
pub use quiz::{CategoryFilter, QuizCategory, QuizRequest};
