//! In-process store for tests and embedding
//!
//! Mirrors the Postgres store's ordering rules and its foreign key check on
//! `questions.category`.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::store::{StoreError, StoreResult, TriviaStore};
use crate::models::{Category, CategoryFilter, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

/// Store holding both tables behind a lock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing rows; later inserts get ids past the largest seeded id.
    pub fn with_rows(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let categories: BTreeMap<_, _> = categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<_, _> = questions.into_iter().map(|q| (q.id, q)).collect();
        let next_question_id = questions.keys().next_back().map_or(1, |id| id + 1);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let mut all: Vec<Question> = self.read()?.questions.values().cloned().collect();
        all.sort_by_key(|q| (q.category, q.id));
        Ok(all)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Ok(self.read()?.questions.len() as i64)
    }

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;
        if !tables.categories.contains_key(&new.category) {
            return Err(StoreError::Constraint(format!(
                "category {} does not exist",
                new.category
            )));
        }

        let id = tables.next_question_id.max(1);
        tables.next_question_id = id + 1;

        let question = Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        self.write()?
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::question_not_found(id))
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn random_question(
        &self,
        filter: CategoryFilter,
        exclude: &[i64],
    ) -> StoreResult<Option<Question>> {
        let tables = self.read()?;
        let candidates: Vec<&Question> = tables
            .questions
            .values()
            .filter(|q| filter.category_id().map_or(true, |c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .collect();

        Ok(candidates
            .choose(&mut rand::thread_rng())
            .map(|q| (*q).clone()))
    }
}
