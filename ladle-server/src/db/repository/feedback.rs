//! Feedback Repository

use super::{BaseRepository, RepoError, RepoResult, make_record_id, record_key};
use crate::db::models::{Feedback, FeedbackCreate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const FEEDBACK_TABLE: &str = "feedback";

#[derive(Clone)]
pub struct FeedbackRepository {
    base: BaseRepository,
}

impl FeedbackRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List feedback for a caterer, newest first
    pub async fn find_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<Feedback>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let feedback: Vec<Feedback> = self
            .base
            .db()
            .query("SELECT * FROM feedback WHERE caterer = $caterer ORDER BY created_at DESC")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(feedback)
    }

    /// Find feedback by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Feedback>> {
        let key = record_key(FEEDBACK_TABLE, id);
        let feedback: Option<Feedback> = self.base.db().select((FEEDBACK_TABLE, key)).await?;
        Ok(feedback)
    }

    /// Store a new feedback entry
    pub async fn create(&self, caterer: RecordId, data: FeedbackCreate) -> RepoResult<Feedback> {
        let feedback = Feedback {
            id: None,
            caterer,
            customer_name: data.customer_name,
            email: data.email,
            rating: data.rating,
            comment: data.comment,
            created_at: shared::util::now_millis(),
        };

        let created: Option<Feedback> = self
            .base
            .db()
            .create(FEEDBACK_TABLE)
            .content(feedback)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to store feedback".to_string()))
    }

    /// Hard delete a feedback entry
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(FEEDBACK_TABLE, id);
        let result: Option<Feedback> = self.base.db().delete((FEEDBACK_TABLE, key)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Feedback {} not found", id)));
        }
        Ok(())
    }
}
