//! Contact Message Repository

use super::{BaseRepository, RepoError, RepoResult, make_record_id, record_key};
use crate::db::models::{Contact, ContactCreate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const CONTACT_TABLE: &str = "contact";

#[derive(Clone)]
pub struct ContactRepository {
    base: BaseRepository,
}

impl ContactRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List contact messages for a caterer, newest first
    pub async fn find_by_caterer(&self, caterer_id: &str) -> RepoResult<Vec<Contact>> {
        let caterer = make_record_id("caterer", caterer_id).to_string();
        let messages: Vec<Contact> = self
            .base
            .db()
            .query("SELECT * FROM contact WHERE caterer = $caterer ORDER BY created_at DESC")
            .bind(("caterer", caterer))
            .await?
            .take(0)?;
        Ok(messages)
    }

    /// Find contact message by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Contact>> {
        let key = record_key(CONTACT_TABLE, id);
        let message: Option<Contact> = self.base.db().select((CONTACT_TABLE, key)).await?;
        Ok(message)
    }

    /// Store a new contact message
    pub async fn create(&self, caterer: RecordId, data: ContactCreate) -> RepoResult<Contact> {
        let message = Contact {
            id: None,
            caterer,
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            created_at: shared::util::now_millis(),
        };

        let created: Option<Contact> = self
            .base
            .db()
            .create(CONTACT_TABLE)
            .content(message)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to store contact message".to_string()))
    }

    /// Hard delete a contact message
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(CONTACT_TABLE, id);
        let result: Option<Contact> = self.base.db().delete((CONTACT_TABLE, key)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!(
                "Contact message {} not found",
                id
            )));
        }
        Ok(())
    }
}
