//! Caterer Repository

use super::{BaseRepository, RepoError, RepoResult, make_record_id, record_key};
use crate::db::models::{Caterer, CatererCreate, CatererUpdate, PricingConfigUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CATERER_TABLE: &str = "caterer";

#[derive(Clone)]
pub struct CatererRepository {
    base: BaseRepository,
}

impl CatererRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find caterer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Caterer>> {
        let key = record_key(CATERER_TABLE, id);
        let caterer: Option<Caterer> = self.base.db().select((CATERER_TABLE, key)).await?;
        Ok(caterer)
    }

    /// Find an active caterer by id
    pub async fn find_active_by_id(&self, id: &str) -> RepoResult<Option<Caterer>> {
        Ok(self.find_by_id(id).await?.filter(|c| c.is_active))
    }

    /// Find caterer by (normalized) email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Caterer>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM caterer WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let caterers: Vec<Caterer> = result.take(0)?;
        Ok(caterers.into_iter().next())
    }

    /// Create a new caterer
    pub async fn create(&self, data: CatererCreate) -> RepoResult<Caterer> {
        // Check duplicate email
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        let caterer = Caterer {
            id: None,
            business_name: data.business_name,
            owner_name: data.owner_name,
            email: data.email,
            hash_pass: data.hash_pass,
            phone: data.phone.unwrap_or_default(),
            address: data.address,
            description: data.description,
            max_daily_bookings: 3,
            misc_cost: 0.0,
            dynamic_pricing: Vec::new(),
            is_active: true,
            created_at: shared::util::now_millis(),
        };

        let created: Option<Caterer> = self
            .base
            .db()
            .create(CATERER_TABLE)
            .content(caterer)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create caterer".to_string()))
    }

    /// Update the business profile
    pub async fn update_profile(&self, id: &str, data: CatererUpdate) -> RepoResult<Caterer> {
        let thing = make_record_id(CATERER_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.business_name.is_some() {
            set_parts.push("business_name = $business_name");
        }
        if data.owner_name.is_some() {
            set_parts.push("owner_name = $owner_name");
        }
        if data.phone.is_some() {
            set_parts.push("phone = $phone");
        }
        if data.address.is_some() {
            set_parts.push("address = $address");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Caterer {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(&query_str).bind(("thing", thing));

        if let Some(v) = data.business_name {
            query = query.bind(("business_name", v));
        }
        if let Some(v) = data.owner_name {
            query = query.bind(("owner_name", v));
        }
        if let Some(v) = data.phone {
            query = query.bind(("phone", v));
        }
        if let Some(v) = data.address {
            query = query.bind(("address", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }

        let mut result = query.await?;
        let caterers: Vec<Caterer> = result.take(0)?;
        caterers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Caterer {} not found", id)))
    }

    /// Update the pricing configuration (misc cost, discount tiers, daily cap)
    pub async fn update_pricing(
        &self,
        id: &str,
        data: PricingConfigUpdate,
    ) -> RepoResult<Caterer> {
        let thing = make_record_id(CATERER_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.misc_cost.is_some() {
            set_parts.push("misc_cost = $misc_cost");
        }
        if data.dynamic_pricing.is_some() {
            set_parts.push("dynamic_pricing = $dynamic_pricing");
        }
        if data.max_daily_bookings.is_some() {
            set_parts.push("max_daily_bookings = $max_daily_bookings");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Caterer {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(&query_str).bind(("thing", thing));

        if let Some(v) = data.misc_cost {
            query = query.bind(("misc_cost", v));
        }
        if let Some(v) = data.dynamic_pricing {
            query = query.bind(("dynamic_pricing", v));
        }
        if let Some(v) = data.max_daily_bookings {
            query = query.bind(("max_daily_bookings", v));
        }

        let mut result = query.await?;
        let caterers: Vec<Caterer> = result.take(0)?;
        caterers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Caterer {} not found", id)))
    }

    /// Replace the stored credential hash for an email
    pub async fn update_password(&self, email: &str, hash_pass: &str) -> RepoResult<()> {
        let email_owned = email.to_string();
        let hash_owned = hash_pass.to_string();
        self.base
            .db()
            .query("UPDATE caterer SET hash_pass = $hash_pass WHERE email = $email")
            .bind(("email", email_owned))
            .bind(("hash_pass", hash_owned))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_repo() -> CatererRepository {
        let service = DbService::new_in_memory().await.expect("in-memory db");
        CatererRepository::new(service.db)
    }

    fn sample_create(email: &str) -> CatererCreate {
        CatererCreate {
            business_name: "Spice Route".to_string(),
            owner_name: "Asha".to_string(),
            email: email.to_string(),
            hash_pass: "$argon2id$fake".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = test_repo().await;
        let created = repo
            .create(sample_create("asha@example.com"))
            .await
            .expect("create should succeed");

        assert!(created.id.is_some());
        assert_eq!(created.max_daily_bookings, 3);
        assert!(created.dynamic_pricing.is_empty());

        let id = created.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        let found = repo.find_by_id(&id).await.expect("find should succeed");
        assert_eq!(
            found.map(|c| c.email),
            Some("asha@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = test_repo().await;
        repo.create(sample_create("dup@example.com"))
            .await
            .expect("first create should succeed");
        let second = repo.create(sample_create("dup@example.com")).await;
        assert!(matches!(second, Err(RepoError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_update_pricing() {
        let repo = test_repo().await;
        let created = repo
            .create(sample_create("pricing@example.com"))
            .await
            .expect("create should succeed");
        let id = created.id.as_ref().map(|id| id.to_string()).unwrap_or_default();

        let updated = repo
            .update_pricing(
                &id,
                PricingConfigUpdate {
                    misc_cost: Some(150.0),
                    dynamic_pricing: Some(vec![crate::db::models::DiscountTier {
                        min_guests: 50,
                        discount_percent: 10.0,
                    }]),
                    max_daily_bookings: Some(5),
                },
            )
            .await
            .expect("update should succeed");

        assert_eq!(updated.misc_cost, 150.0);
        assert_eq!(updated.max_daily_bookings, 5);
        assert_eq!(updated.dynamic_pricing.len(), 1);
    }
}
