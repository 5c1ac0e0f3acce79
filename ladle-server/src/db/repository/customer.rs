//! Customer Repository
//!
//! Customers are keyed by email; a booking refreshes the snapshot.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Customer;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CUSTOMER_TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find customer by (normalized) email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let customers: Vec<Customer> = result.take(0)?;
        Ok(customers.into_iter().next())
    }

    /// Insert or refresh the snapshot for an email
    pub async fn upsert_by_email(&self, snapshot: Customer) -> RepoResult<Customer> {
        if let Some(existing) = self.find_by_email(&snapshot.email).await?
            && let Some(id) = existing.id
        {
            let mut result = self
                .base
                .db()
                .query(
                    "UPDATE $thing SET name = $name, phone = $phone, \
                     address = $address, last_order_at = $last_order_at RETURN AFTER",
                )
                .bind(("thing", id))
                .bind(("name", snapshot.name))
                .bind(("phone", snapshot.phone))
                .bind(("address", snapshot.address))
                .bind(("last_order_at", snapshot.last_order_at))
                .await?;
            let customers: Vec<Customer> = result.take(0)?;
            return customers
                .into_iter()
                .next()
                .ok_or_else(|| RepoError::Database("Failed to refresh customer".to_string()));
        }

        let created: Option<Customer> = self
            .base
            .db()
            .create(CUSTOMER_TABLE)
            .content(snapshot)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }
}
