//! Password Reset OTP Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::PasswordResetOtp;
use serde::Deserialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const OTP_TABLE: &str = "password_reset_otp";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct PasswordResetOtpRepository {
    base: BaseRepository,
}

impl PasswordResetOtpRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Store a freshly issued code
    pub async fn create(&self, record: PasswordResetOtp) -> RepoResult<PasswordResetOtp> {
        let created: Option<PasswordResetOtp> =
            self.base.db().create(OTP_TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to store OTP".to_string()))
    }

    /// Count records created for an email since the given timestamp
    pub async fn count_since(&self, email: &str, since_millis: i64) -> RepoResult<i64> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() FROM password_reset_otp \
                 WHERE email = $email AND created_at > $since GROUP ALL",
            )
            .bind(("email", email_owned))
            .bind(("since", since_millis))
            .await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(|r| r.count).unwrap_or(0))
    }

    /// Find an unused record matching email + code
    pub async fn find_unused(
        &self,
        email: &str,
        code: &str,
    ) -> RepoResult<Option<PasswordResetOtp>> {
        let email_owned = email.to_string();
        let code_owned = code.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM password_reset_otp \
                 WHERE email = $email AND code = $code AND is_used = false LIMIT 1",
            )
            .bind(("email", email_owned))
            .bind(("code", code_owned))
            .await?;
        let records: Vec<PasswordResetOtp> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Find a used (verified) record matching email + code
    pub async fn find_used(
        &self,
        email: &str,
        code: &str,
    ) -> RepoResult<Option<PasswordResetOtp>> {
        let email_owned = email.to_string();
        let code_owned = code.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM password_reset_otp \
                 WHERE email = $email AND code = $code AND is_used = true LIMIT 1",
            )
            .bind(("email", email_owned))
            .bind(("code", code_owned))
            .await?;
        let records: Vec<PasswordResetOtp> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Most recent record for an email, regardless of state
    pub async fn find_latest(&self, email: &str) -> RepoResult<Option<PasswordResetOtp>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM password_reset_otp \
                 WHERE email = $email ORDER BY created_at DESC LIMIT 1",
            )
            .bind(("email", email_owned))
            .await?;
        let records: Vec<PasswordResetOtp> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Mark a record as used (passed verification)
    pub async fn mark_used(&self, id: RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET is_used = true")
            .bind(("thing", id))
            .await?;
        Ok(())
    }

    /// Delete every record for an email
    pub async fn purge_for_email(&self, email: &str) -> RepoResult<()> {
        let email_owned = email.to_string();
        self.base
            .db()
            .query("DELETE password_reset_otp WHERE email = $email")
            .bind(("email", email_owned))
            .await?;
        Ok(())
    }
}
