//! OTP password-reset flow
//!
//! issued → verified → consumed by reset, or expired / rate-limited.
//! Expiry detection purges every record for the email; a new code must be
//! requested. Reset only accepts a code that already passed verification.

use crate::db::models::PasswordResetOtp;
use crate::db::repository::{CatererRepository, PasswordResetOtpRepository};
use crate::services::EmailService;
use shared::{AppError, ErrorCode, error::AppResult};

/// Codes live for 2 minutes
pub const OTP_TTL_MILLIS: i64 = 2 * 60 * 1000;

/// Rate-limit window (trailing 60 minutes)
pub const RATE_LIMIT_WINDOW_MILLIS: i64 = 60 * 60 * 1000;

/// Maximum codes issued per email inside the window
pub const RATE_LIMIT_MAX_REQUESTS: i64 = 3;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Generate a uniformly random 6-digit code
pub fn generate_code() -> String {
    use rand::Rng;
    let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    code.to_string()
}

/// Issue a new code for an email and deliver it
///
/// # Errors
///
/// - `OtpRateLimited` after 3 codes inside the trailing hour
/// - `EmailDeliveryFailed` when the transport reports a failure
pub async fn issue(
    otps: &PasswordResetOtpRepository,
    email_svc: &EmailService,
    email: &str,
    now_millis: i64,
) -> AppResult<()> {
    let issued_recently = otps
        .count_since(email, now_millis - RATE_LIMIT_WINDOW_MILLIS)
        .await?;
    if issued_recently >= RATE_LIMIT_MAX_REQUESTS {
        return Err(AppError::new(ErrorCode::OtpRateLimited));
    }

    let code = generate_code();
    otps.create(PasswordResetOtp {
        id: None,
        email: email.to_string(),
        code: code.clone(),
        expires_at: now_millis + OTP_TTL_MILLIS,
        is_used: false,
        created_at: now_millis,
    })
    .await?;

    email_svc.send_password_reset_code(email, &code).await?;

    tracing::info!(email = email, "Password reset code issued");
    Ok(())
}

/// Verify a code
///
/// A matching unused record is marked used. An expired match purges every
/// record for the email and reports `OtpExpired`.
pub async fn verify(
    otps: &PasswordResetOtpRepository,
    email: &str,
    code: &str,
    now_millis: i64,
) -> AppResult<()> {
    let Some(record) = otps.find_unused(email, code).await? else {
        return Err(AppError::new(ErrorCode::OtpInvalid));
    };

    if now_millis > record.expires_at {
        otps.purge_for_email(email).await?;
        return Err(AppError::new(ErrorCode::OtpExpired));
    }

    let Some(id) = record.id else {
        return Err(AppError::internal("OTP record has no id"));
    };
    otps.mark_used(id).await?;
    Ok(())
}

/// Reset the password using a previously verified code
///
/// Requires the email+code record to be marked used (verify ran first)
/// and still unexpired. On success the credential is re-hashed and every
/// OTP record for the email is purged.
pub async fn reset(
    otps: &PasswordResetOtpRepository,
    caterers: &CatererRepository,
    email: &str,
    code: &str,
    new_password: &str,
    confirm_password: &str,
    now_millis: i64,
) -> AppResult<()> {
    if new_password != confirm_password {
        return Err(AppError::new(ErrorCode::PasswordMismatch));
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let Some(record) = otps.find_used(email, code).await? else {
        return Err(AppError::new(ErrorCode::OtpNotVerified));
    };

    if now_millis > record.expires_at {
        otps.purge_for_email(email).await?;
        return Err(AppError::new(ErrorCode::OtpExpired));
    }

    let hash = crate::auth::hash_password(new_password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
    caterers.update_password(email, &hash).await?;

    otps.purge_for_email(email).await?;

    tracing::info!(email = email, "Password reset completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::CatererCreate;

    async fn test_env() -> (PasswordResetOtpRepository, CatererRepository, EmailService) {
        let service = DbService::new_in_memory().await.expect("in-memory db");
        (
            PasswordResetOtpRepository::new(service.db.clone()),
            CatererRepository::new(service.db),
            EmailService::disabled(),
        )
    }

    const EMAIL: &str = "asha@example.com";

    #[test]
    fn test_generated_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().expect("numeric code");
            assert!((100_000..1_000_000).contains(&value));
        }
    }

    #[tokio::test]
    async fn test_rate_limit_allows_three_per_hour() {
        let (otps, _, mail) = test_env().await;
        let now = 1_000_000;

        for _ in 0..3 {
            issue(&otps, &mail, EMAIL, now).await.expect("under limit");
        }

        let fourth = issue(&otps, &mail, EMAIL, now).await;
        let err = fourth.expect_err("fourth request must be throttled");
        assert_eq!(err.code, ErrorCode::OtpRateLimited);

        // The window slides: an hour later the email can request again
        let later = now + RATE_LIMIT_WINDOW_MILLIS + 1;
        issue(&otps, &mail, EMAIL, later)
            .await
            .expect("window has passed");
    }

    #[tokio::test]
    async fn test_verify_unknown_code_invalid() {
        let (otps, _, _) = test_env().await;
        let err = verify(&otps, EMAIL, "123456", 0)
            .await
            .expect_err("no record");
        assert_eq!(err.code, ErrorCode::OtpInvalid);
    }

    #[tokio::test]
    async fn test_expired_verify_purges_all_records() {
        let (otps, _, _) = test_env().await;
        let t0 = 1_000_000;

        let record = otps
            .create(PasswordResetOtp {
                id: None,
                email: EMAIL.to_string(),
                code: "654321".to_string(),
                expires_at: t0 + OTP_TTL_MILLIS,
                is_used: false,
                created_at: t0,
            })
            .await
            .expect("create");
        assert!(record.id.is_some());

        // One millisecond past expiry
        let late = t0 + OTP_TTL_MILLIS + 1;
        let err = verify(&otps, EMAIL, "654321", late)
            .await
            .expect_err("expired");
        assert_eq!(err.code, ErrorCode::OtpExpired);

        // Purged: the same code now reports invalid, not expired
        let err = verify(&otps, EMAIL, "654321", late)
            .await
            .expect_err("purged");
        assert_eq!(err.code, ErrorCode::OtpInvalid);
    }

    #[tokio::test]
    async fn test_verify_then_reset_flow() {
        let (otps, caterers, mail) = test_env().await;
        let now = 1_000_000;

        let caterer = caterers
            .create(CatererCreate {
                business_name: "Spice Route".to_string(),
                owner_name: "Asha".to_string(),
                email: EMAIL.to_string(),
                hash_pass: crate::auth::hash_password("old-password-1").expect("hash"),
                phone: None,
                address: None,
                description: None,
            })
            .await
            .expect("caterer");

        issue(&otps, &mail, EMAIL, now).await.expect("issue");
        assert_eq!(otps.count_since(EMAIL, 0).await.expect("count"), 1);

        let code = fetch_code(&otps, EMAIL).await;
        verify(&otps, EMAIL, &code, now + 1).await.expect("verify");

        reset(
            &otps,
            &caterers,
            EMAIL,
            &code,
            "new-password-1",
            "new-password-1",
            now + 2,
        )
        .await
        .expect("reset");

        // Credential replaced
        let updated = caterers
            .find_by_email(EMAIL)
            .await
            .expect("find")
            .expect("exists");
        assert_ne!(updated.hash_pass, caterer.hash_pass);
        assert!(crate::auth::verify_password(
            "new-password-1",
            &updated.hash_pass
        ));

        // Records purged after reset
        assert_eq!(otps.count_since(EMAIL, 0).await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_reset_requires_prior_verification() {
        let (otps, caterers, mail) = test_env().await;
        let now = 1_000_000;

        issue(&otps, &mail, EMAIL, now).await.expect("issue");
        let code = fetch_code(&otps, EMAIL).await;

        // Skipping verify: the record is unused
        let err = reset(
            &otps,
            &caterers,
            EMAIL,
            &code,
            "new-password-1",
            "new-password-1",
            now + 1,
        )
        .await
        .expect_err("unverified code must be rejected");
        assert_eq!(err.code, ErrorCode::OtpNotVerified);
    }

    #[tokio::test]
    async fn test_reset_rejects_used_but_expired_code() {
        let (otps, caterers, mail) = test_env().await;
        let now = 1_000_000;

        issue(&otps, &mail, EMAIL, now).await.expect("issue");
        let code = fetch_code(&otps, EMAIL).await;
        verify(&otps, EMAIL, &code, now + 1).await.expect("verify");

        let late = now + OTP_TTL_MILLIS + 1;
        let err = reset(
            &otps,
            &caterers,
            EMAIL,
            &code,
            "new-password-1",
            "new-password-1",
            late,
        )
        .await
        .expect_err("used-but-expired code must be rejected");
        assert_eq!(err.code, ErrorCode::OtpExpired);
    }

    #[tokio::test]
    async fn test_password_rules() {
        let (otps, caterers, _) = test_env().await;

        let err = reset(&otps, &caterers, EMAIL, "123456", "short", "short", 0)
            .await
            .expect_err("too short");
        assert_eq!(err.code, ErrorCode::PasswordTooShort);

        let err = reset(
            &otps,
            &caterers,
            EMAIL,
            "123456",
            "long-enough-1",
            "long-enough-2",
            0,
        )
        .await
        .expect_err("mismatch");
        assert_eq!(err.code, ErrorCode::PasswordMismatch);
    }

    /// Read back the most recent code issued for an email
    async fn fetch_code(otps: &PasswordResetOtpRepository, email: &str) -> String {
        otps.find_latest(email)
            .await
            .expect("query")
            .expect("record exists")
            .code
    }
}
