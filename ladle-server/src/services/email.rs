//! Transactional email (AWS SES)
//!
//! Credentials come from the SDK's default chain (environment, profile,
//! instance role); only the sender address lives in [`Config`]. With no
//! sender configured the transport is disabled and sends are logged
//! instead, which keeps development and tests offline.

use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use crate::core::Config;
use shared::{AppError, ErrorCode, error::AppResult};

/// Email transport
pub struct EmailService {
    client: Option<SesClient>,
    from: String,
}

impl std::fmt::Debug for EmailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailService")
            .field("enabled", &self.client.is_some())
            .field("from", &self.from)
            .finish()
    }
}

impl EmailService {
    /// Build the transport from the environment
    pub async fn from_env(config: &Config) -> Self {
        if config.ses_from_email.is_empty() {
            tracing::warn!("SES_FROM_EMAIL not set, email transport disabled");
            return Self::disabled();
        }

        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: Some(SesClient::new(&sdk_config)),
            from: config.ses_from_email.clone(),
        }
    }

    /// A transport that logs instead of sending
    pub fn disabled() -> Self {
        Self {
            client: None,
            from: String::new(),
        }
    }

    /// Send a plain-text email
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> AppResult<()> {
        let Some(ses) = &self.client else {
            tracing::info!(to = to, subject = subject, "Email transport disabled, not sending");
            return Ok(());
        };

        let build_err =
            |e: aws_sdk_sesv2::error::BuildError| AppError::internal(format!("Email build failed: {e}"));

        let subject_content = Content::builder().data(subject).build().map_err(build_err)?;
        let body = Body::builder()
            .text(Content::builder().data(text).build().map_err(build_err)?)
            .build();
        let message = Message::builder().subject(subject_content).body(body).build();

        ses.send_email()
            .from_email_address(self.from.as_str())
            .destination(Destination::builder().to_addresses(to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(to = to, error = %e, "Email delivery failed");
                AppError::new(ErrorCode::EmailDeliveryFailed)
            })?;

        tracing::info!(to = to, subject = subject, "Email sent");
        Ok(())
    }

    /// Deliver a password reset code
    pub async fn send_password_reset_code(&self, to: &str, code: &str) -> AppResult<()> {
        let body_text = format!(
            "Your password reset code is: {code}\n\
             Valid for 2 minutes.\n\n\
             If you did not request this, you can ignore this email."
        );
        self.send(to, "Reset your password", &body_text).await
    }
}
