//! SMTP delivery via lettre. Best-effort: failures are logged and recorded
//! on the email log, never raised to the caller.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{error, warn};

use crate::config::Config;

/// Delivery outcome recorded on the email log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Failed => "failed",
        }
    }
}

/// SMTP mailer. Without SMTP_HOST the transport is absent and every send
/// reports `Failed`, so the log reflects what actually went out.
pub struct Mailer {
    transport: Option<SmtpTransport>,
    from: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Self {
        let transport = match &config.smtp_host {
            Some(host) => match SmtpTransport::starttls_relay(host) {
                Ok(builder) => {
                    let credentials =
                        Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
                    Some(builder.port(config.smtp_port).credentials(credentials).build())
                }
                Err(e) => {
                    error!("Failed to build SMTP transport for {host}: {e}");
                    None
                }
            },
            None => {
                warn!("SMTP_HOST not set; outbound emails will be logged as failed");
                None
            }
        };

        Self {
            transport,
            from: config.email_from.clone(),
        }
    }

    /// Sends a plain-text email. The blocking lettre transport runs on the
    /// blocking pool so the request task is not stalled.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> DeliveryStatus {
        let Some(transport) = self.transport.clone() else {
            warn!("Email to {to} not sent (SMTP not configured)");
            return DeliveryStatus::Failed;
        };

        let message = match Message::builder()
            .from(match self.from.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    error!("Invalid EMAIL_FROM address '{}': {e}", self.from);
                    return DeliveryStatus::Failed;
                }
            })
            .to(match to.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    error!("Invalid recipient address '{to}': {e}");
                    return DeliveryStatus::Failed;
                }
            })
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
        {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to build email message: {e}");
                return DeliveryStatus::Failed;
            }
        };

        let result = tokio::task::spawn_blocking(move || transport.send(&message)).await;

        match result {
            Ok(Ok(_)) => DeliveryStatus::Sent,
            Ok(Err(e)) => {
                error!("SMTP send failed: {e}");
                DeliveryStatus::Failed
            }
            Err(e) => {
                error!("SMTP send task panicked: {e}");
                DeliveryStatus::Failed
            }
        }
    }
}
