//! Outbound mail transport — SMTP via lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use secrecy::ExposeSecret;

use crate::config::MailerConfig;
use crate::error::MailError;

/// A rendered message ready for the transport.
#[derive(Debug, Clone)]
pub struct OutboundMail {
    /// Display name for the From header; the address comes from config.
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Transport seam. The dispatcher only depends on this trait, so tests
/// can record or fail sends without a real SMTP server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError>;
}

/// SMTP implementation. Holds `None` when the environment did not
/// provide SMTP settings; sending then fails with
/// [`MailError::NotConfigured`] instead of crashing at startup.
pub struct SmtpMailer {
    config: Option<MailerConfig>,
}

impl SmtpMailer {
    pub fn new(config: Option<MailerConfig>) -> Self {
        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
        let config = self.config.clone().ok_or(MailError::NotConfigured)?;
        let mail = mail.clone();

        // lettre's SmtpTransport is blocking; keep it off the runtime.
        tokio::task::spawn_blocking(move || send_blocking(&config, &mail))
            .await
            .map_err(|e| MailError::Send(format!("send task panicked: {e}")))?
    }
}

fn send_blocking(config: &MailerConfig, mail: &OutboundMail) -> Result<(), MailError> {
    let creds = Credentials::new(
        config.username.clone(),
        config.password.expose_secret().to_string(),
    );

    let builder = if config.smtp_secure {
        SmtpTransport::relay(&config.smtp_host)
    } else {
        SmtpTransport::starttls_relay(&config.smtp_host)
    }
    .map_err(|e| MailError::Relay(e.to_string()))?;

    let transport = builder.port(config.smtp_port).credentials(creds).build();

    let from = format!("\"{}\" <{}>", mail.from_name, config.from_address);
    let message = Message::builder()
        .from(from.parse().map_err(|e| MailError::InvalidAddress {
            kind: "from".into(),
            address: config.from_address.clone(),
            reason: format!("{e}"),
        })?)
        .to(mail.to.parse().map_err(|e| MailError::InvalidAddress {
            kind: "to".into(),
            address: mail.to.clone(),
            reason: format!("{e}"),
        })?)
        .subject(&mail.subject)
        .header(ContentType::TEXT_HTML)
        .body(mail.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))?;

    transport
        .send(&message)
        .map_err(|e| MailError::Send(e.to_string()))?;

    tracing::info!(to = %mail.to, subject = %mail.subject, "Email sent");
    Ok(())
}
