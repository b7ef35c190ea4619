//! Configuration, built from environment variables.

use secrecy::SecretString;

use crate::theme::ThemeName;

/// SMTP transport configuration.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Implicit TLS (port 465) vs STARTTLS (port 587).
    pub smtp_secure: bool,
    pub username: String,
    pub password: SecretString,
    /// Address the two notification emails are sent from.
    pub from_address: String,
    /// Operational inbox that receives admin notifications.
    pub admin_inbox: String,
}

impl MailerConfig {
    /// Build config from environment variables.
    /// Returns `None` if `SMTP_HOST` is not set (mail dispatch disabled).
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;

        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(587);

        let smtp_secure = std::env::var("SMTP_SECURE").is_ok_and(|v| v == "true");

        let username = std::env::var("SMTP_USER").unwrap_or_default();
        let password = SecretString::from(std::env::var("SMTP_PASS").unwrap_or_default());
        let from_address = std::env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());

        let admin_inbox =
            std::env::var("ADMIN_INBOX").unwrap_or_else(|_| "info@vinfraengineers.com".to_string());

        Some(Self {
            smtp_host,
            smtp_port,
            smtp_secure,
            username,
            password,
            from_address,
            admin_inbox,
        })
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds on.
    pub port: u16,
    /// Active color theme, used by the email templates.
    pub theme: ThemeName,
    /// Directory scanned by the client-logo listing endpoint.
    pub logos_dir: std::path::PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("LEADS_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let theme = std::env::var("SITE_THEME")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let logos_dir = std::env::var("CLIENT_LOGOS_DIR")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("public/clients"));

        Self {
            port,
            theme,
            logos_dir,
        }
    }
}
