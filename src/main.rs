use std::sync::Arc;

use tower_http::cors::CorsLayer;

use vinfra_leads::assets::asset_routes;
use vinfra_leads::config::{MailerConfig, ServerConfig};
use vinfra_leads::notify::{AppState, SmtpMailer, enquiry_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server = ServerConfig::from_env();
    let mailer_config = MailerConfig::from_env();

    eprintln!("🏗  vinfra-leads v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Theme: {}", server.theme);
    eprintln!("   Enquiry API: http://0.0.0.0:{}/api/send-mail", server.port);
    eprintln!("   Logos API: http://0.0.0.0:{}/api/client-logos", server.port);

    let admin_inbox = mailer_config
        .as_ref()
        .map(|c| c.admin_inbox.clone())
        .unwrap_or_else(|| "info@vinfraengineers.com".to_string());

    match &mailer_config {
        Some(c) => eprintln!(
            "   Mail: enabled (SMTP: {}:{}, admin inbox: {})",
            c.smtp_host, c.smtp_port, c.admin_inbox
        ),
        None => eprintln!("   Mail: disabled (SMTP_HOST not set — submissions will fail)"),
    }

    let mailer = Arc::new(SmtpMailer::new(mailer_config));

    let state = AppState {
        mailer,
        admin_inbox,
        palette: server.theme.palette(),
    };

    let app = enquiry_routes(state)
        .merge(asset_routes(server.logos_dir.clone()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server.port)).await?;
    tracing::info!(port = server.port, "Lead-capture server started");
    axum::serve(listener, app).await?;

    Ok(())
}
