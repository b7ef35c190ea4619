//! Notification Dispatcher — renders and sends the two enquiry emails.

pub mod mailer;
pub mod render;
pub mod routes;

pub use mailer::{Mailer, OutboundMail, SmtpMailer};
pub use routes::{AppState, SendResponse, enquiry_routes};

use crate::error::MailError;
use crate::lead::Lead;
use crate::theme::Palette;

/// Render and send the operator notification, then the submitter
/// confirmation, sequentially over the same transport.
///
/// Succeeds only when both sends are accepted; the first failure aborts
/// the whole dispatch. The sends are not independently retried, so a
/// failure after the first send leaves the operator notified without a
/// confirmation going out.
pub async fn dispatch_enquiry(
    mailer: &dyn Mailer,
    admin_inbox: &str,
    palette: &Palette,
    lead: &Lead,
) -> Result<(), MailError> {
    let mut admin = render::admin_email(lead, palette);
    admin.to = admin_inbox.to_string();
    mailer.send(&admin).await?;

    let confirmation = render::confirmation_email(lead, palette);
    mailer.send(&confirmation).await?;

    tracing::info!(
        reference = %lead.reference_number,
        admin = %admin_inbox,
        submitter = %lead.email,
        "Enquiry notifications dispatched"
    );
    Ok(())
}
