//! HTTP surface for the dispatcher.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{Mailer, dispatch_enquiry};
use crate::lead::Lead;
use crate::theme::Palette;

/// Dispatcher response body, shared with the wizard's submit client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    /// Operational inbox receiving admin notifications.
    pub admin_inbox: String,
    /// Active palette for the email documents.
    pub palette: &'static Palette,
}

/// Build the dispatcher router.
pub fn enquiry_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/send-mail", post(send_mail))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "vinfra-leads"
    }))
}

/// Accept a Lead Record and dispatch both notification emails.
///
/// The record is trusted for business-rule validity; this endpoint only
/// reports whether both sends were accepted by the transport.
async fn send_mail(State(state): State<AppState>, Json(lead): Json<Lead>) -> impl IntoResponse {
    info!(
        reference = %lead.reference_number,
        service = %lead.service_type,
        "Enquiry received"
    );

    match dispatch_enquiry(state.mailer.as_ref(), &state.admin_inbox, state.palette, &lead).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SendResponse {
                success: true,
                message: "Emails sent successfully".to_string(),
            }),
        ),
        Err(e) => {
            error!(reference = %lead.reference_number, error = %e, "Enquiry dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendResponse {
                    success: false,
                    message: e.to_string(),
                }),
            )
        }
    }
}
