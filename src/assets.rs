//! Client-logo listing endpoint.
//!
//! Returns the image paths under the configured directory that match the
//! fixed `image-client<N>.<ext>` naming pattern, sorted by the embedded
//! index. Any read failure yields an empty list, never an error status.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use regex::Regex;

static LOGO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^image-client(\d+)\.(jpeg|jpg|png|webp|svg)$").unwrap()
});

#[derive(Clone)]
struct AssetState {
    logos_dir: Arc<PathBuf>,
}

/// Build the asset-listing router.
pub fn asset_routes(logos_dir: PathBuf) -> Router {
    Router::new()
        .route("/api/client-logos", get(list_client_logos))
        .with_state(AssetState {
            logos_dir: Arc::new(logos_dir),
        })
}

async fn list_client_logos(State(state): State<AssetState>) -> impl IntoResponse {
    let logos = scan_logos(&state.logos_dir).await;
    Json(serde_json::json!({ "logos": logos }))
}

/// Collect matching logo files, numerically sorted by embedded index.
pub async fn scan_logos(dir: &Path) -> Vec<String> {
    let Ok(mut entries) = tokio::fs::read_dir(dir).await else {
        return Vec::new();
    };

    let mut logos: Vec<(u64, String)> = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(caps) = LOGO_PATTERN.captures(&name)
            && let Ok(index) = caps[1].parse::<u64>()
        {
            logos.push((index, format!("/clients/{name}")));
        }
    }

    logos.sort_by_key(|(index, _)| *index);
    logos.into_iter().map(|(_, path)| path).collect()
}
