use axum::{
    extract::State,
    response::Html,
    Json,
};
use std::sync::atomic::Ordering;

use crate::server::state::AppState;

/// Handle GET / requests: a minimal page with the playlist URL, its
/// shortened form when a shortener is configured, and the visitor count.
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let count = state.visitors.fetch_add(1, Ordering::Relaxed) + 1;

    // The base URL always carries a trailing slash for the root path.
    let playlist_url = format!("{}api/getM3u", state.server_base_url);

    let short_url = match &state.shortener {
        Some(shortener) => match shortener.shorten(&playlist_url).await {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!("URL shortener failed: {e}");
                None
            }
        },
        None => None,
    };

    Html(render_index(&playlist_url, short_url.as_deref(), count))
}

/// Handle GET /api/visitor-count requests.
pub async fn handle_visitor_count(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.visitors.load(Ordering::Relaxed)
    }))
}

fn render_index(playlist_url: &str, short_url: Option<&str>, visitors: u64) -> String {
    let link = short_url.unwrap_or(playlist_url);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Tata Play M3U</title></head>\n\
         <body>\n\
         <h1>M3U Playlist URL</h1>\n\
         <p><a href=\"{link}\">{link}</a></p>\n\
         <p>Use the M3U URL in the OTT Navigator or TiviMate app for all channels.</p>\n\
         <p>Set data reload to 10 minutes and enjoy uninterrupted viewing.</p>\n\
         <p>Visitor count: {visitors}</p>\n\
         </body>\n\
         </html>\n"
    )
}
