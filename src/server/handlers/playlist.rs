use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    playlist::format_playlist,
    server::{params::PlaylistParams, state::AppState},
};

/// Handle GET /api/getM3u requests.
///
/// Always answers 200 with whatever playlist text was producible; an
/// upstream failure degrades to a header-only document rather than an
/// error response.
pub async fn handle_playlist(
    State(state): State<AppState>,
    Query(params): Query<PlaylistParams>,
) -> Response {
    if !state.config.ts_active {
        return (StatusCode::BAD_REQUEST, "TS is not active").into_response();
    }

    tracing::info!(sid = ?params.sid, sname = ?params.sname, "Playlist request");

    let records = match state.aggregator.fetch_records().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Playlist generation degraded to empty: {e}");
            Vec::new()
        }
    };

    tracing::debug!("Formatting {} channel records", records.len());

    let body = format_playlist(
        &records,
        &state.config.epg_url,
        &state.config.logo_proxy_prefix,
    );

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
