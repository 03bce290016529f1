//! Statische Player-Assets ueber HTTP
//!
//! | Pfad | Antwort |
//! |------|---------|
//! | `/` | HTML-Seite mit Play-Button |
//! | `/player.js` | Browser-Player |
//! | sonst | 404 `Not found` |
//!
//! Beide Dokumente werden einmal beim Start gerendert; wiederholte
//! Anfragen liefern byteidentische Antworten.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use bytes::Bytes;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Startseite des Players
pub const INDEX_HTML: &str = "<!DOCTYPE html>
<html>
<head>
  <title>RTP PCMU Audio Player</title>
</head>
<body>
  <h1>RTP PCMU Audio Player</h1>
  <button id=\"play\">Play</button>
  <script src=\"/player.js\"></script>
</body>
</html>
";

/// Browser-Player mit Platzhalter fuer den Konsumenten-Port
const PLAYER_JS_VORLAGE: &str = include_str!("../assets/player.js");

/// Platzhalter in der Player-Vorlage
const PORT_PLATZHALTER: &str = "__KONSUMENT_PORT__";

/// Gerenderte Assets, geteilt zwischen allen Requests
#[derive(Debug, Clone)]
pub struct Assets {
    index_html: Bytes,
    player_js: Bytes,
}

impl Assets {
    /// Rendert die Assets fuer den gegebenen Konsumenten-Port
    pub fn rendern(konsument_port: u16) -> Self {
        let player_js = PLAYER_JS_VORLAGE.replace(PORT_PLATZHALTER, &konsument_port.to_string());
        Self {
            index_html: Bytes::from_static(INDEX_HTML.as_bytes()),
            player_js: Bytes::from(player_js),
        }
    }

    pub fn index_html(&self) -> &Bytes {
        &self.index_html
    }

    pub fn player_js(&self) -> &Bytes {
        &self.player_js
    }
}

/// Axum-Router fuer die Player-Assets
pub fn asset_router(assets: Arc<Assets>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/player.js", get(player_js_handler))
        .fallback(nicht_gefunden)
        .layer(TraceLayer::new_for_http())
        .with_state(assets)
}

/// `GET /`
async fn index_handler(State(assets): State<Arc<Assets>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/html")],
        assets.index_html.clone(),
    )
}

/// `GET /player.js`
async fn player_js_handler(State(assets): State<Arc<Assets>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        assets.player_js.clone(),
    )
}

async fn nicht_gefunden() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
