#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tubelist::{CatalogClient, ClientConfig, PlaylistSummary, Track};

/// In-memory stand-in for the playlist backend, faithful to its status
/// codes: 200 for add_track, 204 for remove_track, 201 for playlist
/// creation.
#[derive(Default)]
pub struct StubState {
    pub playlists: Vec<PlaylistSummary>,
    pub tracks: Vec<Track>,
    pub recommendations: Vec<Track>,
    pub history: Vec<serde_json::Value>,
    pub popularity: Vec<serde_json::Value>,
    pub listens: Vec<String>,
    pub clicks: Vec<String>,
    pub add_calls: u32,
    pub next_track_id: u32,
    /// Answer mutations with 400 instead of succeeding.
    pub fail_mutations: bool,
    /// Answer a successful add with 201 instead of the backend's 200.
    pub add_answers_created: bool,
    /// Answer recommendation fetches with 500.
    pub fail_recommendations: bool,
    pub popularity_query: Option<(String, String)>,
}

pub type SharedStub = Arc<Mutex<StubState>>;

pub fn track(id: &str, title: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        yt_id: format!("yt-{}", id),
        duration: 180,
        artist: artist.to_string(),
        score: None,
    }
}

fn video_id_of(url: &str) -> String {
    let tail = match url.find("v=") {
        Some(pos) => &url[pos + 2..],
        None => url.rsplit('/').next().unwrap_or(""),
    };
    tail.chars().take(11).collect()
}

async fn list_playlists(State(stub): State<SharedStub>) -> Json<Vec<PlaylistSummary>> {
    Json(stub.lock().unwrap().playlists.clone())
}

async fn get_tracks(
    State(stub): State<SharedStub>,
    Path(_id): Path<String>,
) -> Json<Vec<Track>> {
    Json(stub.lock().unwrap().tracks.clone())
}

async fn search_tracks(
    State(stub): State<SharedStub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Track>> {
    let query = params.get("query").cloned().unwrap_or_default().to_lowercase();
    let matches = stub
        .lock()
        .unwrap()
        .tracks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&query))
        .cloned()
        .collect();
    Json(matches)
}

async fn add_track(
    State(stub): State<SharedStub>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let mut stub = stub.lock().unwrap();
    stub.add_calls += 1;
    if stub.fail_mutations {
        return (StatusCode::BAD_REQUEST, Json(serde_json::Value::Null));
    }
    let yt_url = body["yt_url"].as_str().unwrap_or_default();
    stub.next_track_id += 1;
    let track = Track {
        id: format!("added-{}", stub.next_track_id),
        title: format!("Added {}", stub.next_track_id),
        yt_id: video_id_of(yt_url),
        duration: 120,
        artist: "Stub Artist".to_string(),
        score: None,
    };
    stub.tracks.push(track.clone());
    let status = if stub.add_answers_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    (status, Json(serde_json::to_value(track).unwrap()))
}

async fn remove_track(
    State(stub): State<SharedStub>,
    Path(_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    let mut stub = stub.lock().unwrap();
    if stub.fail_mutations {
        return StatusCode::BAD_REQUEST;
    }
    let track_id = params.get("track_id").cloned().unwrap_or_default();
    stub.tracks.retain(|t| t.id != track_id);
    StatusCode::NO_CONTENT
}

async fn create_playlist(
    State(stub): State<SharedStub>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let mut stub = stub.lock().unwrap();
    if stub.fail_mutations {
        return (StatusCode::BAD_REQUEST, Json(serde_json::Value::Null));
    }
    let summary = PlaylistSummary {
        id: format!("plst-{}", stub.playlists.len() + 1),
        name: body["name"].as_str().unwrap_or_default().to_string(),
        tracks_amount: 0,
    };
    stub.playlists.push(summary.clone());
    (
        StatusCode::CREATED,
        Json(serde_json::to_value(summary).unwrap()),
    )
}

async fn rename_playlist(
    State(stub): State<SharedStub>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let mut stub = stub.lock().unwrap();
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if let Some(playlist) = stub.playlists.iter_mut().find(|p| p.id == id) {
        playlist.name = name;
        return (
            StatusCode::OK,
            Json(serde_json::to_value(playlist.clone()).unwrap()),
        );
    }
    (StatusCode::BAD_REQUEST, Json(serde_json::Value::Null))
}

async fn delete_playlist(
    State(stub): State<SharedStub>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    let mut stub = stub.lock().unwrap();
    let name = params.get("name").cloned().unwrap_or_default();
    let before = stub.playlists.len();
    stub.playlists.retain(|p| p.name != name);
    if stub.playlists.len() == before {
        // Unknown name still answers with an error status; the client
        // treats any delivered response as success.
        return StatusCode::BAD_REQUEST;
    }
    StatusCode::NO_CONTENT
}

async fn recommendations(
    State(stub): State<SharedStub>,
    Path(_id): Path<String>,
) -> impl IntoResponse {
    let stub = stub.lock().unwrap();
    if stub.fail_recommendations {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::Value::Null));
    }
    (
        StatusCode::OK,
        Json(serde_json::to_value(stub.recommendations.clone()).unwrap()),
    )
}

async fn record_listen(
    State(stub): State<SharedStub>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let yt_id = body["id"].as_str().unwrap_or_default().to_string();
    stub.lock().unwrap().listens.push(yt_id);
    StatusCode::OK
}

async fn record_click(
    State(stub): State<SharedStub>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let yt_id = body["id"].as_str().unwrap_or_default().to_string();
    stub.lock().unwrap().clicks.push(yt_id);
    StatusCode::OK
}

async fn playback_count(
    State(stub): State<SharedStub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let yt_id = params.get("yt_id").cloned().unwrap_or_default();
    let count = stub
        .lock()
        .unwrap()
        .listens
        .iter()
        .filter(|id| **id == yt_id)
        .count();
    Json(serde_json::json!({ "track_playback": count }))
}

async fn history(State(stub): State<SharedStub>) -> Json<Vec<serde_json::Value>> {
    Json(stub.lock().unwrap().history.clone())
}

async fn artist_popularity(
    State(stub): State<SharedStub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<serde_json::Value>> {
    let mut stub = stub.lock().unwrap();
    stub.popularity_query = Some((
        params.get("start_date").cloned().unwrap_or_default(),
        params.get("end_date").cloned().unwrap_or_default(),
    ));
    Json(stub.popularity.clone())
}

/// Serve the stub on an ephemeral port and return the base URL.
pub async fn spawn_stub(stub: SharedStub) -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let app = Router::new()
        .route("/playlists", get(list_playlists).post(create_playlist).delete(delete_playlist))
        .route("/playlists/add_track", post(add_track))
        .route("/playlists/{id}", get(get_tracks).put(rename_playlist))
        .route("/playlists/{id}/remove_track", delete(remove_track))
        .route("/playlists/{id}/recommendations", get(recommendations))
        .route("/tracks", get(search_tracks))
        .route("/track/stat", post(record_listen).get(playback_count))
        .route("/user/history", post(record_click).get(history))
        .route("/artist/popularity", get(artist_popularity))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stub plus a client pointed at it.
pub async fn stub_client(stub: SharedStub) -> CatalogClient {
    let base_url = spawn_stub(stub).await;
    let config = ClientConfig {
        api_base_url: base_url,
        account_email: None,
    };
    CatalogClient::new(&config).unwrap()
}

/// Wait for a detached telemetry task to land in the stub.
pub async fn wait_until(mut predicate: impl FnMut() -> bool) {
    for _ in 0..200 {
        if predicate() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within 2s");
}

pub fn seeded_stub(tracks: Vec<Track>) -> SharedStub {
    Arc::new(Mutex::new(StubState {
        tracks,
        next_track_id: 100,
        ..Default::default()
    }))
}
