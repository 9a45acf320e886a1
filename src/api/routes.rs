use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    games::{add_game, delete_game, list_games},
    views::{get_elo, get_history, get_stats},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/games", get(list_games).post(add_game))
        .route("/api/games/:id", delete(delete_game))
        .route("/api/elo", get(get_elo))
        .route("/api/history", get(get_history))
        .route("/api/stats", get(get_stats))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::services::report::ReportService;
    use crate::store::{JsonFileStore, SharedStore};

    fn app(dir: &tempfile::TempDir) -> Router {
        let store: SharedStore = Arc::new(JsonFileStore::new(dir.path().join("games.json")));
        let reports = ReportService::new(store, AppConfig::new());
        create_router(Arc::new(AppState { reports }))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_game(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/games")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_read_views() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (status, body) = send(
            &app,
            post_game(json!({
                "dateISO": "2024-04-01",
                "mode": "1v1",
                "winners": ["Ann"],
                "losers": ["Bob"],
                "lostOnBlack": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["count"], 1);

        let (_, elo) = send(&app, get_request("/api/elo")).await;
        assert_eq!(elo["podium"][0]["name"], "Ann");
        assert_eq!(elo["podium"][0]["rating"], 1016);

        let (_, history) = send(&app, get_request("/api/history?q=bob&mode=1v1")).await;
        assert_eq!(history["total"], 1);
        assert_eq!(history["groups"][0]["dateISO"], "2024-04-01");
        assert_eq!(history["groups"][0]["items"][0]["eloChanges"][1]["delta"], -16);

        let (_, stats) = send(&app, get_request("/api/stats")).await;
        assert_eq!(stats["blackBallRatio"], 1.0);
        assert_eq!(stats["totals"]["blackBallLosses"], 1);
    }

    #[tokio::test]
    async fn test_rejects_wrong_team_size() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (status, body) = send(
            &app,
            post_game(json!({
                "dateISO": "2024-04-01",
                "mode": "2v2",
                "winners": ["Ann"],
                "losers": ["Bob", "Cid"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("2v2"));

        let (_, games) = send(&app, get_request("/api/games")).await;
        assert_eq!(games, json!([]));
    }

    #[tokio::test]
    async fn test_delete_and_bad_mode() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);

        let (_, body) = send(
            &app,
            post_game(json!({"dateISO": "2024-04-01", "mode": "1v1", "winners": ["Ann"], "losers": ["Bob"]})),
        )
        .await;
        let id = body["id"].as_str().unwrap().to_string();

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/games/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"], 1);

        let (status, _) = send(&app, get_request("/api/history?mode=3v3")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
