//! Shared fixtures for the router integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use gameday_agents::config::AppConfig;
use gameday_agents::router::create_app_router;
use gameday_agents::schedule::models::GameRecord;
use gameday_agents::schedule::{ScheduleStore, StoreError};
use gameday_agents::state::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt; // for `oneshot`
use uuid::Uuid;

/// Address nothing listens on; used when a test must not reach a client
pub const UNREACHABLE: &str = "http://127.0.0.1:9/";

/// In-memory store that records every call it receives
#[derive(Default)]
pub struct RecordingStore {
    games: Vec<GameRecord>,
    fail: bool,
    calls: AtomicUsize,
    last_query: Mutex<Option<(i32, i32)>>,
}

impl RecordingStore {
    pub fn with_games(games: Vec<GameRecord>) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<(i32, i32)> {
        *self.last_query.lock().unwrap()
    }
}

#[async_trait]
impl ScheduleStore for RecordingStore {
    async fn games_by_season_and_week(
        &self,
        season: i32,
        week: i32,
    ) -> Result<Vec<GameRecord>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some((season, week));

        if self.fail {
            return Err(StoreError::Connect(sqlx::Error::PoolTimedOut));
        }

        let mut matching: Vec<GameRecord> = self
            .games
            .iter()
            .filter(|g| g.season == season && g.week_no == week)
            .cloned()
            .collect();
        matching.sort_by_key(|g| g.date);
        Ok(matching)
    }
}

pub fn game(title: &str, season: i32, week: i32, (y, m, d): (i32, u32, u32)) -> GameRecord {
    GameRecord {
        id: Uuid::new_v4(),
        title: title.into(),
        venue: "Soldier Field".into(),
        season,
        week_no: week,
        date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(20, 15, 0)
            .unwrap(),
        created_at: None,
        updated_at: None,
    }
}

/// Builds a config without touching the process environment
pub fn test_config(nfl_base: &str, weather_base: &str, api_key: Option<&str>) -> AppConfig {
    let mut vars: HashMap<&str, String> = HashMap::from([
        ("PG_HOST", "localhost".to_string()),
        ("PG_USER", "test".to_string()),
        ("PG_PASSWORD", "test".to_string()),
        ("PG_DATABASE", "nfl-schedules".to_string()),
        ("NFL_API_BASE_URL", nfl_base.to_string()),
        ("WEATHER_BASE_URL", weather_base.to_string()),
    ]);
    if let Some(key) = api_key {
        vars.insert("ApiKey", key.to_string());
    }
    AppConfig::from_lookup(|name| vars.get(name).cloned()).unwrap()
}

pub fn app_with(store: Arc<RecordingStore>, config: &AppConfig) -> axum::Router {
    create_app_router(Arc::new(AppState::new(config, store)))
}

/// App whose outbound clients point nowhere
pub fn create_test_app(store: Arc<RecordingStore>) -> axum::Router {
    app_with(store, &test_config(UNREACHABLE, UNREACHABLE, Some("test-key")))
}

/// Sends a request and returns the status plus the body parsed as JSON
pub async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Sends a JSON-RPC request to an MCP endpoint
pub async fn send_jsonrpc_request(
    app: &axum::Router,
    endpoint: &str,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });
    send_request(app, "POST", endpoint, Some(request_body)).await
}
