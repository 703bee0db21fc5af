use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use cardtrack_core::{BadgeKind, MemoryStore, PanelSection, PanelSettings, Scope, SettingsStore};
use cardtrack_engine::{HistoryRow, PanelBody};
use cardtrack_runtime::{
    BadgeRequest, BadgeService, CardView, FetchError, HistoryRegion, MetricsClient, PanelContent,
    PanelService, SettingsService,
};
use cardtrack_types::{Badge, BoardId, CardFilter, CardId, ExportFormat, ListId, UserSettingsUpdate};
use chrono::Utc;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Backend {
    hits: Arc<Mutex<Vec<String>>>,
    users: Arc<Mutex<HashMap<String, Value>>>,
}

impl Backend {
    fn record(&self, path: String) {
        self.hits.lock().unwrap().push(path);
    }

    fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    fn hit(&self, suffix: &str) -> bool {
        self.hits().iter().any(|path| path.ends_with(suffix))
    }
}

async fn fetch_history(State(backend): State<Backend>, Path(card): Path<String>) -> StatusCode {
    backend.record(format!("/api/card/{card}/fetch-history"));
    if card == "c500" {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn metrics(
    State(backend): State<Backend>,
    Path(card): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(format!("/api/card/{card}/metrics"));
    match card.as_str() {
        "missing" => Err(StatusCode::NOT_FOUND),
        "slow" => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(Json(json!({"total_time": 3600})))
        }
        _ => Ok(Json(json!({
            "total_time": 7200,
            "time_per_list": {"Doing": 5400, "To Do": 1800},
            "time_per_member": {"m1": 1800}
        }))),
    }
}

async fn history(
    State(backend): State<Backend>,
    Path(card): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(format!("/api/card/{card}/history"));
    if card == "broken-history" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!([
        {"date": "2024-02-10T09:00:00Z", "type": "createCard", "data": {"listName": "To Do"}},
        {"date": "2024-02-10T14:30:00Z", "type": "updateCard", "data": {"listName": "Doing", "visitCount": 2}}
    ])))
}

async fn detailed_history(State(backend): State<Backend>, Path(card): Path<String>) -> Json<Value> {
    backend.record(format!("/api/card/{card}/detailed-history"));
    Json(json!([]))
}

async fn board_lists(
    State(backend): State<Backend>,
    Path(board): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(format!("/api/board/{board}/lists"));
    if board == "b-nolists" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!([
        {"id": "l-todo", "name": "To Do"},
        {"id": "l-doing", "name": "Doing"}
    ])))
}

async fn cards(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    backend.record("/api/cards".to_string());
    let all = [
        json!({"id": 1, "trello_card_id": "abc1", "created_at": "2024-01-05T10:00:00"}),
        json!({"id": 2, "trello_card_id": "xyz2", "created_at": "2024-03-01T08:30:00"}),
    ];
    let matching: Vec<Value> = all
        .into_iter()
        .filter(|card| match params.get("trello_card_id") {
            Some(part) => card["trello_card_id"].as_str().unwrap().contains(part.as_str()),
            None => true,
        })
        .filter(|card| match params.get("created_after") {
            Some(date) => card["created_at"].as_str().unwrap() > date.as_str(),
            None => true,
        })
        .collect();
    Json(Value::Array(matching))
}

async fn export(
    State(backend): State<Backend>,
    Path(card): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> String {
    let format = params.get("format").cloned().unwrap_or_default();
    backend.record(format!("/api/export/{card}?format={format}"));
    format!("card_id,total_time\n{card},7200\n")
}

async fn save_user_settings(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.record("/api/settings".to_string());
    let username = body["username"].as_str().unwrap_or_default().to_string();
    // stored as one opaque string, like the real backend
    let stored = Value::String(body["settings"].to_string());
    backend.users.lock().unwrap().insert(username, stored);
    Json(json!({"message": "Settings updated"}))
}

async fn user_settings(
    State(backend): State<Backend>,
    Path(username): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(format!("/api/settings/{username}"));
    match backend.users.lock().unwrap().get(&username) {
        Some(settings) => Ok(Json(json!({"settings": settings}))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn spawn_backend() -> (Backend, MetricsClient) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/api/card/{card}/fetch-history", get(fetch_history))
        .route("/api/card/{card}/metrics", get(metrics))
        .route("/api/card/{card}/history", get(history))
        .route("/api/card/{card}/detailed-history", get(detailed_history))
        .route("/api/board/{board}/lists", get(board_lists))
        .route("/api/cards", get(cards))
        .route("/api/export/{card}", get(export))
        .route("/api/settings", post(save_user_settings))
        .route("/api/settings/{username}", get(user_settings))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let client = MetricsClient::new(format!("http://{addr}"), Duration::from_secs(5))
        .expect("client");
    (backend, client)
}

fn metrics_only() -> PanelSettings {
    PanelSettings::default()
}

#[tokio::test]
async fn test_failed_ingestion_still_renders_metrics() {
    let (backend, client) = spawn_backend().await;
    let panel = PanelService::new(&client)
        .load(&CardId::new("c500"), &metrics_only(), &Utc)
        .await;

    let PanelContent::Metrics(metrics) = &panel.content else {
        panic!("expected metrics, got {:?}", panel.content);
    };
    assert_eq!(metrics.sections[0].body, PanelBody::Text("2.00 hours".to_string()));
    assert!(backend.hit("/api/card/c500/fetch-history"));
    assert!(backend.hit("/api/card/c500/metrics"));
}

#[tokio::test]
async fn test_history_only_requested_when_enabled() {
    let (backend, client) = spawn_backend().await;
    let service = PanelService::new(&client);

    let panel = service.load(&CardId::new("c1"), &metrics_only(), &Utc).await;
    assert!(!backend.hit("/history"));
    assert!(!backend.hit("/detailed-history"));
    assert_eq!(panel.history, HistoryRegion::Loaded(Default::default()));

    let settings = metrics_only().with(PanelSection::History, true);
    let panel = service.load(&CardId::new("c1"), &settings, &Utc).await;
    assert!(backend.hit("/api/card/c1/history"));
    assert!(!backend.hit("/detailed-history"));

    let HistoryRegion::Loaded(view) = panel.history else {
        panic!("expected history");
    };
    let table = view.history.expect("history table");
    assert_eq!(table.rows.len(), 2);
    assert!(view.detailed.is_none());
}

#[tokio::test]
async fn test_empty_detailed_history_renders_placeholder_row() {
    let (_backend, client) = spawn_backend().await;
    let settings = metrics_only().with(PanelSection::DetailedHistory, true);

    let panel = PanelService::new(&client)
        .load(&CardId::new("c1"), &settings, &Utc)
        .await;

    let HistoryRegion::Loaded(view) = panel.history else {
        panic!("expected history");
    };
    assert_eq!(
        view.detailed.expect("detailed table").rows,
        vec![HistoryRow::Empty {
            message: "No detailed history found"
        }]
    );
}

#[tokio::test]
async fn test_history_failure_stays_in_history_region() {
    let (_backend, client) = spawn_backend().await;
    let settings = metrics_only().with(PanelSection::History, true);

    let panel = PanelService::new(&client)
        .load(&CardId::new("broken-history"), &settings, &Utc)
        .await;

    assert!(matches!(panel.content, PanelContent::Metrics(_)));
    let HistoryRegion::Failed(message) = panel.history else {
        panic!("expected history failure");
    };
    assert!(message.starts_with("HTTP error! status: 500"), "{message}");
}

#[tokio::test]
async fn test_metrics_failure_fills_content_region() {
    let (backend, client) = spawn_backend().await;
    let settings = metrics_only().with(PanelSection::History, true);

    let panel = PanelService::new(&client)
        .load(&CardId::new("missing"), &settings, &Utc)
        .await;

    let PanelContent::Failed(message) = &panel.content else {
        panic!("expected failure");
    };
    assert!(message.starts_with("HTTP error! status: 404"), "{message}");
    assert_eq!(panel.history, HistoryRegion::NotLoaded);
    assert!(!backend.hit("/history"));
}

#[tokio::test]
async fn test_overlapping_loads_keep_the_newest() {
    let (_backend, client) = spawn_backend().await;
    let service = PanelService::new(&client);
    let view = CardView::new();
    let settings = metrics_only();

    let slow_id = CardId::new("slow");
    let fast_id = CardId::new("fast");
    let (slow_shown, fast_shown) = futures::join!(
        view.load(&service, &slow_id, &settings, &Utc),
        view.load(&service, &fast_id, &settings, &Utc),
    );

    assert!(!slow_shown);
    assert!(fast_shown);
    let Some(PanelContent::Metrics(panel)) = view.content() else {
        panic!("expected metrics");
    };
    assert_eq!(panel.sections[0].body, PanelBody::Text("2.00 hours".to_string()));
}

fn board_store(board: &str, kinds: &[BadgeKind]) -> SettingsStore<MemoryStore> {
    let store = SettingsStore::new(MemoryStore::new());
    let scope = Scope::board(board);
    for kind in kinds {
        store.set_flag(&scope, kind.flag_key(), true).unwrap();
    }
    store
}

fn request(board: &str) -> BadgeRequest {
    BadgeRequest {
        board: BoardId::new(board),
        card: CardId::new("c1"),
        list: ListId::new("l-doing"),
        viewer: None,
    }
}

#[tokio::test]
async fn test_badges_resolve_list_name_from_board() {
    let (backend, client) = spawn_backend().await;
    let store = board_store("b1", &[BadgeKind::CurrentList, BadgeKind::TotalTime]);

    let badges = BadgeService::new(&client, &store).badges(&request("b1")).await;

    assert_eq!(
        badges,
        vec![
            Badge::new("Doing: 1.5h", "#0079bf"),
            Badge::new("Total: 2.0h", "#61bd4f")
        ]
    );
    assert!(backend.hit("/api/board/b1/lists"));
}

#[tokio::test]
async fn test_badges_skip_lists_request_when_not_needed() {
    let (backend, client) = spawn_backend().await;
    let store = board_store("b1", &[BadgeKind::TotalTime]);

    let badges = BadgeService::new(&client, &store).badges(&request("b1")).await;

    assert_eq!(badges, vec![Badge::new("Total: 2.0h", "#61bd4f")]);
    assert!(!backend.hit("/lists"));
}

#[tokio::test]
async fn test_failed_lists_drop_only_list_badges() {
    let (_backend, client) = spawn_backend().await;
    let store = board_store("b-nolists", &[BadgeKind::CurrentList, BadgeKind::TotalTime]);

    let badges = BadgeService::new(&client, &store)
        .badges(&request("b-nolists"))
        .await;

    assert_eq!(badges, vec![Badge::new("Total: 2.0h", "#61bd4f")]);
}

#[tokio::test]
async fn test_unreachable_backend_gives_fallback_badge() {
    let client = MetricsClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let store = board_store("b1", &BadgeKind::ALL);

    let badges = BadgeService::new(&client, &store).badges(&request("b1")).await;

    assert_eq!(badges, vec![Badge::fallback()]);
}

#[tokio::test]
async fn test_list_cards_forwards_filter() {
    let (_backend, client) = spawn_backend().await;

    let all = client.list_cards(&CardFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let filter = CardFilter::new().card_id_contains("xyz");
    let cards = client.list_cards(&filter).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].trello_card_id, CardId::new("xyz2"));
    assert!(cards[0].created_at.is_some());
}

#[tokio::test]
async fn test_export_returns_raw_body() {
    let (backend, client) = spawn_backend().await;

    let body = client
        .export_metrics(&CardId::new("c1"), ExportFormat::Csv)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(body).unwrap(), "card_id,total_time\nc1,7200\n");
    assert!(backend.hit("/api/export/c1?format=csv"));
}

#[tokio::test]
async fn test_settings_form_marks_and_saves_selection() {
    let (_backend, client) = spawn_backend().await;
    let store = SettingsStore::new(MemoryStore::new());
    let board = BoardId::new("b1");
    store
        .set_selected_lists(
            &Scope::Board(board.clone()),
            [ListId::new("l-doing"), ListId::new("gone")],
        )
        .unwrap();
    let service = SettingsService::new(&client, &store);

    let mut form = service.form(&board).await;
    let selected: Vec<&str> = form
        .lists
        .iter()
        .filter(|option| option.selected)
        .map(|option| option.list.name.as_str())
        .collect();
    assert_eq!(selected, vec!["Doing"]);

    form.select(&[ListId::new("l-todo")]);
    form.settings.show_total_time = true;
    service.save(&form).unwrap();

    let saved = store.selected_lists(&Scope::Board(board.clone()));
    assert_eq!(saved.iter().map(|id| id.as_str()).collect::<Vec<_>>(), vec!["l-todo"]);
    assert_eq!(store.flag(&Scope::Board(board), "show-total-time"), Some(true));
}

#[tokio::test]
async fn test_user_settings_round_trip() {
    let (backend, client) = spawn_backend().await;

    let err = client.get_user_settings("alice").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, FetchError::Status { .. }));

    let update = UserSettingsUpdate::new("alice").with_setting("theme", "dark");
    let reply = client.update_user_settings(&update).await.unwrap();
    assert_eq!(reply.message, "Settings updated");

    let stored = client.get_user_settings("alice").await.unwrap();
    assert_eq!(stored.text().as_deref(), Some(r#"{"theme":"dark"}"#));
    assert!(backend.hit("/api/settings"));
    assert!(backend.hit("/api/settings/alice"));
}

#[tokio::test]
async fn test_upload_sends_scoped_settings() {
    let (backend, client) = spawn_backend().await;
    let store = SettingsStore::new(MemoryStore::new());
    let board = Scope::board("b1");
    store.set_flag(&board, "show-total-time", true).unwrap();
    store.set(&board, "total-time-color", "#123456").unwrap();
    store.set(&Scope::board("b2"), "show-total-time", "false").unwrap();

    let upload = SettingsService::new(&client, &store)
        .upload("bob", &board)
        .await
        .unwrap();

    assert_eq!(upload.keys, vec!["show-total-time", "total-time-color"]);
    assert_eq!(upload.message, "Settings updated");

    let stored = backend.users.lock().unwrap().get("bob").cloned().unwrap();
    let sent: Value = serde_json::from_str(stored.as_str().unwrap()).unwrap();
    assert_eq!(sent, json!({"show-total-time": "true", "total-time-color": "#123456"}));
}
