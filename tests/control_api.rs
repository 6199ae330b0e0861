use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration as Delta, TimeZone, Utc};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use taskbar_timer::{
    create_router,
    shell::TrayShell,
    state::{AppState, Clock, CountdownEngine, ManualClock},
    tasks::{tick_driver_task, ui_dispatch_task, UiDispatcher, UI_QUEUE_DEPTH},
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Wire the full app against a manual clock. The tick driver is optional so
/// command-only tests are not disturbed by ticks.
fn app(clock: &ManualClock, with_ticks: bool) -> Router {
    let engine = CountdownEngine::new().shared();
    let clock: Arc<dyn Clock> = Arc::new(clock.clone());
    let (ui_tx, ui_rx) = mpsc::channel(UI_QUEUE_DEPTH);

    let (dispatcher, view_rx) =
        UiDispatcher::new(Arc::clone(&engine), Arc::clone(&clock), TrayShell::default());
    tokio::spawn(ui_dispatch_task(dispatcher, ui_rx));
    if with_ticks {
        tokio::spawn(tick_driver_task(engine, clock, ui_tx.clone()));
    }

    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), ui_tx, view_rx));
    create_router(state)
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn start_locks_presets_and_minimizes() {
    let app = app(&ManualClock::new(t0()), false);

    let (status, body) = call(&app, "POST", "/start/25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["view"]["title"], "25 min");
    assert_eq!(body["view"]["presets_enabled"], false);
    assert_eq!(body["view"]["window"], "minimized");
    assert_eq!(body["view"]["last_cue"], "bell");
    assert_eq!(body["view"]["last_balloon"]["text"], "timer set for 25 minutes");
}

#[tokio::test]
async fn second_start_conflicts() {
    let app = app(&ManualClock::new(t0()), false);

    call(&app, "POST", "/start/10").await;
    let (status, body) = call(&app, "POST", "/start/5").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn non_preset_duration_is_rejected() {
    let app = app(&ManualClock::new(t0()), false);

    let (status, body) = call(&app, "POST", "/start/7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("7 minutes"));

    let (status, _) = call(&app, "POST", "/start/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reset_unlocks_presets_and_is_recorded() {
    let app = app(&ManualClock::new(t0()), false);

    call(&app, "POST", "/start/15").await;
    let (status, body) = call(&app, "POST", "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["view"]["presets_enabled"], true);

    let (status, body) = call(&app, "GET", "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_action"], "reset");

    let (status, _) = call(&app, "POST", "/start/15").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(&ManualClock::new(t0()), false);

    let (status, body) = call(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test(start_paused = true)]
async fn ticks_drive_countdown_to_completion() {
    let clock = ManualClock::new(t0());
    let app = app(&clock, true);

    call(&app, "POST", "/start/5").await;

    clock.set(t0() + Delta::seconds(100));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let (_, body) = call(&app, "GET", "/status").await;
    assert_eq!(body["view"]["phase"], "running");
    assert_eq!(body["view"]["title"], "03 min");
    assert_eq!(body["view"]["remaining_seconds"], 200);

    // One late poll past both thresholds: half time first, completion next tick
    clock.set(t0() + Delta::seconds(310));
    tokio::time::sleep(Duration::from_secs(1)).await;
    let (_, body) = call(&app, "GET", "/status").await;
    assert_eq!(body["view"]["phase"], "half_time_reached");

    tokio::time::sleep(Duration::from_secs(1)).await;
    let (_, body) = call(&app, "GET", "/status").await;
    assert_eq!(body["view"]["last_balloon"]["text"], "TIME UP!");
    assert_eq!(body["view"]["last_cue"], "finish");
    assert_eq!(body["view"]["window"], "normal");
    assert_eq!(body["view"]["presets_enabled"], true);
    assert_eq!(body["view"]["title"], "Pomodoro timer");

    tokio::time::sleep(Duration::from_secs(1)).await;
    let (_, body) = call(&app, "GET", "/status").await;
    assert_eq!(body["view"]["phase"], "idle");
}
