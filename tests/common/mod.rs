#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use fitlog::models::LogEntry;
use fitlog::{Config, RemoteClient};

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn workout(date: &str, name: &str) -> LogEntry {
    LogEntry::workout(date, name, None)
}

pub fn workout_with_calories(date: &str, name: &str, calories: f64) -> LogEntry {
    LogEntry::workout(date, name, Some(calories))
}

pub fn weight(date: &str, value: &str) -> LogEntry {
    LogEntry::weight(date, value)
}

/// In-process stand-in for the spreadsheet service: GET returns the
/// configured snapshot, POST records the append body and acks.
#[derive(Clone)]
pub struct RemoteStub {
    pub snapshot: Arc<Mutex<Value>>,
    pub appends: Arc<Mutex<Vec<Value>>>,
}

impl RemoteStub {
    pub fn recorded_appends(&self) -> Vec<Value> {
        self.appends.lock().unwrap().clone()
    }
}

async fn snapshot_handler(State(stub): State<RemoteStub>) -> Json<Value> {
    Json(stub.snapshot.lock().unwrap().clone())
}

async fn append_handler(State(stub): State<RemoteStub>, Json(body): Json<Value>) -> Json<Value> {
    stub.appends.lock().unwrap().push(body);
    Json(json!({ "status": "ok" }))
}

pub async fn spawn_remote(snapshot: Value) -> (RemoteClient, RemoteStub) {
    let stub = RemoteStub {
        snapshot: Arc::new(Mutex::new(snapshot)),
        appends: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/", get(snapshot_handler).post(append_handler))
        .with_state(stub.clone());
    let base_url = serve(app).await;

    (client_for(base_url), stub)
}

/// A remote that fails every call with a 500.
pub async fn spawn_failing_remote() -> RemoteClient {
    async fn boom() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    let app = Router::new().route("/", get(boom).post(boom));
    client_for(serve(app).await)
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn client_for(base_url: String) -> RemoteClient {
    let config = Config {
        api_url: base_url,
        timeout_secs: 5,
    };
    RemoteClient::new(&config).unwrap()
}
