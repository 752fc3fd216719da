//! Shared utilities for integration testing: a programmable mock of the
//! upstream employee API and a helper to start the proxy in front of it.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use employee_proxy::{HttpServer, ServiceConfig, Shutdown};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const UPSTREAM_PATH: &str = "/api/v1/employee";

#[derive(Clone, Default)]
pub struct MockState {
    pub employees: Arc<Mutex<Vec<Value>>>,
    /// When set, every endpoint answers with this status and body.
    pub forced: Arc<Mutex<Option<(u16, String)>>>,
    pub refuse_delete: Arc<AtomicBool>,
    pub calls: Arc<AtomicUsize>,
    pub delete_calls: Arc<AtomicUsize>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    pub state: MockState,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, UPSTREAM_PATH)
    }

    pub fn fail_with(&self, status: u16, body: &str) {
        *self.state.forced.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.state.delete_calls.load(Ordering::SeqCst)
    }
}

pub fn employee_json(name: &str, salary: u64, age: u32) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": age,
        "employee_title": "Engineer",
        "employee_email": format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
    })
}

pub fn sample_employees() -> Vec<Value> {
    vec![
        employee_json("John Doe", 100_000, 30),
        employee_json("Jane Doe", 120_000, 28),
        employee_json("Alice Smith", 90_000, 25),
    ]
}

fn envelope(data: Value) -> Response {
    Json(json!({"status": "Successfully processed request.", "data": data})).into_response()
}

fn enter(state: &MockState) -> Option<Response> {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.forced.lock().unwrap().clone().map(|(status, body)| {
        (StatusCode::from_u16(status).unwrap(), body).into_response()
    })
}

async fn list(State(state): State<MockState>) -> Response {
    if let Some(forced) = enter(&state) {
        return forced;
    }
    let employees = state.employees.lock().unwrap().clone();
    envelope(Value::Array(employees))
}

async fn get_one(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    if let Some(forced) = enter(&state) {
        return forced;
    }
    let found = state
        .employees
        .lock()
        .unwrap()
        .iter()
        .find(|e| e["id"] == id.as_str())
        .cloned();
    match found {
        Some(employee) => envelope(employee),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn create(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    if let Some(forced) = enter(&state) {
        return forced;
    }
    let employee = json!({
        "id": Uuid::new_v4().to_string(),
        "employee_name": body["name"],
        "employee_salary": body["salary"],
        "employee_age": body["age"],
        "employee_title": body["title"],
        "employee_email": "new@company.com",
    });
    state.employees.lock().unwrap().push(employee.clone());
    envelope(employee)
}

async fn delete(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.delete_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(forced) = enter(&state) {
        return forced;
    }
    if state.refuse_delete.load(Ordering::SeqCst) {
        return envelope(Value::Bool(false));
    }
    let mut employees = state.employees.lock().unwrap();
    let position = employees
        .iter()
        .position(|e| e["employee_name"] == body["name"]);
    match position {
        Some(index) => {
            employees.remove(index);
            envelope(Value::Bool(true))
        }
        None => envelope(Value::Bool(false)),
    }
}

/// Start a mock upstream on an ephemeral port.
pub async fn start_mock_upstream(employees: Vec<Value>) -> MockUpstream {
    let state = MockState {
        employees: Arc::new(Mutex::new(employees)),
        ..MockState::default()
    };

    let app = Router::new()
        .route(UPSTREAM_PATH, get(list).post(create).delete(delete))
        .route("/api/v1/employee/{id}", get(get_one))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, state }
}

/// Start the proxy against `base_url`; returns its URL and shutdown handle.
pub async fn start_proxy(base_url: String) -> (String, Shutdown) {
    let mut config = ServiceConfig::default();
    config.upstream.base_url = base_url;
    config.upstream.request_timeout_secs = 5;
    config.upstream.no_proxy = true;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
