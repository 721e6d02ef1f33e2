use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::sync::oneshot;

/// In-process stand-in for the MIA gateway. Commands are answered from a
/// fixed table keyed by the first word; everything else echoes `ok: <cmd>`.
#[derive(Default)]
struct MockState {
    commands: Vec<String>,
    listing_requests: Vec<(String, String)>,
    disks_broken: bool,
}

type Shared = Arc<Mutex<MockState>>;

pub struct GatewayGuard {
    pub base_url: String,
    state: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

#[allow(dead_code)]
impl GatewayGuard {
    pub fn commands(&self) -> Vec<String> {
        self.state.lock().map(|s| s.commands.clone()).unwrap_or_default()
    }

    pub fn listing_requests(&self) -> Vec<(String, String)> {
        self.state
            .lock()
            .map(|s| s.listing_requests.clone())
            .unwrap_or_default()
    }

    pub fn break_disks(&self) {
        if let Ok(mut s) = self.state.lock() {
            s.disks_broken = true;
        }
    }
}

impl Drop for GatewayGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

pub fn spawn_gateway() -> Result<GatewayGuard> {
    let state: Shared = Arc::new(Mutex::new(MockState::default()));
    let app = Router::new()
        .route("/execute", post(execute))
        .route("/disks", get(disks))
        .route("/filesystem", get(filesystem))
        .route("/file-content", get(file_content))
        .with_state(state.clone());

    let std_listener =
        std::net::TcpListener::bind("127.0.0.1:0").context("bind mock gateway")?;
    std_listener
        .set_nonblocking(true)
        .context("set listener nonblocking")?;
    let addr: SocketAddr = std_listener.local_addr().context("mock gateway addr")?;

    let (tx, rx) = oneshot::channel::<()>();
    let handle = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(_) => return,
        };
        rt.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(std_listener) else {
                return;
            };
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });
    });

    Ok(GatewayGuard {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
        handle: Some(handle),
    })
}

async fn execute(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let command = body
        .get("command")
        .and_then(|c| c.as_str())
        .unwrap_or("")
        .to_string();
    if let Ok(mut s) = state.lock() {
        s.commands.push(command.clone());
    }

    let word = command
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();
    match word.as_str() {
        "mounted" => Json(json!({ "output": "681A" })).into_response(),
        "login" => Json(json!({ "output": "logged in" })).into_response(),
        "rmdisk" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "output": "", "error": "disk not found" })),
        )
            .into_response(),
        "logout" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "output": "", "error": "no active session" })),
        )
            .into_response(),
        "garbage" => (StatusCode::OK, "not json").into_response(),
        "mkdir" => Json(json!({ "output": "" })).into_response(),
        _ => Json(json!({ "output": format!("ok: {}", command) })).into_response(),
    }
}

async fn disks(State(state): State<Shared>) -> Response {
    let broken = state.lock().map(|s| s.disks_broken).unwrap_or(false);
    if broken {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "disks": null, "error": "cannot read disk directory" })),
        )
            .into_response();
    }
    Json(json!({
        "disks": [{
            "name": "A.mia",
            "path": "/home/disks/A.mia",
            "size": 10485760,
            "fit": "FF",
            "mountedPartitions": 1,
            "partitions": [
                { "name": "p1", "id": "681A", "type": "P", "size": 1048576, "fit": "WF", "isMounted": true },
                { "name": "p2", "id": "", "type": "P", "size": 2097152, "fit": "BF", "isMounted": false }
            ]
        }],
        "error": null
    }))
    .into_response()
}

async fn filesystem(
    State(state): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let id = q.get("partition_id").cloned().unwrap_or_default();
    let path = q.get("path").cloned().unwrap_or_default();
    if let Ok(mut s) = state.lock() {
        s.listing_requests.push((id.clone(), path.clone()));
    }
    if id != "681A" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "partition not mounted" })),
        )
            .into_response();
    }
    match path.as_str() {
        "/" => Json(json!([
            { "name": "home", "type": "folder", "size": 0, "permissions": "664", "owner": "root", "uid": 1, "gid": 1 },
            { "name": "users.txt", "type": "file", "size": 27, "permissions": "664", "owner": "root", "uid": 1, "gid": 1 }
        ]))
        .into_response(),
        "/home" => Json(Value::Null).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "directory not found" })),
        )
            .into_response(),
    }
}

async fn file_content(Query(q): Query<HashMap<String, String>>) -> Response {
    let path = q.get("path").cloned().unwrap_or_default();
    if path == "/users.txt" {
        let content = "1,G,root\n1,U,root,root,123\n";
        return Json(json!({ "path": path, "content": content, "size": content.len() }))
            .into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "file not found" })),
    )
        .into_response()
}
