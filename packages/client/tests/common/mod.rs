// ABOUTME: Shared helpers for client integration tests
// ABOUTME: Spins up a mock API server and builds clients pointed at it

#![allow(dead_code)]

use serde_json::{json, Value};
use taskman_client::ApiClient;
use taskman_config::ClientConfig;
use tempfile::TempDir;
use wiremock::MockServer;

pub const TOKEN: &str = "header.payload.signature";

pub struct TestApi {
    pub server: MockServer,
    pub api: ApiClient,
    pub home: TempDir,
}

pub async fn setup() -> TestApi {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().expect("Should create temp dir");
    let config = ClientConfig::for_api(&server.uri(), home.path()).expect("Mock server URI is valid");
    let api = ApiClient::new(config).expect("Should build client");
    TestApi { server, api, home }
}

pub fn task_json(id: u64, title: &str, status: &str, board_id: u64) -> Value {
    json!({
        "ID": id,
        "Title": title,
        "Description": "",
        "Status": status,
        "BoardID": board_id,
        "CreatedAt": "2025-05-01T09:00:00Z",
        "UpdatedAt": "2025-05-01T09:00:00Z"
    })
}

pub fn board_json(id: u64, title: &str, tasks: Vec<Value>) -> Value {
    json!({
        "ID": id,
        "Title": title,
        "UserID": 1,
        "CreatedAt": "2025-05-01T09:00:00Z",
        "UpdatedAt": "2025-05-01T09:00:00Z",
        "Tasks": tasks
    })
}
