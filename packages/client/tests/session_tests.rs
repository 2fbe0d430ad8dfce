// ABOUTME: Integration tests for login, register, logout and the session guard
// ABOUTME: Verifies the token lifecycle on disk and that a guarded view makes no requests without one

mod common;

use common::{setup, TOKEN};
use serde_json::json;
use taskman_client::{BoardController, ClientError, FileTokenStore, Session, TokenStore};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_guarded_view_without_token_makes_no_requests() {
    let t = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&t.server)
        .await;

    let session = Session::open(FileTokenStore::new(t.home.path().join("session.toml"))).await;
    let result = BoardController::open(t.api.clone(), &session);

    assert!(matches!(result, Err(ClientError::NotAuthenticated)));
    assert!(t.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_persists_token() {
    let t = setup().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(1)
        .mount(&t.server)
        .await;

    let session_path = t.home.path().join("session.toml");
    let mut session = Session::open(FileTokenStore::new(&session_path)).await;
    session
        .login(&t.api, "ada@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.token(), Some(TOKEN));

    // A fresh start picks the token up again
    let reopened = Session::open(FileTokenStore::new(&session_path)).await;
    assert_eq!(reopened.guard().unwrap().token(), TOKEN);
}

#[tokio::test]
async fn test_failed_login_stores_nothing() {
    let t = setup().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&t.server)
        .await;

    let store = FileTokenStore::new(t.home.path().join("session.toml"));
    let mut session = Session::open(store.clone()).await;
    let err = session
        .login(&t.api, "ada@example.com", "wrong")
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert!(!session.is_authenticated());
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_register_logs_in() {
    let t = setup().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"ID": 3}})))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(1)
        .mount(&t.server)
        .await;

    let mut session = Session::open(FileTokenStore::new(t.home.path().join("session.toml"))).await;
    session
        .register(&t.api, "Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.token(), Some(TOKEN));
}

#[tokio::test]
async fn test_failed_register_does_not_log_in() {
    let t = setup().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "DB error"})))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(0)
        .mount(&t.server)
        .await;

    let mut session = Session::open(FileTokenStore::new(t.home.path().join("session.toml"))).await;
    let err = session
        .register(&t.api, "Ada", "ada@example.com", "hunter2")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_logout_removes_session_file() {
    let t = setup().await;
    let store = FileTokenStore::new(t.home.path().join("session.toml"));
    store.save(TOKEN).await.unwrap();

    let mut session = Session::open(store.clone()).await;
    assert!(session.is_authenticated());

    session.logout().await.unwrap();

    assert!(!session.is_authenticated());
    assert!(!store.path().exists());
    assert!(matches!(session.guard(), Err(ClientError::NotAuthenticated)));
}

#[tokio::test]
async fn test_login_failure_after_register_reports_account_created() {
    let t = setup().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"ID": 3}})))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "DB error"})))
        .expect(1)
        .mount(&t.server)
        .await;

    let mut session = Session::open(FileTokenStore::new(t.home.path().join("session.toml"))).await;
    let err = session
        .register(&t.api, "Ada", "ada@example.com", "hunter2")
        .await
        .unwrap_err();

    match &err {
        ClientError::LoginAfterRegister(inner) => {
            assert!(matches!(**inner, ClientError::Api { status: 500, .. }))
        }
        other => panic!("Expected LoginAfterRegister, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Account created"));
    assert!(err.to_string().contains("taskman login"));
    assert!(!session.is_authenticated());
}
