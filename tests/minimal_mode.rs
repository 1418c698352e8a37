//! Degraded-mode behavior of the gateway.

use forensics_gateway::bootstrap::AppRegistry;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_unregistered_backend_reports_error_on_root() {
    let home = tempfile::tempdir().unwrap();
    common::write_backend_home(home.path(), "backend");

    let config = common::config_with_home(home.path());
    let (addr, shutdown) = common::spawn_gateway(config, AppRegistry::new()).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "API is running (minimal mode)",
            "error": "no application named `backend` is linked into this build",
        })
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_health_body_is_exact_regardless_of_failure_kind() {
    // A home with no manifest at all: a different failure than an
    // unregistered application, same health contract.
    let home = tempfile::tempdir().unwrap();

    let config = common::config_with_home(home.path());
    let (addr, shutdown) = common::spawn_gateway(config, AppRegistry::new()).await;

    let res = common::client()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok", "mode": "minimal" }));

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_manifest_error_names_the_path() {
    let home = tempfile::tempdir().unwrap();

    let config = common::config_with_home(home.path());
    let (addr, shutdown) = common::spawn_gateway(config, AppRegistry::new()).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    let body: Value = res.json().await.unwrap();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("service.toml"), "error was: {}", error);

    shutdown.trigger();
}

#[tokio::test]
async fn test_minimal_mode_serves_nothing_else() {
    let home = tempfile::tempdir().unwrap();
    common::write_backend_home(home.path(), "backend");

    let config = common::config_with_home(home.path());
    let (addr, shutdown) = common::spawn_gateway(config, AppRegistry::new()).await;

    let res = common::client()
        .get(format!("http://{}/predict", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 404);

    shutdown.trigger();
}
