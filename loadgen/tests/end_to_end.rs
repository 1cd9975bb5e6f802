use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use hyper::Method;
use loadgen::catalog::{Endpoint, CATALOG};
use loadgen::client::HttpClient;
use loadgen::scenario::{self, Dispatch, Recorder};
use loadgen::sink::ResultsLog;
use loadgen::statistics::Status;
use tokio_util::sync::CancellationToken;

static HEALTH: Endpoint = Endpoint {
    method: Method::GET,
    path: "/health",
};
static MISSING: Endpoint = Endpoint {
    method: Method::GET,
    path: "/nonexistent",
};
static CREATE_USER: Endpoint = Endpoint {
    method: Method::POST,
    path: "/api/users",
};
static UPDATE_USER: Endpoint = Endpoint {
    method: Method::PUT,
    path: "/api/users/123",
};
static DELETE_USER: Endpoint = Endpoint {
    method: Method::DELETE,
    path: "/api/users/123",
};

async fn spawn_stub() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        stub_server::serve(listener).await.unwrap();
    });
    format!("http://{addr}")
}

fn temp_log(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("loadgen-e2e-{tag}-{}.csv", std::process::id()))
}

#[tokio::test]
async fn health_endpoint_is_a_success() {
    let base = spawn_stub().await;
    let client = HttpClient::new(&base).unwrap();

    let outcome = client.dispatch(&HEALTH).await;
    assert_eq!(outcome.status, Status::Http(200));
    assert!(outcome.status.is_success());
    assert!(outcome.elapsed.as_secs_f64() >= 0.0);
    assert_eq!(outcome.url, format!("{base}/health"));
}

#[tokio::test]
async fn missing_route_is_a_completed_404_outcome() {
    let base = spawn_stub().await;
    let client = HttpClient::new(&base).unwrap();

    let outcome = client.dispatch(&MISSING).await;
    assert_eq!(outcome.status, Status::Http(404));
    assert!(!outcome.status.is_success());
}

#[tokio::test]
async fn write_methods_complete_with_success_statuses() {
    let base = spawn_stub().await;
    let client = HttpClient::new(&base).unwrap();

    let outcome = client.dispatch(&CREATE_USER).await;
    assert_eq!(outcome.status, Status::Http(201));

    let outcome = client.dispatch(&UPDATE_USER).await;
    assert_eq!(outcome.status, Status::Http(200));

    let outcome = client.dispatch(&DELETE_USER).await;
    assert_eq!(outcome.status, Status::Http(204));
    assert!(outcome.status.is_success());
}

#[tokio::test]
async fn unreachable_target_yields_the_transport_sentinel() {
    // bind then drop to get a loopback port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = HttpClient::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let outcome = client.dispatch(&HEALTH).await;
    assert!(matches!(outcome.status, Status::Failed(_)));
    assert_eq!(outcome.status.code(), 0);
}

#[tokio::test]
async fn paced_run_against_a_live_target_keeps_the_books_straight() {
    let base = spawn_stub().await;
    let client = HttpClient::new(&base).unwrap();
    let path = temp_log("paced");
    let recorder = Arc::new(Recorder::new(ResultsLog::create(&path).unwrap()));
    let cancel = CancellationToken::new();

    scenario::run_paced(
        &client,
        CATALOG,
        25.0,
        Duration::from_secs(1),
        &recorder,
        &cancel,
    )
    .await;

    let snapshot = recorder.summary().snapshot();
    assert!(snapshot.total > 0);
    assert_eq!(snapshot.total, snapshot.succeeded + snapshot.failed);
    assert!(snapshot.mean_response_secs() >= 0.0);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count() as u64, snapshot.total + 1);
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn parallel_run_against_a_live_target_records_every_dispatch() {
    let base = spawn_stub().await;
    let client = HttpClient::new(&base).unwrap();
    let path = temp_log("parallel");
    let recorder = Arc::new(Recorder::new(ResultsLog::create(&path).unwrap()));
    let cancel = CancellationToken::new();

    scenario::run_parallel(
        client,
        CATALOG,
        4,
        Duration::from_secs(1),
        recorder.clone(),
        cancel,
    )
    .await
    .unwrap();

    let snapshot = recorder.summary().snapshot();
    assert!(snapshot.total >= 4, "each worker dispatches at least once");
    assert_eq!(snapshot.total, snapshot.succeeded + snapshot.failed);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count() as u64, snapshot.total + 1);
    std::fs::remove_file(&path).unwrap();
}
