// tests/check_elasticsearch_tests.rs
use check_elasticsearch::config::CheckConfig;
use check_elasticsearch::plugin::{CheckResult, ServiceState};
use check_elasticsearch::run_check;
use check_elasticsearch::timeout::{run_detached, TimeoutSupervisor};
use mockito::{Server, ServerGuard};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const HEALTH_PATH: &str = "/_cluster/health";

fn config_for(server: &ServerGuard) -> CheckConfig {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mock server address has a port");

    CheckConfig {
        host: host.to_string(),
        port: port.parse().expect("mock server port is numeric"),
        timeout_secs: 5,
    }
}

async fn check_against(status: usize, body: &str) -> CheckResult {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", HEALTH_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let result = run_check(&config_for(&server)).await;
    mock.assert_async().await;
    result
}

fn health_body(status: &str) -> String {
    format!(
        r#"{{"cluster_name":"es1","status":"{}","timed_out":false,"number_of_nodes":3,"number_of_data_nodes":3,"active_primary_shards":5,"active_shards":10,"relocating_shards":0,"initializing_shards":0,"unassigned_shards":0}}"#,
        status
    )
}

#[tokio::test]
async fn test_green_cluster_is_ok_with_perf_data() {
    let body = r#"{"cluster_name":"es1","status":"green","number_of_nodes":3,"number_of_data_nodes":3,"active_primary_shards":5,"active_shards":10,"unassigned_shards":0}"#;
    let result = check_against(200, body).await;

    assert_eq!(result.state, ServiceState::Ok);
    assert!(result.message.contains("es1"));
    assert!(result.message.contains("green"));

    let values: Vec<(&str, f64)> = result
        .perf_data
        .iter()
        .map(|d| (d.label.as_str(), d.value))
        .collect();
    assert_eq!(
        values,
        vec![
            ("number_of_nodes", 3.0),
            ("number_of_data_nodes", 3.0),
            ("active_primary_shards", 5.0),
            ("active_shards", 10.0),
            ("unassigned_shards", 0.0),
        ]
    );
    assert_eq!(result.message, "Cluster 'es1': Status is green");
}

#[tokio::test]
async fn test_yellow_and_red_map_to_warning_and_critical() {
    let yellow = check_against(200, &health_body("yellow")).await;
    assert_eq!(yellow.state, ServiceState::Warning);
    assert_eq!(yellow.message, "Cluster 'es1': Status is yellow");

    let red = check_against(200, &health_body("red")).await;
    assert_eq!(red.state, ServiceState::Critical);
    assert_eq!(red.message, "Cluster 'es1': Status is red");
}

#[tokio::test]
async fn test_unrecognised_status_is_unknown() {
    for status in ["", "purple"] {
        let result = check_against(200, &health_body(status)).await;
        assert_eq!(result.state, ServiceState::Unknown);
        assert!(result.message.is_empty());
        assert_eq!(result.perf_data.len(), 5);
    }
}

#[tokio::test]
async fn test_server_error_is_critical() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", HEALTH_PATH)
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    let config = config_for(&server);
    let result = run_check(&config).await;

    assert_eq!(result.state, ServiceState::Critical);
    assert_eq!(
        result.message,
        format!(
            "Unexpected Status 500 for http://{}:{}/_cluster/health",
            config.host, config.port
        )
    );
    assert!(result.perf_data.is_empty());
}

#[tokio::test]
async fn test_non_200_success_code_is_critical() {
    let result = check_against(201, &health_body("green")).await;
    assert_eq!(result.state, ServiceState::Critical);
    assert!(result.message.contains("201"));
}

#[tokio::test]
async fn test_malformed_json_is_unknown() {
    let result = check_against(200, r#"{"cluster_name": "es1", "status": "#).await;
    assert_eq!(result.state, ServiceState::Unknown);
    assert!(result.message.starts_with("JSON error: "));
    assert!(result.perf_data.is_empty());
}

#[tokio::test]
async fn test_wrong_shape_is_unknown() {
    let result = check_against(200, r#"["green"]"#).await;
    assert_eq!(result.state, ServiceState::Unknown);
    assert!(result.message.starts_with("JSON error: "));
}

#[tokio::test]
async fn test_connection_refused_is_critical() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = CheckConfig {
        port,
        timeout_secs: 5,
        ..Default::default()
    };
    let result = run_check(&config).await;

    assert_eq!(result.state, ServiceState::Critical);
    assert!(result.message.starts_with("error: "));
}

#[tokio::test]
async fn test_hung_endpoint_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    // Accept connections and never answer.
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let config = CheckConfig {
        port,
        timeout_secs: 1,
        ..Default::default()
    };
    let result = run_check(&config).await;

    assert_eq!(result.state, ServiceState::Critical);
    assert_eq!(result.message, "Timeout after 1 seconds");
}

#[tokio::test]
async fn test_truncated_body_is_unknown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    // Promise 500 bytes, send a fragment, hang up.
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).await;
            let _ = stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                      Content-Length: 500\r\n\r\n{\"cluster_name\":\"es1\"",
                )
                .await;
            let _ = stream.shutdown().await;
        }
    });

    let config = CheckConfig {
        port,
        timeout_secs: 5,
        ..Default::default()
    };
    let result = run_check(&config).await;

    assert_eq!(result.state, ServiceState::Unknown);
    assert!(result.message.starts_with("read error: "));
    assert!(result.perf_data.is_empty());
}

#[test]
fn test_timed_out_check_releases_runtime_promptly() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = CheckConfig {
        port,
        timeout_secs: 1,
        ..Default::default()
    };
    let started = Instant::now();

    let result = run_detached(async {
        let refused = run_check(&config).await;
        assert_eq!(refused.state, ServiceState::Critical);

        TimeoutSupervisor::new(Duration::from_secs(1))
            .run(async {
                let _ = tokio::task::spawn_blocking(|| std::thread::sleep(Duration::from_secs(6))).await;
                CheckResult::new(ServiceState::Ok, "resolved too late")
            })
            .await
    })
    .unwrap();

    assert_eq!(result.state, ServiceState::Critical);
    assert_eq!(result.message, "Timeout after 1 seconds");
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_invalid_config_is_unknown() {
    let config = CheckConfig {
        host: String::new(),
        ..Default::default()
    };
    let result = run_check(&config).await;

    assert_eq!(result.state, ServiceState::Unknown);
    assert_eq!(
        result.message,
        "invalid configuration: Target host must not be empty"
    );
}
