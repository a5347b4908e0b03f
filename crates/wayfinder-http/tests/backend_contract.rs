//! Contract tests for the reqwest client against a stub HTTP server.
//!
//! The stub speaks just enough HTTP/1.1 to answer each connection with the
//! next canned reply and record what was asked.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wayfinder_core::{ApiError, GridCell, NavigationApiPort, RouteRequest};
use wayfinder_http::{DefaultNavigationClient, HttpClientConfig};

// ── Stub server ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Recorded {
    request_line: String,
    body: String,
}

struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    async fn start(replies: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let replies = Arc::new(Mutex::new(VecDeque::from(replies)));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let reply = replies
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or((500, r#"{"error": "no reply scripted"}"#));
                answer(stream, reply, &recorded).await;
            }
        });

        Self {
            base_url: format!("http://{addr}/api"),
            requests,
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn client(&self, retries: u8) -> DefaultNavigationClient {
        let config = HttpClientConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(retries)
            .with_retry_delay(Duration::from_millis(1));
        DefaultNavigationClient::new(&config).unwrap()
    }
}

async fn answer(mut stream: TcpStream, (status, body): (u16, &str), log: &Mutex<Vec<Recorded>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    log.lock().unwrap().push(Recorded {
        request_line: head.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    });

    let response = format!(
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    let _ = stream.shutdown().await;
}

// ── GET endpoints ──────────────────────────────────────────────────

#[tokio::test]
async fn rooms_are_fetched_from_base_url() {
    let server = StubServer::start(vec![(200, r#"["reception", "general ward"]"#)]).await;

    let rooms = server.client(0).get_rooms().await.unwrap();

    assert_eq!(rooms, ["reception", "general ward"]);
    assert_eq!(
        server.requests()[0].request_line,
        "GET /api/get_rooms HTTP/1.1"
    );
}

#[tokio::test]
async fn server_error_on_get_is_retried() {
    let server = StubServer::start(vec![
        (503, r#"{"error": "warming up"}"#),
        (200, r#"{"library": [1, 1, 2, 3]}"#),
    ])
    .await;

    let blocks = server.client(2).get_room_blocks().await.unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn retries_give_up_with_last_status() {
    let server = StubServer::start(vec![
        (500, "{}"),
        (500, "{}"),
        (500, r#"{"error": "grid file missing"}"#),
    ])
    .await;

    let err = server.client(2).get_rooms().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: Some("grid file missing".to_string()),
        }
    );
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn client_error_on_get_is_not_retried() {
    let server = StubServer::start(vec![(404, "<html>Not Found</html>")]).await;

    let err = server.client(2).get_rooms().await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error! status: 404");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = HttpClientConfig::new()
        .with_base_url(format!("http://{addr}/api"))
        .with_max_retries(0);
    let client = DefaultNavigationClient::new(&config).unwrap();

    let err = client.get_rooms().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
}

// ── find_path ──────────────────────────────────────────────────────

#[tokio::test]
async fn route_request_body_and_answer() {
    let server = StubServer::start(vec![(
        200,
        r#"{"path": [[2, 3], [2, 4], [3, 4]], "start_coords": [2, 3], "end_coords": [3, 4]}"#,
    )])
    .await;

    let path = server
        .client(0)
        .find_path(&RouteRequest::new("Library", "Gym"))
        .await
        .unwrap();

    assert_eq!(path.cells.len(), 3);
    assert_eq!(path.end, GridCell::new(3, 4));

    let requests = server.requests();
    let recorded = &requests[0];
    assert_eq!(recorded.request_line, "POST /api/find_path HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"currentLocation": "library", "destination": "gym"})
    );
}

#[tokio::test]
async fn route_server_error_is_not_retried() {
    let server = StubServer::start(vec![
        (500, r#"{"error": "pathfinder crashed"}"#),
        (200, r#"{"path": []}"#),
    ])
    .await;

    let err = server
        .client(2)
        .find_path(&RouteRequest::new("library", "gym"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "pathfinder crashed");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn unknown_room_carries_server_message() {
    let server = StubServer::start(vec![(
        404,
        r#"{"error": "Invalid room name(s) provided. Please check spelling."}"#,
    )])
    .await;

    let err = server
        .client(0)
        .find_path(&RouteRequest::new("library", "atrium"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid room name(s) provided. Please check spelling."
    );
}

#[tokio::test]
async fn null_path_is_an_empty_route() {
    let server = StubServer::start(vec![(
        200,
        r#"{"path": null, "start_coords": [2, 3], "end_coords": [40, 40]}"#,
    )])
    .await;

    let path = server
        .client(0)
        .find_path(&RouteRequest::new("library", "morgue"))
        .await
        .unwrap();

    assert!(path.is_empty());
}

#[tokio::test]
async fn malformed_route_is_invalid_response() {
    let server = StubServer::start(vec![(200, r#"{"path": [[1, 2, 3]]}"#)]).await;

    let err = server
        .client(0)
        .find_path(&RouteRequest::new("library", "gym"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidResponse { .. }));
}
