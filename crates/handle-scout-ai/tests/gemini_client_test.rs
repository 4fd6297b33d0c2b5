use handle_scout_ai::{
    GENERATION_FAILED_MESSAGE, GeminiClient, ProviderConfig, SuggestionProvider, UsernameRules,
};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one canned HTTP response and hand back the raw request.
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = request_tx.send(request);
    });

    (format!("http://{}", addr), request_rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn envelope(model_text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": model_text}]}}]
    })
    .to_string()
}

fn client_for(base_url: String) -> GeminiClient {
    GeminiClient::new(ProviderConfig {
        api_key: "test-key".to_string(),
        api_base_url: base_url,
        request_timeout: Duration::from_secs(5),
        ..ProviderConfig::default()
    })
}

#[tokio::test]
async fn test_filters_short_names_from_successful_response() {
    let (base_url, request_rx) = serve_once(
        "200 OK",
        envelope(r#"{"usernames":["gamer1","pro_gm","xx"]}"#),
    )
    .await;

    let usernames = client_for(base_url)
        .find_available_usernames("game")
        .await
        .unwrap();
    assert_eq!(usernames, vec!["gamer1", "pro_gm"]);

    let request = request_rx.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent"));
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains("\"responseMimeType\":\"application/json\""));
    assert!(request.contains("\\\"game\\\""));
}

#[tokio::test]
async fn test_empty_usernames_is_empty_success() {
    let (base_url, _request_rx) = serve_once("200 OK", envelope(r#"{"usernames":[]}"#)).await;

    let usernames = client_for(base_url)
        .find_available_usernames("game")
        .await
        .unwrap();
    assert!(usernames.is_empty());
}

#[tokio::test]
async fn test_non_json_model_text_is_empty_success() {
    let (base_url, _request_rx) =
        serve_once("200 OK", envelope("here you go: gamer1, pro_gm")).await;

    let usernames = client_for(base_url)
        .find_available_usernames("game")
        .await
        .unwrap();
    assert!(usernames.is_empty());
}

#[tokio::test]
async fn test_strict_rules_apply_to_remote_results() {
    let (base_url, _request_rx) = serve_once(
        "200 OK",
        envelope(r#"{"usernames":["pro-gm","pro_gm"]}"#),
    )
    .await;

    let client = GeminiClient::new(ProviderConfig {
        api_base_url: base_url,
        rules: UsernameRules::strict(),
        ..ProviderConfig::default()
    });
    let usernames = client.find_available_usernames("game").await.unwrap();
    assert_eq!(usernames, vec!["pro_gm"]);
}

#[tokio::test]
async fn test_auth_failure_is_generic_error() {
    let (base_url, _request_rx) = serve_once(
        "403 Forbidden",
        r#"{"error":{"code":403,"message":"API key not valid"}}"#.to_string(),
    )
    .await;

    let err = client_for(base_url)
        .find_available_usernames("game")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_malformed_envelope_is_generic_error() {
    let (base_url, _request_rx) = serve_once("200 OK", "not json at all".to_string()).await;

    let err = client_for(base_url)
        .find_available_usernames("game")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_network_failure_is_generic_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(format!("http://{}", addr))
        .find_available_usernames("game")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to get suggestions from AI. Please check your API key and try again."
    );
}

#[tokio::test]
async fn test_request_timeout_bounds_a_silent_server() {
    // Accepts and reads the request, then never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let client = GeminiClient::new(ProviderConfig {
        api_key: "test-key".to_string(),
        api_base_url: format!("http://{}", addr),
        request_timeout: Duration::from_millis(300),
        ..ProviderConfig::default()
    });

    let started = std::time::Instant::now();
    let err = client.find_available_usernames("game").await.unwrap_err();
    let elapsed = started.elapsed();

    assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
    assert!(elapsed >= Duration::from_millis(300), "returned after {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(2), "took {:?}", elapsed);
}
