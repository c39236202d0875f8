//! HttpTransport against a throwaway local HTTP responder.

use std::time::Duration;

use doc_onlook_core::{ActionRequest, ClientConfig, FileDescriptor, HttpTransport, Transport, TransportError};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection, capture the raw request, and answer with `status` and `body`.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });

    (url, handle)
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let lower = line.to_ascii_lowercase();
                    lower
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn transport() -> HttpTransport {
    HttpTransport::new(&ClientConfig::default().with_timeout(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_find_device_is_form_post() {
    let (url, server) = serve_once("200 OK", r#"{"status":"found","device":"doc-onlook-device"}"#).await;

    let reply = transport()
        .post_form(&url, &ActionRequest::FindDevice.form_fields())
        .await
        .unwrap();

    assert_eq!(reply, json!({"status": "found", "device": "doc-onlook-device"}));

    let request = server.await.unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("POST / HTTP/1.1"));
    assert!(lower.contains("content-type: application/x-www-form-urlencoded"));
    assert!(lower.contains("accept: application/json"));
    assert!(request.ends_with("action=FIND_DEVICE"));
}

#[tokio::test]
async fn test_send_file_body_fields() {
    let (url, server) = serve_once("200 OK", r#"{"status":"success"}"#).await;
    let request = ActionRequest::SendFile(FileDescriptor::new(
        "test-file.pdf",
        "pdf",
        "base64encodeddata",
    ));

    let reply = transport()
        .post_form(&url, &request.form_fields())
        .await
        .unwrap();
    assert_eq!(reply, json!({"status": "success"}));

    let raw = server.await.unwrap();
    assert!(raw.ends_with("action=SEND_FILE&name=test-file.pdf&type=pdf&data=base64encodeddata"));
}

#[tokio::test]
async fn test_base64_data_is_form_escaped() {
    let (url, server) = serve_once("200 OK", "{}").await;
    let request = ActionRequest::SendFile(FileDescriptor::new("a b.txt", "txt", "YQ+/=="));

    transport()
        .post_form(&url, &request.form_fields())
        .await
        .unwrap();

    let raw = server.await.unwrap();
    assert!(raw.ends_with("name=a+b.txt&type=txt&data=YQ%2B%2F%3D%3D"));
}

#[tokio::test]
async fn test_error_status_is_transport_failure() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"status":"error"}"#).await;

    let err = transport()
        .post_form(&url, &ActionRequest::FindDevice.form_fields())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransportError::Status {
            status: 500,
            body: r#"{"status":"error"}"#.to_string()
        }
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        stream
            .write_all(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 64\r\n\r\npartial")
            .await
            .unwrap();
        stream.shutdown().await.ok();
    });

    let err = transport()
        .post_form(&url, &ActionRequest::FindDevice.form_fields())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransportError::Status {
            status: 502,
            body: String::new()
        }
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_non_json_reply_is_decode_error() {
    let (url, server) = serve_once("200 OK", "OK").await;

    let err = transport()
        .post_form(&url, &ActionRequest::FindDevice.form_fields())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        drop(stream);
    });

    let transport =
        HttpTransport::new(&ClientConfig::default().with_timeout(Duration::from_millis(200))).unwrap();
    let err = transport
        .post_form(&url, &ActionRequest::FindDevice.form_fields())
        .await
        .unwrap_err();

    assert_eq!(err, TransportError::Timeout);
    server.abort();
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = transport()
        .post_form(&url, &ActionRequest::FindDevice.form_fields())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request(_)));
}
