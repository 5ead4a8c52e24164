use person_registry::{Gender, HttpPersonApi, NewPerson, PersonApi, RegistryConfig, RegistryError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve a single canned response; the task yields the raw request text
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (HttpPersonApi, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (api_for(&format!("http://{addr}")), handle)
}

fn api_for(base_url: &str) -> HttpPersonApi {
    HttpPersonApi::new(&RegistryConfig::default().with_api_base_url(base_url)).unwrap()
}

/// Read one request: headers plus a `Content-Length` body
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn asha() -> NewPerson {
    NewPerson {
        mobile_number: Some("9876543210".to_string()),
        ..NewPerson::new("Asha Rao", 30, Gender::Female)
    }
}

#[tokio::test]
async fn test_list_persons_decodes_array() {
    let (api, server) = serve_once(
        "200 OK",
        r#"[{"id":1,"name":"Asha Rao","age":"30","gender":"female"},{"name":"undefined"}]"#,
    )
    .await;

    let records = api.list_persons().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name.as_deref(), Some("Asha Rao"));
    assert_eq!(records[0].age, Some(30));
    assert_eq!(records[1].name, None);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /person/ HTTP/1.1\r\n"), "{request}");
}

#[tokio::test]
async fn test_create_person_posts_json() {
    let (api, server) = serve_once("201 Created", "").await;

    api.create_person(&asha()).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /person HTTP/1.1\r\n"), "{request}");
    assert!(request.to_lowercase().contains("content-type: application/json"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["name"], "Asha Rao");
    assert_eq!(json["age"], 30);
    assert_eq!(json["gender"], "female");
    assert_eq!(json["mobileNumber"], "9876543210");
    assert!(json.get("govtId").is_none());
}

#[tokio::test]
async fn test_conflict_carries_server_message() {
    let (api, server) = serve_once("409 Conflict", "Mobile number already registered").await;

    let err = api.create_person(&asha()).await.unwrap_err();
    assert!(matches!(
        &err,
        RegistryError::Api { status: 409, message } if message == "Mobile number already registered"
    ));
    assert_eq!(err.user_message(), "Mobile number already registered");
    server.await.unwrap();
}

#[tokio::test]
async fn test_server_error_without_body() {
    let (api, server) = serve_once("500 Internal Server Error", "").await;

    let err = api.create_person(&asha()).await.unwrap_err();
    assert!(matches!(err, RegistryError::Api { status: 500, .. }));
    assert_eq!(err.user_message(), "Register failed due to network issue");
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_listing_is_a_decode_error() {
    let (api, server) = serve_once("200 OK", r#"{"not":"an array"#).await;

    let err = api.list_persons().await.unwrap_err();
    assert!(matches!(err, RegistryError::Decode(_)), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn test_refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = api_for(&format!("http://{addr}"))
        .create_person(&asha())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Http(_)), "{err:?}");
    assert_eq!(err.user_message(), "Register failed due to network issue");
}
