//! HTTP adapter tests against a canned local server.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use catalog_seeder::{
    CatalogApi, CatalogApiError, CategoryCreation, CategorySeed, Collection, HttpCatalogApi,
    Price, ProductSeed, UserSeed,
};
use reqwest::Url;
use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request as seen by the stub server.
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    body: String,
}

/// Canned reply for every request the stub receives.
#[derive(Debug, Clone, Copy)]
struct Reply {
    status: &'static str,
    body: &'static str,
}

struct StubServer {
    base_url: Url,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                serve(stream, reply, &recorded).await;
            }
        });
        Self {
            base_url: Url::parse(&format!("http://{addr}/api")).expect("stub url"),
            requests,
        }
    }

    fn api(&self) -> HttpCatalogApi {
        HttpCatalogApi::new(self.base_url.clone(), Duration::from_secs(5)).expect("client builds")
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

async fn serve(mut stream: TcpStream, reply: Reply, recorded: &Mutex<Vec<Recorded>>) {
    let mut raw = Vec::new();
    let mut chunk = [0_u8; 1024];
    let header_end = loop {
        let read = stream.read(&mut chunk).await.expect("read request");
        raw.extend(chunk.iter().take(read));
        if let Some(pos) = find_header_end(&raw) {
            break pos;
        }
        assert!(read > 0, "client closed before sending headers");
    };
    let head = String::from_utf8_lossy(raw.get(..header_end).expect("head")).into_owned();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while raw.len() < header_end + 4 + content_length {
        let read = stream.read(&mut chunk).await.expect("read body");
        assert!(read > 0, "client closed mid-body");
        raw.extend(chunk.iter().take(read));
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_owned();
    let path = request_line.next().unwrap_or_default().to_owned();
    let body = String::from_utf8_lossy(raw.get(header_end + 4..).expect("body")).into_owned();
    recorded
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Recorded { method, path, body });

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    stream
        .write_all(response.as_bytes())
        .await
        .expect("write response");
    stream.shutdown().await.expect("shutdown");
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

const OK_EMPTY_LIST: Reply = Reply {
    status: "200 OK",
    body: "[]",
};

#[tokio::test]
async fn probe_reads_product_listing() {
    let server = StubServer::start(OK_EMPTY_LIST).await;

    server.api().probe().await.expect("probe succeeds");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = requests.first().expect("one request");
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/products/all");
}

#[rstest]
#[case(Collection::Users, "/api/users")]
#[case(Collection::Categories, "/api/categories")]
#[case(Collection::Products, "/api/products/all")]
#[tokio::test]
async fn count_uses_listing_length(#[case] collection: Collection, #[case] path: &str) {
    let server = StubServer::start(Reply {
        status: "200 OK",
        body: r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#,
    })
    .await;

    let count = server.api().count(collection).await.expect("count");

    assert_eq!(count, 3);
    assert_eq!(server.requests().first().expect("request").path, path);
}

#[tokio::test]
async fn create_user_posts_json_and_decodes_record() {
    let server = StubServer::start(Reply {
        status: "201 Created",
        body: r#"{"id": 41, "name": "Ana Martínez", "email": "ana.martinez@email.com"}"#,
    })
    .await;
    let seed = UserSeed {
        name: "Ana Martínez",
        email: "ana.martinez@email.com",
        password: "password123",
    };

    let user = server.api().create_user(&seed).await.expect("user created");

    assert_eq!(user.id, 41);
    let request = server.requests().first().cloned().expect("request");
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/users");
    let sent: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(sent["email"], "ana.martinez@email.com");
    assert_eq!(sent["password"], "password123");
}

#[tokio::test]
async fn category_without_body_is_unidentified() {
    let server = StubServer::start(Reply {
        status: "201 Created",
        body: "",
    })
    .await;
    let seed = CategorySeed {
        name: "Audio",
        description: "Audífonos, bocinas y equipos de sonido",
    };

    let creation = server.api().create_category(&seed).await.expect("accepted");

    assert_eq!(creation, CategoryCreation::Unidentified);
}

#[tokio::test]
async fn product_payload_uses_camel_case_fields() {
    let server = StubServer::start(Reply {
        status: "200 OK",
        body: "{}",
    })
    .await;
    let product = ProductSeed {
        name: "Monitor Ultra 12".to_owned(),
        price: Price::from_cents(129_999),
        description: "desc".to_owned(),
        user_id: 3,
        category_ids: vec![4, 9],
    };

    server
        .api()
        .create_product(&product)
        .await
        .expect("product created");

    let request = server.requests().first().cloned().expect("request");
    let sent: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(request.path, "/api/products");
    assert_eq!(sent["userId"], 3);
    assert_eq!(sent["categoryIds"], serde_json::json!([4, 9]));
    assert_eq!(sent["price"], serde_json::json!(1299.99));
}

#[tokio::test]
async fn rejected_product_reports_status_and_body() {
    let server = StubServer::start(Reply {
        status: "400 Bad Request",
        body: r#"{"message": "price out of range"}"#,
    })
    .await;
    let product = ProductSeed {
        name: "Mouse Pro 1".to_owned(),
        price: Price::MIN,
        description: "desc".to_owned(),
        user_id: 1,
        category_ids: vec![1, 2],
    };

    let error = server
        .api()
        .create_product(&product)
        .await
        .expect_err("400 is rejected");

    assert_eq!(
        error,
        CatalogApiError::unexpected_status(400_u16, r#"{"message": "price out of range"}"#)
    );
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/api")).expect("url");
    let api = HttpCatalogApi::new(url, Duration::from_secs(5)).expect("client builds");

    let error = api.probe().await.expect_err("nothing listens");

    assert!(matches!(error, CatalogApiError::Transport { .. }), "{error:?}");
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    let url = Url::parse(&format!("http://{addr}/api")).expect("url");
    let api = HttpCatalogApi::new(url, Duration::from_millis(200)).expect("client builds");

    let error = api.probe().await.expect_err("no response arrives");

    assert!(matches!(error, CatalogApiError::Timeout { .. }), "{error:?}");
}
