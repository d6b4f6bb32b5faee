use assert_cmd::Command;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Bytes every successful compile returns.
pub const DOCUMENT: &[u8] = b"%PDF-1.7\n\x00\x01\x02\xff mock document\n%%EOF\n";

/// One request as seen by the mock service.
#[derive(Debug, Clone)]
pub struct Captured {
    pub endpoint: &'static str,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn body_contains(&self, needle: &str) -> bool {
        self.position(needle).is_some()
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.body
            .windows(needle.len())
            .position(|w| w == needle.as_bytes())
    }
}

type Requests = Arc<Mutex<Vec<Captured>>>;

/// In-process stand-in for the document service.
pub struct MockService {
    pub url: String,
    requests: Requests,
}

impl MockService {
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock service");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let url = format!("http://{}", listener.local_addr().expect("mock address"));
        let requests: Requests = Arc::default();
        let state = Arc::clone(&requests);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock runtime");
            rt.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                let app = Router::new()
                    .route("/compile", post(compile))
                    .route("/vars", post(vars))
                    .with_state(state);
                axum::serve(listener, app).await.expect("mock service");
            });
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().expect("requests lock").clone()
    }
}

async fn compile(
    State(requests): State<Requests>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let bogus = query.get("format").is_some_and(|f| f == "bogus");
    requests.lock().expect("requests lock").push(Captured {
        endpoint: "compile",
        query,
        body: body.to_vec(),
    });
    if bogus {
        return (StatusCode::BAD_REQUEST, "unsupported format bogus").into_response();
    }
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        DOCUMENT,
    )
        .into_response()
}

async fn vars(
    State(requests): State<Requests>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let listing = match query.get("prefix").map(String::as_str) {
        Some("input.") => r#"["input.name","input.age"]"#,
        _ => r#"["input.name","input.age","meta.title"]"#,
    };
    requests.lock().expect("requests lock").push(Captured {
        endpoint: "vars",
        query,
        body: body.to_vec(),
    });
    (
        [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
        listing,
    )
        .into_response()
}

/// A scratch directory with a template, a data file and an asset tree.
pub struct Fixture {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();

        fs::write(root.join("tmpl.odt"), b"fake odt template").expect("write template");
        fs::write(
            root.join("data.json"),
            serde_json::json!({"input": {"name": "Ada"}}).to_string(),
        )
        .expect("write data");
        fs::create_dir_all(root.join("img/sub")).expect("create asset dirs");
        fs::write(root.join("img/a.png"), b"png a").expect("write asset");
        fs::write(root.join("img/sub/b.png"), b"png b").expect("write asset");
        fs::write(root.join("logo.jpg"), b"jpg").expect("write asset");

        Self { _tmp: tmp, root }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("doccli").expect("doccli binary");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }
}

pub fn read(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}
