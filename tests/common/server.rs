//! Fake Zotero local server built on `tiny_http`.
//!
//! Routes are `(method, path) -> (status, body)`. Every request is recorded
//! so tests can assert what the CLI sent.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tiny_http::{Header, Method, Response, Server};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Default)]
pub struct FakeZoteroBuilder {
    routes: HashMap<(String, String), (u16, String)>,
}

impl FakeZoteroBuilder {
    pub fn get(mut self, path: &str, body: &str) -> Self {
        self.routes
            .insert(("GET".into(), path.into()), (200, body.to_string()));
        self
    }

    pub fn post(mut self, path: &str, body: &str) -> Self {
        self.routes
            .insert(("POST".into(), path.into()), (200, body.to_string()));
        self
    }

    pub fn status(mut self, method: &str, path: &str, status: u16) -> Self {
        self.routes
            .insert((method.into(), path.into()), (status, "{}".to_string()));
        self
    }

    pub fn start(self) -> FakeZotero {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind fake Zotero"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("fake Zotero listens on IP")
            .port();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let routes = self.routes;
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let method = match request.method() {
                        Method::Get => "GET",
                        Method::Post => "POST",
                        _ => "OTHER",
                    }
                    .to_string();
                    let path = request.url().split('?').next().unwrap_or("").to_string();

                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    requests.lock().unwrap().push(RecordedRequest {
                        method: method.clone(),
                        path: path.clone(),
                        body,
                    });

                    let (status, body) = routes
                        .get(&(method, path))
                        .cloned()
                        .unwrap_or((404, r#"{"error":"Not found"}"#.to_string()));
                    let header =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap();
                    let response = Response::from_string(body)
                        .with_status_code(status)
                        .with_header(header);
                    let _ = request.respond(response);
                }
            })
        };

        FakeZotero {
            server,
            port,
            requests,
            handle: Some(handle),
        }
    }
}

pub struct FakeZotero {
    server: Arc<Server>,
    pub port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeZotero {
    pub fn builder() -> FakeZoteroBuilder {
        FakeZoteroBuilder::default()
    }

    pub fn port_arg(&self) -> String {
        self.port.to_string()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

impl Drop for FakeZotero {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A port with nothing listening on it.
pub fn closed_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
