use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the stub service.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process HTTP service that records every request and answers each one
/// with the same canned response.
pub struct StubService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    task: JoinHandle<()>,
}

impl StubService {
    pub async fn json(status: StatusCode, reply: Value) -> Self {
        Self::raw(status, reply.to_string()).await
    }

    pub async fn raw(status: StatusCode, reply: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status,
            reply: reply.into(),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(record).with_state(stub);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/", addr),
            requests,
            task,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request received so far.
    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

impl Drop for StubService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body).unwrap())
    };
    stub.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_owned(),
        body,
    });

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.reply,
    )
}

/// An address nothing is listening on.
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
