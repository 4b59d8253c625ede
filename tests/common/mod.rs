// Throwaway Graph API stand-in served by axum on a background runtime. Each
// request is recorded (path plus decoded form) before the scripted reply is
// computed, so tests can count calls per path.

#![allow(dead_code)]

use axum::extract::{Form, State};
use axum::http::{header, StatusCode, Uri};
use axum::Router;
use ig_publish::Config;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Hit {
    pub path: String,
    pub form: HashMap<String, String>,
}

type Reply = Box<dyn Fn(&Hit) -> (u16, String) + Send + Sync>;

struct Shared {
    hits: Mutex<Vec<Hit>>,
    reply: Reply,
}

pub struct MockServer {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl MockServer {
    /// Bind `127.0.0.1:0` and serve every POST through `reply`. The handler
    /// runs on a blocking thread, so it may sleep to simulate a slow platform.
    pub fn spawn<F>(reply: F) -> MockServer
    where
        F: Fn(&Hit) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let shared = Arc::new(Shared {
            hits: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        });
        let app = Router::new().fallback(record).with_state(shared.clone());

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        MockServer { base_url, shared }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.shared.hits.lock().unwrap().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.hits().iter().filter(|h| h.path == path).count()
    }

    pub fn config(&self) -> Config {
        config_for(&self.base_url)
    }
}

async fn record(
    State(shared): State<Arc<Shared>>,
    uri: Uri,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let hit = Hit {
        path: uri.path().to_string(),
        form,
    };
    shared.hits.lock().unwrap().push(hit.clone());

    let (status, body) = tokio::task::spawn_blocking(move || (shared.reply)(&hit))
        .await
        .unwrap();
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        account_id: "42".into(),
        access_token: "test-token".into(),
        api_base_url: base_url.into(),
        image_url: None,
        caption: None,
        timeout: Duration::from_secs(5),
    }
}
