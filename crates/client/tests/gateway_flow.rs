//! Cross-layer wiring tests.
//!
//! Exercises the gateway together with the file-backed session store and
//! the navigation adapters, over a scripted transport.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use url::Url;

use lionboard::{
    AUTHORIZATION, Client, FileSessionRepository, GatewayConfig, GatewayError, Headers, Login,
    LoginInput, LoginRedirect, MemoryRouter, OutboundRequest, RequestGateway, ResponseSpec,
    RestoreSession, Session, SessionHandle, SessionStore, Transport, TransportError,
};

const LOGIN_BODY: &str = r#"{
    "ok": 1,
    "item": {
        "_id": 4,
        "name": "yong",
        "image": { "path": "files/00-board/user-yong.webp" },
        "token": { "accessToken": "A1", "refreshToken": "R1" }
    }
}"#;

/// Transport scripted per path; the last response for a path repeats.
#[derive(Clone, Default)]
struct ScriptedTransport {
    routes: Arc<Mutex<HashMap<String, VecDeque<(u16, &'static str)>>>>,
    log: Arc<Mutex<Vec<OutboundRequest>>>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self::default()
    }

    fn route(self, path: &str, responses: Vec<(u16, &'static str)>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), responses.into());
        self
    }

    fn last_for(&self, path: &str) -> OutboundRequest {
        self.log
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.path == path)
            .cloned()
            .unwrap_or_else(|| panic!("no request seen for {path}"))
    }

    fn calls(&self, path: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        _base: &Url,
        request: &OutboundRequest,
        _timeout_ms: u64,
    ) -> Result<ResponseSpec, TransportError> {
        self.log.lock().unwrap().push(request.clone());
        let mut routes = self.routes.lock().unwrap();
        let queue = routes
            .get_mut(&request.path)
            .unwrap_or_else(|| panic!("unscripted path: {}", request.path));
        let (status, body) = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            *queue.front().unwrap()
        };
        Ok(ResponseSpec::new(
            status,
            Headers::new(),
            body.as_bytes().to_vec(),
        ))
    }
}

fn config() -> GatewayConfig {
    GatewayConfig::builder(Url::parse("https://11.fesp.shop").unwrap())
        .client_id("00-board")
        .build()
}

#[tokio::test]
async fn test_login_expired_token_recovery_persists_across_layers() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(FileSessionRepository::new(dir.path()));
    let session = SessionHandle::with_store(None, repo.clone());

    let transport = ScriptedTransport::new()
        .route("/users/login", vec![(200, LOGIN_BODY)])
        .route("/posts", vec![(401, ""), (200, r#"{"ok":1}"#)])
        .route("/auth/refresh", vec![(200, r#"{"accessToken":"A2"}"#)]);
    let probe = transport.clone();

    let router = Arc::new(MemoryRouter::new());
    let prompt = Arc::new(LoginRedirect::new(router.clone(), |_from: &str| true));
    let gateway = RequestGateway::new(config(), transport, session, prompt);

    // Login establishes and persists the session.
    let logged_in = Login::new(&gateway)
        .execute(LoginInput::new("yong@gmail.com", "11111112"))
        .await
        .unwrap();
    assert_eq!(logged_in.user_id, 4);
    assert_eq!(logged_in.access_token, "A1");
    assert_eq!(
        repo.load().await.unwrap().unwrap().access_token,
        "A1"
    );

    // An expired access token recovers transparently...
    let response = gateway.send(OutboundRequest::get("/posts")).await.unwrap();
    assert!(response.is_success());
    assert_eq!(probe.calls("/auth/refresh"), 1);
    assert_eq!(
        probe.last_for("/posts").headers.get(AUTHORIZATION),
        Some("Bearer A2")
    );

    // ...and the refreshed token reaches the store, refresh token intact.
    let stored = repo.load().await.unwrap().unwrap();
    assert_eq!(stored.access_token, "A2");
    assert_eq!(stored.refresh_token, "R1");

    // Nothing prompted the user to log in again.
    assert_eq!(router.current().await.path, "/");
}

#[tokio::test]
async fn test_rejected_refresh_token_redirects_and_clears_store() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(FileSessionRepository::new(dir.path()));
    let session = SessionHandle::with_store(None, repo.clone());
    session.replace(Session::new(4, "yong", "A1", "R1")).await;

    let transport = ScriptedTransport::new()
        .route("/posts", vec![(401, "")])
        .route("/auth/refresh", vec![(401, "")]);

    let router = Arc::new(MemoryRouter::new());
    let prompt = Arc::new(LoginRedirect::new(router.clone(), |_from: &str| true));
    let gateway = RequestGateway::new(config(), transport, session, prompt);

    let error = gateway
        .send(OutboundRequest::get("/posts"))
        .await
        .unwrap_err();

    assert!(matches!(error, GatewayError::SessionExpired(_)));
    assert_eq!(error.status(), Some(401));

    // The user was moved to the login screen, with a way back.
    let current = router.current().await;
    assert_eq!(current.path, "/users/login");
    assert!(current.state.is_some());

    // Both the live session and the persisted copy are gone.
    assert!(!gateway.session().is_authenticated().await);
    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_restored_session_authenticates_next_request() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(FileSessionRepository::new(dir.path()));
    repo.save(&Session::new(4, "yong", "A9", "R9")).await.unwrap();

    let session = SessionHandle::with_store(None, repo);
    let transport = ScriptedTransport::new().route("/posts", vec![(200, r#"{"ok":1}"#)]);
    let probe = transport.clone();

    let router = Arc::new(MemoryRouter::new());
    let prompt = Arc::new(LoginRedirect::new(router, |_from: &str| false));
    let gateway = RequestGateway::new(config(), transport, session, prompt);

    let restored = RestoreSession::new(gateway.session())
        .execute()
        .await
        .unwrap();
    assert_eq!(restored.unwrap().access_token, "A9");

    gateway.send(OutboundRequest::get("/posts")).await.unwrap();
    assert_eq!(
        probe.last_for("/posts").headers.get(AUTHORIZATION),
        Some("Bearer A9")
    );
}

#[tokio::test]
async fn test_builder_smoke() {
    let client = Client::builder("https://11.fesp.shop")
        .unwrap()
        .client_id("00-board")
        .in_memory_session()
        .confirm_with(|_from: &str| false)
        .build()
        .unwrap();

    assert!(client.session().await.is_none());
    assert_eq!(client.router().current().await.path, "/");
    assert_eq!(client.gateway().config().timeout_ms, 15_000);
}

#[test]
fn test_builder_rejects_invalid_base_address() {
    assert!(Client::builder("not a url").is_err());
}
