// ============================================================================
// TESTING - Scripted transport and wiring helpers for unit tests
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::api_client::ApiClient;
use crate::services::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::state::notification::{ManualTimers, Notification};
use crate::state::session_state::SessionState;
use crate::utils::storage::MemoryStore;

struct Scripted {
    result: Result<HttpResponse, TransportError>,
    /// Times the request yields to the executor before answering
    yields: usize,
}

/// Records every request and answers from a queue of scripted responses.
/// An empty queue answers `200 {}`.
#[derive(Default)]
pub struct FakeTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: Value) {
        self.reply_after(status, body, 0);
    }

    /// Reply only after yielding `yields` times, to interleave requests
    pub fn reply_after(&self, status: u16, body: Value, yields: usize) {
        self.script.borrow_mut().push_back(Scripted {
            result: Ok(HttpResponse { status, body: body.to_string() }),
            yields,
        });
    }

    pub fn fail(&self, reason: &str) {
        self.script.borrow_mut().push_back(Scripted {
            result: Err(TransportError(reason.to_string())),
            yields: 0,
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        let scripted = next.unwrap_or(Scripted {
            result: Ok(HttpResponse { status: 200, body: "{}".to_string() }),
            yields: 0,
        });
        for _ in 0..scripted.yields {
            tokio::task::yield_now().await;
        }
        scripted.result
    }
}

pub fn test_session(token: Option<&str>) -> Rc<SessionState> {
    let store = match token {
        Some(token) => MemoryStore::with_entry("token", token),
        None => MemoryStore::new(),
    };
    Rc::new(SessionState::restore(Rc::new(store), "token"))
}

pub fn test_client(transport: Rc<FakeTransport>, token: Option<&str>) -> ApiClient {
    ApiClient::new(Rc::new(AppConfig::default()), transport, test_session(token))
}

/// Client, notification slot and manual clock sharing one fake transport
pub struct Harness {
    pub transport: Rc<FakeTransport>,
    pub client: ApiClient,
    pub timers: Rc<ManualTimers>,
    pub notification: Rc<Notification>,
}

impl Harness {
    pub fn signed_in() -> Self {
        let transport = Rc::new(FakeTransport::new());
        let client = test_client(transport.clone(), Some("tok"));
        let timers = Rc::new(ManualTimers::new());
        let notification = Rc::new(Notification::new(timers.clone(), 4000));
        Self { transport, client, timers, notification }
    }

    pub fn message(&self) -> Option<String> {
        self.notification.current().filter(|n| n.visible).map(|n| n.message)
    }
}

/// Signed-in app context over `transport`, with a manual clock
pub fn test_context(transport: Rc<FakeTransport>) -> crate::app::AppContext {
    crate::app::AppContext::new(
        AppConfig::default(),
        Rc::new(MemoryStore::with_entry("token", "tok")),
        transport,
        Rc::new(ManualTimers::new()),
    )
}

/// Message currently on screen
pub fn shown(ctx: &crate::app::AppContext) -> Option<String> {
    ctx.notification.current().filter(|n| n.visible).map(|n| n.message)
}
