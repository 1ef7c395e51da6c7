//! Test support: a scripted transport double.
//!
//! Replays a fixed script of responses and transport failures, recording
//! every request it sees so tests can assert invocation counts and target
//! URLs.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::transport::{Transport, TransportError, TransportRequest, TransportResponse};

/// What the scripted transport does on one invocation.
pub(crate) enum Step {
    /// Return an HTTP response with this status and body.
    Respond(u16, String),
    /// Fail with a connection-level error.
    FailConnect,
    /// Fail with a TLS error.
    FailTls,
}

/// Transport double that replays a script and records what it saw.
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicU32,
    urls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Option<String>>>,
}

impl ScriptedTransport {
    pub(crate) fn new(script: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
            urls: Mutex::new(Vec::new()),
            bodies: Mutex::new(Vec::new()),
        })
    }

    /// A transport that must never be invoked.
    pub(crate) fn empty() -> Arc<Self> {
        Self::new(vec![])
    }

    /// A transport that answers one call with the given response.
    pub(crate) fn respond(status: u16, body: &str) -> Arc<Self> {
        Self::new(vec![Step::Respond(status, body.to_owned())])
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_url(&self) -> String {
        self.urls.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub(crate) fn last_body(&self) -> Option<String> {
        self.bodies.lock().unwrap().last().cloned().flatten()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        request: TransportRequest<'_>,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(request.url.to_owned());
        self.bodies.lock().unwrap().push(request.body.map(str::to_owned));

        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond(status, body)) => {
                Ok(TransportResponse { status, headers: vec![], body })
            }
            Some(Step::FailConnect) => {
                Err(TransportError::Connect("connection refused".to_owned()))
            }
            Some(Step::FailTls) => Err(TransportError::Tls("certificate has expired".to_owned())),
            None => panic!("transport invoked more times than scripted"),
        }
    }
}
