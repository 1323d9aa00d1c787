//! # Session Store
//!
//! Port for the external key-value store that holds session records.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            SessionStore (trait)              │
//! │  ├── lookup()      one GET, no retry         │
//! │  ├── ping()        startup health check      │
//! │  └── backend_name()                          │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴────────┐       ┌────────┴───────┐
//!  │RedisSession    │       │MemorySession   │
//!  │  Store         │       │  Store (fake)  │
//!  └────────────────┘       └────────────────┘
//! ```

use crate::error::{GatewayError, GatewayResult};
use crate::session::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Outcome of a single session lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLookup {
    /// Raw record text as held by the store
    Found(String),
    /// No record under that id
    NotFound,
    /// The store could not answer
    TransportError(String),
}

impl SessionLookup {
    /// Collapse into a result, treating absence as an unauthorized session
    pub fn into_record(self, session_id: &str) -> GatewayResult<String> {
        match self {
            SessionLookup::Found(raw) => Ok(raw),
            SessionLookup::NotFound => Err(GatewayError::SessionNotFound {
                session_id: session_id.to_string(),
            }),
            SessionLookup::TransportError(detail) => Err(GatewayError::Store(detail)),
        }
    }
}

/// Read access to session records.
///
/// Implementations must be safe to share across concurrent requests; callers
/// add no locking of their own.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the raw record for `session_id`. Exactly one round trip.
    async fn lookup(&self, session_id: &str) -> SessionLookup;

    /// Connectivity check, returns the store's reply (e.g. "PONG").
    async fn ping(&self) -> GatewayResult<String>;

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}

/// Shared, dynamically dispatched store handle
pub type BoxedSessionStore = Arc<dyn SessionStore>;

/// In-process store for tests and local runs
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    records: RwLock<HashMap<String, String>>,
    failure: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw record verbatim
    pub fn insert_raw(&self, session_id: impl Into<String>, raw: impl Into<String>) {
        if let Ok(mut records) = self.records.write() {
            records.insert(session_id.into(), raw.into());
        }
    }

    /// Store a session under its own id
    pub fn insert(&self, session: &Session) -> GatewayResult<()> {
        let raw = session.to_record()?;
        self.insert_raw(session.id.clone(), raw);
        Ok(())
    }

    /// Remove a record, returning whether it existed
    pub fn remove(&self, session_id: &str) -> bool {
        self.records
            .write()
            .map(|mut records| records.remove(session_id).is_some())
            .unwrap_or(false)
    }

    /// Make every call fail as if the store were unreachable
    pub fn fail_with(&self, detail: impl Into<String>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = Some(detail.into());
        }
    }

    /// Undo `fail_with`
    pub fn recover(&self) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = None;
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn current_failure(&self) -> Option<String> {
        match self.failure.read() {
            Ok(failure) => failure.clone(),
            Err(e) => Some(format!("memory store lock poisoned: {}", e)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn lookup(&self, session_id: &str) -> SessionLookup {
        if let Some(detail) = self.current_failure() {
            return SessionLookup::TransportError(detail);
        }

        match self.records.read() {
            Ok(records) => match records.get(session_id) {
                Some(raw) => SessionLookup::Found(raw.clone()),
                None => SessionLookup::NotFound,
            },
            Err(e) => SessionLookup::TransportError(format!("memory store lock poisoned: {}", e)),
        }
    }

    async fn ping(&self) -> GatewayResult<String> {
        match self.current_failure() {
            Some(detail) => Err(GatewayError::Store(detail)),
            None => Ok("PONG".to_string()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
