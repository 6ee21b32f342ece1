//! Persisted session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token's presence is the only thing deciding whether the screen starts
//! on the dashboard. It is never validated, refreshed or expired, and there
//! is no delete operation: the app has no logout.
//!
//! TRADE-OFFS
//! ==========
//! Browser persistence is best-effort. Storage failures are logged and the
//! session simply does not survive a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

/// Opaque credential issued by the auth service.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token. Empty strings are treated as "no token".
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(<{} chars>)", self.0.len())
    }
}

/// Durable key-value slot holding at most one token.
pub trait SessionStore {
    fn read(&self) -> Option<Token>;
    fn write(&self, token: &Token);
}

/// Token kept in `window.localStorage` under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn read(&self) -> Option<Token> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            Token::parse(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write(&self, token: &Token) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session for {} not persisted", self.key);
                return;
            };
            if storage.set_item(&self.key, token.as_str()).is_err() {
                log::warn!("failed to persist session under {}", self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            log::debug!("no browser storage; session for {} kept nowhere", self.key);
        }
    }
}

/// In-process store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<Token>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: Token) -> Self {
        Self { slot: RefCell::new(Some(token)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<Token> {
        self.slot.borrow().clone()
    }

    fn write(&self, token: &Token) {
        *self.slot.borrow_mut() = Some(token.clone());
    }
}
