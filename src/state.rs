use actix::Addr;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Session;
use crate::websocket::BoardSocket;

/// Application state shared between connections.
///
/// `session` is the one authoritative game. Every inbound event
/// (connect, disconnect, move) takes the lock, runs its mutation to
/// completion, and releases it before the next event is handled; the
/// lock is the single-writer contract for the session.
pub struct AppState {
    pub session: Mutex<Session>,

    /// Live socket addresses by connection id, used for broadcasts.
    pub sockets: Mutex<HashMap<String, Addr<BoardSocket>>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            session: Mutex::new(Session::new()),
            sockets: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
