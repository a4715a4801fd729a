use crate::types::session::{Exchange, Session};
use std::collections::HashMap;

/// In-memory session store. Lives for the process lifetime; callers hold
/// it behind the `AppState` lock, so methods take plain `&self`/`&mut self`.
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_or_create(&mut self, id: &str) -> &mut Session {
        self.sessions
            .entry(id.to_string())
            .or_insert_with(|| Session::new(id))
    }

    pub fn append(&mut self, id: &str, exchange: Exchange) {
        self.get_or_create(id).add_exchange(exchange);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::Mode;
    use chrono::Utc;

    fn exchange(message: &str) -> Exchange {
        Exchange {
            timestamp: Utc::now(),
            mode: Mode::Chat,
            message: message.to_string(),
            response: message.to_uppercase(),
        }
    }

    #[test]
    fn unknown_session_is_absent() {
        let store = SessionStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn append_creates_session_lazily() {
        let mut store = SessionStore::new();
        store.append("s1", exchange("hello"));

        let session = store.get("s1").unwrap();
        assert_eq!(session.id, "s1");
        assert_eq!(session.exchanges.len(), 1);
    }

    #[test]
    fn appends_accumulate_in_call_order() {
        let mut store = SessionStore::new();
        store.append("s1", exchange("one"));
        store.append("s1", exchange("two"));
        store.append("s2", exchange("other"));

        let history: Vec<_> = store
            .get("s1")
            .unwrap()
            .exchanges
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(history, ["one", "two"]);
        assert_eq!(store.get("s2").unwrap().exchanges.len(), 1);
    }
}
