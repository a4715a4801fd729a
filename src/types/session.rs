//! Session history types

use crate::types::message::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded message/response pair. Append-only: exchanges are never
/// mutated or reordered once stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exchange {
    pub timestamp: DateTime<Utc>,
    pub mode: Mode,
    pub message: String,
    pub response: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub exchanges: Vec<Exchange>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            exchanges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_exchange(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
        self.updated_at = Utc::now();
    }
}
