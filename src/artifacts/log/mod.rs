use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, Utc};
use derive_new::new;

/// One commit in the history walk, newest first.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    pub id: ObjectId,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    /// Timestamp formatted the way the log output shows it.
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }
}
