use serde::Serialize;

/// `to` target that makes a message visible to every viewer.
pub const BROADCAST: &str = "Todos";

pub const KIND_MESSAGE: &str = "message";
pub const KIND_PRIVATE: &str = "private_message";
pub const KIND_STATUS: &str = "status";

/// Room notices emitted when someone enters or is evicted.
pub const JOIN_TEXT: &str = "entra na sala...";
pub const LEAVE_TEXT: &str = "sai da sala...";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Participant {
    pub name: String,
    /// Millisecond timestamp of the last registration or ping.
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: String,
    #[serde(rename = "from")]
    pub sender: String,
    #[serde(rename = "to")]
    pub recipient: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Wall-clock `HH:mm:ss` at insertion (or last edit).
    pub time: String,
}
