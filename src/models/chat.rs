use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A single chat line, joined to its session row for the date.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChatMessage {
    pub sequence_number: i32,
    pub user_or_benny: String,
    pub entry_text: String,
    pub date: NaiveDate,
}

/// GET /api/chat/recent response
#[derive(Debug, Serialize)]
pub struct RecentMessagesResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}
