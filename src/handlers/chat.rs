use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::chat::{ChatMessage, RecentMessagesResponse};
use crate::AppState;

/// The 10 most recent chat lines across all sessions, oldest first.
///
/// TODO: scope by user once the auth subsystem threads a user id through
/// (the schema already implies per-user history).
pub async fn recent_messages(
    State(state): State<AppState>,
) -> AppResult<Json<RecentMessagesResponse>> {
    let mut messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT
            che.sequence_number,
            che.user_or_benny,
            che.entry_text,
            ch.date
        FROM chat_history_entries che
        JOIN chat_history ch ON che.fk_row_id = ch.row_id
        ORDER BY ch.date DESC, che.sequence_number DESC
        LIMIT 10
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    sort_chronological(&mut messages);

    Ok(Json(RecentMessagesResponse {
        success: true,
        messages,
    }))
}

/// The window is selected newest-first; re-sort so the client renders oldest
/// to newest even when the window spans more than one session day.
fn sort_chronological(messages: &mut [ChatMessage]) {
    messages.sort_by(|a, b| (a.date, a.sequence_number).cmp(&(b.date, b.sequence_number)));
}
