use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// One answered question from the daily check-in form. Only the
/// `category` -> `response` pair survives into storage.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckInResponse {
    // Any category string is accepted, including empty; unknown categories
    // are echoed back but dropped from the persisted row.
    #[validate(length(max = 100, message = "Category must be under 100 characters"))]
    pub category: String,

    #[validate(length(max = 1000, message = "Question must be under 1000 characters"))]
    pub question: String,

    #[validate(length(max = 5000, message = "Response must be under 5000 characters"))]
    pub response: String,
}

/// POST /api/checkin/submit body
#[derive(Debug, Deserialize, Validate)]
pub struct CheckInSubmission {
    #[validate]
    pub responses: Vec<CheckInResponse>,
}

/// Response for POST /api/checkin/submit. `recommendation` is null whenever
/// the AI service could not produce one; the submission still succeeds.
#[derive(Debug, Serialize)]
pub struct CheckInAck {
    pub success: bool,
    pub message: String,
    pub data: HashMap<String, String>,
    pub recommendation: Option<String>,
}
