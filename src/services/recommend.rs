//! Client for the external AI recommendation service.
//!
//! The service is strictly best-effort: every failure mode collapses into
//! [`Recommendation::Unavailable`] and the caller decides what to do with it.
//! There is no retry and no circuit breaking.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Outcome of asking the AI service for a recommendation.
#[derive(Debug)]
pub enum Recommendation {
    Ready(String),
    Unavailable(String),
}

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    daily_checkin: &'a HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RecommendReply {
    success: bool,
    #[serde(default)]
    response: Option<String>,
}

/// Ask the AI service for a recommendation based on the collapsed check-in.
/// The shared client carries the 30-second timeout.
pub async fn fetch(
    client: &reqwest::Client,
    base_url: &str,
    checkin: &HashMap<String, String>,
) -> Recommendation {
    match request(client, base_url, checkin).await {
        Ok(reply) => interpret(reply),
        Err(e) => Recommendation::Unavailable(e.to_string()),
    }
}

async fn request(
    client: &reqwest::Client,
    base_url: &str,
    checkin: &HashMap<String, String>,
) -> Result<RecommendReply, anyhow::Error> {
    let reply = client
        .post(format!("{}/recommend", base_url))
        .json(&RecommendRequest {
            daily_checkin: checkin,
        })
        .send()
        .await?;

    // Strictly 200, not any 2xx.
    let status = reply.status();
    if status != StatusCode::OK {
        anyhow::bail!("AI service returned {}", status);
    }

    Ok(reply.json::<RecommendReply>().await?)
}

fn interpret(reply: RecommendReply) -> Recommendation {
    match reply {
        RecommendReply {
            success: true,
            response: Some(text),
        } => Recommendation::Ready(text),
        RecommendReply {
            success: true,
            response: None,
        } => Recommendation::Unavailable("reply had no response text".into()),
        RecommendReply { success: false, .. } => {
            Recommendation::Unavailable("AI service reported failure".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_reply_yields_recommendation() {
        let reply: RecommendReply =
            serde_json::from_str(r#"{"success": true, "response": "Drink more water"}"#).unwrap();
        match interpret(reply) {
            Recommendation::Ready(text) => assert_eq!(text, "Drink more water"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn reported_failure_is_unavailable() {
        let reply: RecommendReply = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(interpret(reply), Recommendation::Unavailable(_)));
    }

    #[test]
    fn success_without_text_is_unavailable() {
        let reply: RecommendReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(interpret(reply), Recommendation::Unavailable(_)));
    }

    #[test]
    fn malformed_body_does_not_parse() {
        assert!(serde_json::from_str::<RecommendReply>(r#"{"success": "yes"}"#).is_err());
        assert!(serde_json::from_str::<RecommendReply>("not json").is_err());
    }

    #[test]
    fn request_body_wraps_checkin_under_daily_checkin() {
        let mut checkin = HashMap::new();
        checkin.insert("sleep".to_string(), "7h".to_string());
        let body = serde_json::to_value(RecommendRequest {
            daily_checkin: &checkin,
        })
        .unwrap();
        assert_eq!(body["daily_checkin"]["sleep"], "7h");
    }
}
