//! Wire types for the `/api/chat` endpoint.

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Request body of one chat exchange.
#[derive(Clone, Serialize)]
pub struct ChatRequest {
    pub developer_message: String,
    pub user_message: String,
    pub api_key: String,
}

// The access key must never reach logs, so Debug renders it redacted.
impl fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatRequest")
            .field("developer_message", &self.developer_message)
            .field("user_message", &self.user_message)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Error payload an unsuccessful response may carry.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Extracts the error text for a non-2xx response: the `detail` field when
/// the body parses, a generic status line otherwise.
pub fn failure_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error_body| error_body.detail)
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_detail_prefers_the_detail_field() {
        let detail = failure_detail(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"bad key"}"#);

        assert_eq!(detail, "bad key");
    }

    #[test]
    fn failure_detail_falls_back_on_unparseable_body() {
        let detail = failure_detail(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");

        assert!(detail.contains("HTTP error!"));
        assert!(detail.contains("500"));
    }

    #[test]
    fn failure_detail_falls_back_when_detail_is_missing() {
        let detail = failure_detail(StatusCode::BAD_GATEWAY, r#"{"other":"field"}"#);

        assert!(detail.contains("502"));
    }

    #[test]
    fn debug_output_redacts_the_access_key() {
        let request = ChatRequest {
            developer_message: "directive".to_owned(),
            user_message: "hello".to_owned(),
            api_key: "sk-very-secret".to_owned(),
        };

        let rendered = format!("{request:?}");

        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
