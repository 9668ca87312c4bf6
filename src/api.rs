use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use urlencoding::encode;

use crate::model::ActivityMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("could not read response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the message area: the server's `detail` when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Success body of the write endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// The three calls the board makes. `HttpApi` is the browser implementation.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<ActivityMap, ApiError>;
    async fn sign_up(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;
    async fn remove_participant(&self, activity: &str, email: &str)
        -> Result<ApiMessage, ApiError>;
}

pub fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

pub fn participants_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}

/// Pulls a string `detail` out of an error body, ignoring anything else.
pub fn detail_from_body(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

async fn rejected(resp: Response) -> ApiError {
    let detail = resp
        .json::<Value>()
        .await
        .ok()
        .as_ref()
        .and_then(detail_from_body);
    ApiError::Rejected {
        status: resp.status(),
        detail,
    }
}

async fn write_outcome(sent: Result<Response, gloo_net::Error>) -> Result<ApiMessage, ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(rejected(resp).await);
    }
    // The body is informational only; a 2xx with an odd body still counts.
    Ok(resp.json::<ApiMessage>().await.unwrap_or_default())
}

impl ActivityApi for HttpApi {
    async fn list_activities(&self) -> Result<ActivityMap, ApiError> {
        let resp = Request::get(&activities_url(&self.base))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(rejected(resp).await);
        }
        resp.json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        let url = signup_url(&self.base, activity, email);
        write_outcome(Request::post(&url).send().await).await
    }

    async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<ApiMessage, ApiError> {
        let url = participants_url(&self.base, activity, email);
        write_outcome(Request::delete(&url).send().await).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn urls_are_percent_encoded() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(
            signup_url("", "Chess Club", "john.doe+1@x.com"),
            "/activities/Chess%20Club/signup?email=john.doe%2B1%40x.com"
        );
        assert_eq!(
            participants_url("https://school.example", "Art & Craft/2", "a@x.com"),
            "https://school.example/activities/Art%20%26%20Craft%2F2/participants?email=a%40x.com"
        );
    }

    #[test]
    fn detail_only_taken_when_string() {
        assert_eq!(
            detail_from_body(&json!({"detail": "Custom error"})),
            Some("Custom error".to_string())
        );
        assert_eq!(detail_from_body(&json!({"detail": [{"msg": "bad"}]})), None);
        assert_eq!(detail_from_body(&json!({"message": "ok"})), None);
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let with_detail = ApiError::Rejected {
            status: 400,
            detail: Some("Custom error".into()),
        };
        let bare = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(with_detail.user_message("Signup failed"), "Custom error");
        assert_eq!(bare.user_message("Signup failed"), "Signup failed");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Removal failed"),
            "Removal failed"
        );
    }

    #[test]
    fn message_body_is_optional() {
        let m: ApiMessage = serde_json::from_str(r#"{"message": "Signed up"}"#).unwrap();
        assert_eq!(m.message.as_deref(), Some("Signed up"));
        let empty: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ApiMessage::default());
    }
}
