//! Request and response bodies of the TaskMan API
//!
//! Responses are decoded into these types before anything reaches the board
//! store, so a body of the wrong shape fails at the client boundary.

use serde::{Deserialize, Serialize};

/// `POST /login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /register`
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /boards` and `PUT /boards/:id`
#[derive(Debug, Serialize)]
pub struct BoardTitleRequest<'a> {
    pub title: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Wrapper around every `{"data": ...}` body.
///
/// List endpoints also report whether the answer came from the server's
/// cache in `source`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub source: Option<String>,
}

/// The part of a created resource the client needs: its server-assigned id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedId {
    #[serde(rename = "ID")]
    pub id: u64,
}

/// Standard API error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taskman_core::Board;

    #[test]
    fn test_created_id_ignores_other_fields() {
        let body: DataEnvelope<CreatedId> = serde_json::from_value(json!({
            "data": {"ID": 12, "Title": "Buy milk", "BoardID": 1, "Status": "todo"}
        }))
        .unwrap();
        assert_eq!(body.data.id, 12);
        assert!(body.source.is_none());
    }

    #[test]
    fn test_created_id_requires_id() {
        let result = serde_json::from_value::<DataEnvelope<CreatedId>>(json!({
            "data": {"Title": "no id"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_envelope_with_null_data() {
        let body: DataEnvelope<Option<Vec<Board>>> =
            serde_json::from_value(json!({"data": null, "source": "db"})).unwrap();
        assert!(body.data.is_none());
        assert_eq!(body.source.as_deref(), Some("db"));
    }

    #[test]
    fn test_login_request_shape() {
        let body = LoginRequest {
            email: "ada@example.com",
            password: "hunter2",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"email": "ada@example.com", "password": "hunter2"})
        );
    }
}
