//! JSON request and response bodies of the simple (non-multipart) calls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of respond/invite/accept/reject: the user on the other side, or the
/// acting user for accept/reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetterRequest {
    #[serde(rename = "getterID")]
    pub getter_id: String,
}

/// Body of the favorites add/remove calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabOrderRequest {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "tabType")]
    pub tab_type: String,
}
