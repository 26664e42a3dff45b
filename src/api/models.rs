use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role constants understood by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleType {
    #[serde(rename = "USER_ROLE")]
    UserRole,
    #[serde(rename = "MASTER_ADMIN_ROLE")]
    MasterAdminRole,
}

/// Body of a login submission.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a registration submission. Built from the create form with `role`
/// fixed to `USER_ROLE` and `enabled` false; activation happens backend-side.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: RoleType,
    pub enabled: bool,
}

/// User representation returned by the upsert endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: RoleType,
    pub enabled: bool,
    #[serde(default)]
    pub token: Option<String>,
}

/// Message-and-token shape returned by the login and token endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GenericMessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Readable summary of a response body for the success log line, falling
/// back to the raw JSON when the shape is not recognized.
#[must_use]
pub fn describe_response(body: &Value) -> String {
    if let Ok(user) = serde_json::from_value::<UserDto>(body.clone()) {
        format!(
            "user {} ({}) upserted, enabled: {}",
            user.user_name, user.email, user.enabled
        )
    } else if let Ok(response) = serde_json::from_value::<GenericMessageResponse>(body.clone()) {
        match response.message {
            Some(message) => message,
            None => body.to_string(),
        }
    } else {
        body.to_string()
    }
}
