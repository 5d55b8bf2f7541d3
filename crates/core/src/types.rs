use serde::{Deserialize, Serialize};

/// Identity record returned by the auth service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    pub email: String,
    pub username: String,
}

impl User {
    /// The placeholder identity used when nobody is signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Check whether this is the empty placeholder record
    pub fn is_anonymous(&self) -> bool {
        self.uuid.is_empty() && self.email.is_empty() && self.username.is_empty()
    }
}

/// Bearer credentials issued on login or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime in seconds, used only as the cookie max-age
    pub expires_in: i64,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body returned by `/auth/login` and `/auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: TokenPair,
    pub user: User,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_response_deserializes_service_payload() {
        let body = json!({
            "token": {
                "access_token": "abc",
                "refresh_token": "def",
                "expires_in": 3600,
                "token_type": "bearer"
            },
            "user": {"uuid": "1", "email": "a@b.com", "username": "a"}
        });

        let response: AuthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.token.access_token, "abc");
        assert_eq!(response.token.expires_in, 3600);
        assert_eq!(response.user.username, "a");
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: TokenPair = serde_json::from_value(json!({
            "access_token": "abc",
            "refresh_token": "def",
            "expires_in": 60
        }))
        .unwrap();
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_anonymous_user() {
        assert!(User::anonymous().is_anonymous());

        let user = User {
            uuid: "1".to_string(),
            email: String::new(),
            username: String::new(),
        };
        assert!(!user.is_anonymous());
    }

    #[test]
    fn test_register_request_field_names() {
        let request = RegisterRequest {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "password1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["username"], "reader");
        assert_eq!(value["email"], "reader@example.com");
        assert_eq!(value["password"], "password1");
    }
}
