use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The authenticated identity, created on login and held until logout.
/// Field names serialize in camelCase to stay compatible with previously
/// persisted session payloads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub access_code: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl User {
    /// Ids are derived from the login instant, one session at a time.
    pub fn new(username: &str, email: &str, access_code: &str) -> Self {
        User {
            id: format!("user-{}", Utc::now().timestamp_millis()),
            username: username.to_string(),
            email: email.to_string(),
            access_code: access_code.to_string(),
            role: Role::User,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("alice", "alice@example.com", "EDU-7K9D-2X3F");

        assert!(user.id.starts_with("user-"));
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.access_code, "EDU-7K9D-2X3F");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn user_serializes_with_camel_case_keys() {
        let user = User::new("alice", "alice@example.com", "EDU-7K9D-2X3F");
        let json = serde_json::to_string(&user).expect("user should serialize");

        assert!(json.contains("\"accessCode\""));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn user_round_trip_serialization() {
        let user = User::new("alice", "alice@example.com", "EDU-7K9D-2X3F");

        let json = serde_json::to_string(&user).expect("user should serialize");
        let parsed: User = serde_json::from_str(&json).expect("user should deserialize");

        assert_eq!(user, parsed);
    }

    #[test]
    fn user_deserializes_without_role_field() {
        let json = r#"{
            "id": "user-1700000000000",
            "username": "bob",
            "email": "bob@example.com",
            "accessCode": "EDU-Z4LQ-8W1N"
        }"#;

        let parsed: User = serde_json::from_str(json).expect("user should deserialize");
        assert_eq!(parsed.role, Role::User);
    }
}
