use secrecy::SecretString;
use serde::Deserialize;
use validator::Validate;

/// Login form input. The password travels as a `SecretString` so it can
/// neither be logged nor re-serialized; no credential store exists and the
/// access code is the whole gate.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 50))]
    pub username: String,

    pub password: SecretString,

    #[validate(length(min = 1))]
    pub access_code: String,
}

impl LoginRequest {
    pub fn new(email: &str, username: &str, password: &str, access_code: &str) -> Self {
        LoginRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
            access_code: access_code.to_string(),
        }
    }
}

/// A material to add, everything but the generated fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMaterial {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(url)]
    pub image_url: Option<String>,

    #[validate(url)]
    pub pdf_url: Option<String>,

    #[validate(url)]
    pub video_url: Option<String>,

    #[validate(length(min = 1))]
    pub subject: String,
}

/// A question to add. `correct_answer` must index into `options`; that
/// cross-field rule is enforced by the content service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[validate(length(min = 1))]
    pub text: String,

    #[validate(length(min = 1))]
    pub options: Vec<String>,

    pub correct_answer: usize,

    pub explanation: String,

    #[validate(length(min = 1))]
    pub subject: String,
}
