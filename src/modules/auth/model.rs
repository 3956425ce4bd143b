use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Claims carried by access tokens: subject id, email, role and display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub name: String,
    pub exp: usize,
    pub iat: usize,
}

/// Form-encoded login credentials. The `username` field carries the account
/// email, matching the OAuth2 password-grant field naming.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}
