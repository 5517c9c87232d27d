//! # Remote Auth Gateway Client
//!
//! Exchanges credentials for a session token.
//!
//! ## Endpoints
//! ```text
//! POST /auth/login        {email, password}              -> AuthResponse
//! POST /auth/register     {email, password, name, phone} -> AuthResponse
//! POST /auth/admin/login  {username, password}           -> AuthResponse
//! ```
//!
//! The client does not retry, refresh, or validate the returned token.
//! Attaching the bearer token to subsequent requests is a configuration
//! concern of the HTTP client, handled by [`AuthClient::with_token`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use parlor_core::validation::validate_email;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

// =============================================================================
// Wire DTOs
// =============================================================================

#[derive(Debug, Clone, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
    phone: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct AdminLoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// The user profile embedded in every auth response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

/// Response shape shared by all three auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// An authenticated session: the token plus who it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

impl From<AuthResponse> for AuthSession {
    fn from(resp: AuthResponse) -> Self {
        AuthSession {
            access_token: resp.access_token,
            token_type: resp.token_type,
            user: resp.user,
        }
    }
}

impl AuthSession {
    /// `Authorization` header value, e.g. `Bearer eyJ...`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

// =============================================================================
// Auth Client
// =============================================================================

/// Client for the remote auth gateway.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: GatewayConfig,
    bearer: Option<String>,
}

impl AuthClient {
    /// Creates a client over the given gateway configuration.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(AuthClient {
            http,
            config,
            bearer: None,
        })
    }

    /// Returns a client that attaches the session's bearer token to every
    /// subsequent request.
    pub fn with_token(mut self, session: &AuthSession) -> Self {
        self.bearer = Some(session.authorization_header());
        self
    }

    /// Logs a customer in. One attempt; a failure leaves the session
    /// unauthenticated.
    pub async fn login(&self, email: &str, password: &str) -> GatewayResult<AuthSession> {
        validate_email(email)?;

        debug!(email = %email, "auth login");
        let resp = self
            .post_json("/auth/login", &LoginRequest { email, password })
            .await?;
        info!(user_id = %resp.user.id, "login succeeded");
        Ok(resp.into())
    }

    /// Registers a new customer account.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        phone: &str,
    ) -> GatewayResult<AuthSession> {
        validate_email(email)?;

        debug!(email = %email, "auth register");
        let resp = self
            .post_json(
                "/auth/register",
                &RegisterRequest {
                    email,
                    password,
                    name,
                    phone,
                },
            )
            .await?;
        info!(user_id = %resp.user.id, "registration succeeded");
        Ok(resp.into())
    }

    /// Logs a staff member into the admin panel.
    pub async fn admin_login(&self, username: &str, password: &str) -> GatewayResult<AuthSession> {
        debug!(username = %username, "auth admin login");
        let resp = self
            .post_json("/auth/admin/login", &AdminLoginRequest { username, password })
            .await?;
        info!(user_id = %resp.user.id, "admin login succeeded");
        Ok(resp.into())
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> GatewayResult<AuthResponse> {
        let mut request = self.http.post(self.config.endpoint(path)).json(body);
        if let Some(bearer) = &self.bearer {
            request = request.header(reqwest::header::AUTHORIZATION, bearer.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, body));
        }
        Ok(response.json().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_wire_shape() {
        // Pin the camelCase field names the gateway sends
        let json = r#"{
            "accessToken": "eyJ.abc",
            "tokenType": "Bearer",
            "user": { "id": "u1", "name": "Dina", "email": "dina@example.com" }
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "eyJ.abc");
        assert_eq!(resp.token_type, "Bearer");
        assert_eq!(resp.user.name, "Dina");
    }

    #[test]
    fn test_login_request_wire_shape() {
        let body = serde_json::to_value(LoginRequest {
            email: "dina@example.com",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(body["email"], "dina@example.com");
        assert_eq!(body["password"], "hunter2");
    }

    #[test]
    fn test_authorization_header() {
        let session = AuthSession {
            access_token: "eyJ.abc".to_string(),
            token_type: "Bearer".to_string(),
            user: UserProfile {
                id: "u1".to_string(),
                name: "Dina".to_string(),
                email: None,
            },
        };
        assert_eq!(session.authorization_header(), "Bearer eyJ.abc");
    }
}
