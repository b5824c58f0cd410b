//! User API client methods

use super::{error_from_response, ClientError, VaultClient};
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, ValidateTokenRequest};
use reqwest::header;

impl VaultClient {
    /// Log in with a username and password
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self
            .raw_request(reqwest::Method::POST, "/api/users/login")
            .json(&request);
        self.execute(req).await
    }

    /// Create a new account
    pub async fn register_user(&self, request: RegisterRequest) -> Result<(), ClientError> {
        let req = self
            .raw_request(reqwest::Method::POST, "/api/users/new")
            .json(&request);

        let response = req.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Check a session token against the validation endpoint
    ///
    /// The token travels in an `Authorization: Bearer` header. A success
    /// status resolves `true`, any other status `false`; only transport
    /// failures surface as errors. The caller decides what a rejected token
    /// means for stored state.
    pub async fn validate_token(&self, token: &str) -> Result<bool, ClientError> {
        let response = self
            .raw_request(reqwest::Method::GET, "/api/users/validate")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    /// Check a session token, sending it in the request body
    ///
    /// Same contract as [`Self::validate_token`] with the token carried as
    /// `{"token": "..."}` in a POST body instead of a bearer header.
    pub async fn validate_session(&self, token: &str) -> Result<bool, ClientError> {
        let response = self
            .raw_request(reqwest::Method::POST, "/api/users/validate")
            .json(&ValidateTokenRequest {
                token: token.to_string(),
            })
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
