use crate::api::client::CatalogClient;
use crate::api::models::User;
use crate::error::AppResult;
use reqwest::StatusCode;

/// Session boundary. Login stores the session cookie in the client's
/// cookie jar; every later request carries it automatically.
impl CatalogClient {
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let body = serde_json::json!({ "email": email, "password": password });
        match self.post_json("/login", &body).await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::warn!("login failed: {}", e);
                false
            }
        }
    }

    pub async fn logout(&self) -> bool {
        match self.delete("/logout").await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::warn!("logout failed: {}", e);
                false
            }
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.try_current_user().await.unwrap_or_else(|e| {
            log::warn!("current_user failed: {}", e);
            None
        })
    }

    async fn try_current_user(&self) -> AppResult<Option<User>> {
        let response = self.get("/user").await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }
}
