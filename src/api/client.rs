use crate::config::ClientConfig;
use crate::error::AppResult;
use serde::Serialize;

/// HTTP boundary to the playlist backend.
///
/// The cookie store carries the session credentials issued at login, so
/// every request is sent with ambient credentials attached. Helpers return
/// the raw response: status interpretation belongs to the individual
/// operations, several of which key success to one exact code.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent("tubelist/0.1.0")
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get(&self, path: &str) -> AppResult<reqwest::Response> {
        Ok(self.http.get(self.url(path)).send().await?)
    }

    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> AppResult<reqwest::Response> {
        Ok(self.http.get(self.url(path)).query(query).send().await?)
    }

    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> AppResult<reqwest::Response> {
        Ok(self.http.post(self.url(path)).json(body).send().await?)
    }

    pub(crate) async fn put_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> AppResult<reqwest::Response> {
        Ok(self.http.put(self.url(path)).json(body).send().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> AppResult<reqwest::Response> {
        Ok(self.http.delete(self.url(path)).send().await?)
    }

    pub(crate) async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> AppResult<reqwest::Response> {
        Ok(self.http.delete(self.url(path)).query(query).send().await?)
    }
}
