//! Gist CRUD and history operations
//!
//! Each operation validates its inputs before touching the network and then
//! performs exactly one request. Response bodies are returned verbatim as
//! [`serde_json::Value`].

use super::client::GistClient;
use super::error::GistResult;
use super::transport::HttpMethod;
use serde_json::Value;

impl GistClient {
    /// Create a new gist
    ///
    /// # Arguments
    /// * `data` - Non-empty JSON object, typically `{"files": {...}, "description": ...}`
    ///
    /// # Errors
    /// - [`GistError::Authentication`](super::GistError::Authentication) without a token
    /// - [`GistError::Validation`](super::GistError::Validation) for an empty or non-object payload
    /// - any classified response error
    pub async fn create(&self, data: &Value) -> GistResult<Value> {
        self.require_auth()?;
        let body = Self::require_payload(data, "created")?;

        let response = self
            .do_request(HttpMethod::Post, self.make_uri(""), Some(body))
            .await?;
        Self::decode(&response)
    }

    /// Update an existing gist
    ///
    /// Files omitted from `data` are left untouched by the API; a file mapped
    /// to `null` is deleted.
    pub async fn update(&self, gist_id: &str, data: &Value) -> GistResult<Value> {
        self.require_auth()?;
        Self::require_id(gist_id)?;
        let body = Self::require_payload(data, "updated")?;

        let response = self
            .do_request(HttpMethod::Patch, self.make_uri(gist_id), Some(body))
            .await?;
        Self::decode(&response)
    }

    /// Delete a gist
    ///
    /// # Returns
    /// `true` only when the API answered `204 No Content`
    pub async fn delete(&self, gist_id: &str) -> GistResult<bool> {
        self.require_auth()?;
        Self::require_id(gist_id)?;

        let response = self
            .do_request(HttpMethod::Delete, self.make_uri(gist_id), None)
            .await?;
        Ok(response.status == 204)
    }

    /// Fetch a gist; public gists can be read anonymously
    pub async fn get(&self, gist_id: &str) -> GistResult<Value> {
        Self::require_id(gist_id)?;

        let response = self
            .do_request(HttpMethod::Get, self.make_uri(gist_id), None)
            .await?;
        Self::decode(&response)
    }

    /// List the commit history of a gist, newest first
    pub async fn list_commits(&self, gist_id: &str) -> GistResult<Value> {
        Self::require_id(gist_id)?;

        let endpoint = format!("{}/commits", gist_id);
        let response = self
            .do_request(HttpMethod::Get, self.make_uri(&endpoint), None)
            .await?;
        Self::decode(&response)
    }
}
