//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and a generic REST
//! client for entity collections.

use crate::shared::store::{CollectionSource, EntityApi};
use async_trait::async_trait;
use contracts::domain::common::{AggregateId, AggregateRoot};
use gloo_net::http::{Request, Response};
use std::marker::PhantomData;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Путь коллекции: `/api/{collection_name}`
pub fn collection_path(collection: &str) -> String {
    format!("/api/{}", collection)
}

/// Путь записи: `/api/{collection_name}/{id}`
pub fn item_path(collection: &str, id: &str) -> String {
    format!("/api/{}/{}", collection, urlencoding::encode(id))
}

/// Текст ошибки по ответу сервера. Backend отдаёт `{"error": "..."}`.
fn error_message(action: &str, status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        format!("Failed to {}: HTTP {}", action, status)
    } else {
        format!("Failed to {}: HTTP {} ({})", action, status, detail)
    }
}

async fn expect_ok(response: Response, action: &str) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_message(action, response.status(), &body))
}

/// REST-коллекция `GET/POST /api/{name}`, `PUT/DELETE /api/{name}/{id}`
pub struct RestCollection<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> RestCollection<E> {
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<E> Default for RestCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<E: AggregateRoot> CollectionSource<E> for RestCollection<E> {
    async fn list(&self) -> Result<Vec<E>, String> {
        let url = api_url(&collection_path(E::collection_name()));
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let response = expect_ok(response, "fetch").await?;
        response
            .json::<Vec<E>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

#[async_trait(?Send)]
impl<E: AggregateRoot> EntityApi<E> for RestCollection<E> {
    async fn create(&self, dto: E::Dto) -> Result<E, String> {
        let url = api_url(&collection_path(E::collection_name()));
        let response = Request::post(&url)
            .json(&dto)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let response = expect_ok(response, "create").await?;
        response
            .json::<E>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn update(&self, id: E::Id, dto: E::Dto) -> Result<E, String> {
        let url = api_url(&item_path(E::collection_name(), &id.as_string()));
        let response = Request::put(&url)
            .json(&dto)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        let response = expect_ok(response, "update").await?;
        response
            .json::<E>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn delete(&self, id: E::Id) -> Result<(), String> {
        let url = api_url(&item_path(E::collection_name(), &id.as_string()));
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        expect_ok(response, "delete").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("brands"), "/api/brands");
        assert_eq!(item_path("commission-settings", "5"), "/api/commission-settings/5");
        assert_eq!(item_path("brands", "a b/c"), "/api/brands/a%20b%2Fc");
    }

    #[test]
    fn test_error_message_prefers_server_detail() {
        assert_eq!(
            error_message("create", 422, r#"{"error":"Name is required"}"#),
            "Failed to create: HTTP 422 (Name is required)"
        );
        assert_eq!(
            error_message("delete", 502, "Bad Gateway\n"),
            "Failed to delete: HTTP 502 (Bad Gateway)"
        );
        assert_eq!(error_message("fetch", 503, ""), "Failed to fetch: HTTP 503");
    }
}
