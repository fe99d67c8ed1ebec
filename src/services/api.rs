use crate::models::ProfileRecord;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the directory API
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Directory API client
///
/// Handles all communication with the photographer directory backend:
/// - Fetching the full record collection for the listing view
/// - Fetching a single profile by id
pub struct DirectoryClient {
    base_url: String,
    client: Client,
}

impl DirectoryClient {
    /// Create a new directory client
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch every photographer record in the directory
    pub async fn fetch_photographers(&self) -> Result<Vec<ProfileRecord>, DirectoryError> {
        let url = format!("{}/photographers", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching photographers from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch photographers: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        if !json.is_array() {
            return Err(DirectoryError::InvalidResponse(
                "Expected a record array".into(),
            ));
        }

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse photographers: {}", e)))
    }

    /// Fetch a single photographer record by id
    ///
    /// A 404 from the backend maps to [`DirectoryError::NotFound`] so the
    /// profile view can show its not-found state instead of an error.
    pub async fn fetch_photographer(&self, id: u64) -> Result<ProfileRecord, DirectoryError> {
        let url = format!("{}/photographers/{}", self.base_url.trim_end_matches('/'), id);

        tracing::debug!("Fetching photographer: {}", id);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(format!(
                "Photographer {} not found",
                id
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch photographer {}: {} - {}", id, status, body);
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch photographer: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse photographer: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS_JSON: &str = r#"[
        {
            "id": 1,
            "name": "Clara Voss",
            "location": "Austin",
            "price": 2500,
            "rating": 4.8,
            "styles": ["Wedding"],
            "tags": ["outdoor"],
            "bio": "Golden-hour specialist",
            "profilePic": "/img/clara.jpg",
            "portfolio": ["/img/p1.jpg", "/img/p2.jpg"],
            "reviews": [
                {"name": "Dana", "rating": 5, "comment": "Wonderful", "date": "2024-03-02"}
            ]
        },
        {
            "id": 2,
            "name": "Omar Reyes",
            "location": "Denver",
            "price": 1800,
            "rating": 4.2
        }
    ]"#;

    #[test]
    fn test_directory_client_creation() {
        let client = DirectoryClient::new(
            "http://localhost:3001".to_string(),
            Duration::from_secs(30),
        );

        assert_eq!(client.base_url, "http://localhost:3001");
    }

    #[tokio::test]
    async fn test_fetch_photographers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/photographers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RECORDS_JSON)
            .create_async()
            .await;

        let client = DirectoryClient::new(server.url(), Duration::from_secs(5));
        let records = client.fetch_photographers().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Clara Voss");
        assert_eq!(records[0].review_count(), 1);
        // Fields absent from the payload fall back to empty
        assert!(records[1].styles.is_empty());
        assert!(records[1].portfolio.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_photographer_by_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/photographers/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": 7, "name": "Ines Fontaine", "location": "Lyon", "price": 3200, "rating": 4.9}"#,
            )
            .create_async()
            .await;

        let client = DirectoryClient::new(server.url(), Duration::from_secs(5));
        let record = client.fetch_photographer(7).await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Ines Fontaine");
    }

    #[tokio::test]
    async fn test_missing_photographer_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/photographers/99")
            .with_status(404)
            .with_body("{}")
            .create_async()
            .await;

        let client = DirectoryClient::new(server.url(), Duration::from_secs(5));
        let err = client.fetch_photographer(99).await.unwrap_err();

        assert!(matches!(err, DirectoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/photographers")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = DirectoryClient::new(server.url(), Duration::from_secs(5));
        let err = client.fetch_photographers().await.unwrap_err();

        assert!(matches!(err, DirectoryError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_non_array_body_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/photographers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"photographers": []}"#)
            .create_async()
            .await;

        let client = DirectoryClient::new(server.url(), Duration::from_secs(5));
        let err = client.fetch_photographers().await.unwrap_err();

        assert!(matches!(err, DirectoryError::InvalidResponse(_)));
    }
}
