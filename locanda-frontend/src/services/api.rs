use gloo::net::http::Request;

// Re-export shared types
pub use locanda_types::*;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
}

#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        // Defaults to the compose-internal service name the query
        // service is published under.
        let base_url = option_env!("LOCANDA_API_URL")
            .unwrap_or("http://api:5000")
            .to_string();

        Self { base_url }
    }

    // Fetch every location the query service knows about, in one GET
    pub async fn fetch_locations(&self) -> Result<Vec<Location>, ApiError> {
        let url = format!("{}/locations", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::UpstreamUnreachable(format!("Request failed: {:?}", e)))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server { status, message });
        }

        let body: LocationsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(format!("Failed to parse response: {:?}", e)))?;

        Ok(body.locations)
    }
}
