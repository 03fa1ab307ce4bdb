/// Remote sentence analysis provider
#[async_trait::async_trait]
pub trait AnalysisService: Send + Sync {
    /// Request an analysis page for `text`.
    ///
    /// Returns whatever status the service answered with; deciding which
    /// statuses are usable is left to the caller.
    async fn fetch(&self, text: &str) -> Result<ServiceResponse, FetchError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}

impl ServiceResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Turn anything but 200 into an error
    pub fn into_body(self) -> Result<String, FetchError> {
        if !self.is_ok() {
            return Err(FetchError::Status(self.status));
        }
        Ok(self.body)
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
