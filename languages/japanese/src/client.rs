use std::time::Duration;

use async_trait::async_trait;
use yomi_analyzer::{AnalysisService, FetchError, ProviderMetadata, ServiceResponse};
use yomi_config::service::ServiceConfig;

/// ichi.moe sentence analysis over HTTP
#[derive(Clone)]
pub struct IchiMoeClient {
    client: reqwest::Client,
    base_url: String,
}

impl IchiMoeClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// `<base_url>?q=<text>` with the text URL-encoded
    pub fn request_url(&self, text: &str) -> Result<reqwest::Url, FetchError> {
        reqwest::Url::parse_with_params(&self.base_url, &[("q", text)])
            .map_err(|e| FetchError::InvalidRequest(format!("{}: {}", self.base_url, e)))
    }
}

#[async_trait]
impl AnalysisService for IchiMoeClient {
    async fn fetch(&self, text: &str) -> Result<ServiceResponse, FetchError> {
        let url = self.request_url(text)?;
        tracing::debug!("Requesting analysis: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            tracing::warn!("Analysis service answered HTTP {}", status);
        }

        Ok(ServiceResponse { status, body })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "ichi.moe".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> IchiMoeClient {
        IchiMoeClient::new(&ServiceConfig {
            base_url: base_url.to_string(),
            ..ServiceConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn encodes_text_into_query() {
        let url = client("https://ichi.moe/cl/qr/").request_url("日本語 の").unwrap();
        assert_eq!(url.path(), "/cl/qr/");
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, [("q".to_string(), "日本語 の".to_string())]);
        assert!(!url.as_str().contains('日'));
    }

    #[test]
    fn rejects_unusable_base_url() {
        let result = client("not a url").request_url("日本語");
        assert!(matches!(result, Err(FetchError::InvalidRequest(_))));
    }
}
