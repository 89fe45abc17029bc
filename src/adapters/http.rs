use crate::domain::model::{Coach, Program};
use crate::domain::ports::{CoachApi, ConfigProvider, TokenStore};
use crate::utils::error::{AppError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// REST client for the coaching backend. The bearer token is looked up on
/// every request so a refreshed credential is picked up without rebuilding.
#[derive(Clone)]
pub struct HttpCoachApi {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpCoachApi {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self::with_client(Client::new(), base_url, tokens)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            tokens,
        }
    }

    pub fn from_config<C: ConfigProvider>(
        config: &C,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, config.base_url(), tokens))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Each segment is percent-encoded, so ids cannot add path levels or a
    /// query string.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| AppError::ConfigError {
            message: format!("Invalid base_url '{}': {}", self.base_url, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| AppError::ConfigError {
                message: format!("base_url '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.access_token() {
            Some(token) => request.bearer_auth(token),
            None => {
                tracing::debug!("No access_token stored, sending unauthenticated request");
                request
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let url = response.url().to_string();
        tracing::debug!("GET {} -> {}", url, response.status());

        if !response.status().is_success() {
            return Err(AppError::HttpStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl CoachApi for HttpCoachApi {
    async fn list_programs(&self) -> Result<Vec<Program>> {
        let url = self.endpoint(&["programs"])?;
        self.get_json(self.client.get(url)).await
    }

    async fn list_coaches(&self, program_id: &str) -> Result<Vec<Coach>> {
        let url = self.endpoint(&["coaches"])?;
        let request = self
            .client
            .get(url)
            .query(&[("filterByProgram", program_id)]);
        self.get_json(request).await
    }

    async fn get_coach(&self, coach_id: &str) -> Result<Coach> {
        let url = self.endpoint(&["coaches", coach_id])?;
        self.get_json(self.client.get(url)).await
    }
}
