//! Run sources: where the player gets arrays and step traces from.

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::api::{ErrorBody, GenerateResponse, SortRequest};
use crate::config::GenerateConfig;
use crate::services::dispatch::{self, DispatchError, Run};
use crate::services::generate;
use crate::sort::Algorithm;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[async_trait]
pub trait RunSource: Send + Sync {
    async fn generate(&self) -> Result<Vec<i64>, SourceError>;
    async fn sort(&self, algorithm: Algorithm, array: &[i64]) -> Result<Run, SourceError>;

    /// Every algorithm over the same input, in canonical order.
    async fn sort_all(&self, array: &[i64]) -> Vec<(Algorithm, Result<Run, SourceError>)> {
        let mut runs = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            runs.push((algorithm, self.sort(algorithm, array).await));
        }
        runs
    }
}

/// Sorts in-process through the dispatcher.
pub struct LocalSource {
    config: GenerateConfig,
}

impl LocalSource {
    #[must_use]
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RunSource for LocalSource {
    async fn generate(&self) -> Result<Vec<i64>, SourceError> {
        Ok(generate::random_array(&self.config))
    }

    async fn sort(&self, algorithm: Algorithm, array: &[i64]) -> Result<Run, SourceError> {
        Ok(dispatch::run(algorithm, array)?)
    }

    async fn sort_all(&self, array: &[i64]) -> Vec<(Algorithm, Result<Run, SourceError>)> {
        dispatch::dispatch_all(array)
            .into_iter()
            .map(|(algorithm, result)| (algorithm, result.map_err(SourceError::from)))
            .collect()
    }
}

/// Talks to a running `sortviz serve` over its JSON endpoints.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }
}

#[async_trait]
impl RunSource for HttpSource {
    async fn generate(&self) -> Result<Vec<i64>, SourceError> {
        let url = format!("{}/generate", self.base_url);
        let response = self.client.post(url).send().await?;
        let body: GenerateResponse = read_json(response).await?;
        Ok(body.array)
    }

    async fn sort(&self, algorithm: Algorithm, array: &[i64]) -> Result<Run, SourceError> {
        let url = format!("{}/sort", self.base_url);
        let request = SortRequest { algorithm: Some(algorithm.as_str().to_owned()), array: Some(array.to_vec()) };
        let response = self.client.post(url).json(&request).send().await?;
        read_json(response).await
    }
}

/// Decode a success body, or turn an error body into `SourceError::Server`.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_owned(),
    };
    Err(SourceError::Server { status: status.as_u16(), message })
}
