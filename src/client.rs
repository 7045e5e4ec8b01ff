use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::FetchError;
use crate::types::{BasicRecord, CollectionEnvelope, NormalizedTask};

/// Authenticated JSON client for the task service.
///
/// Issues only GET requests; the bearer token from [`Config`] is attached
/// to every call. One instance serves a single fetch but may be reused.
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { http, config })
    }

    /// Fetches `<base>/<suffix>?opt_fields=<comma-joined fields>` and
    /// decodes the JSON body into `T`.
    ///
    /// The `opt_fields` parameter is always sent, even when empty: the
    /// service treats an empty selection as "compact records".
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        suffix: &str,
        fields: &[&str],
    ) -> Result<T, FetchError> {
        let mut url = reqwest::Url::parse(&format!("{}/{}", self.config.base_url, suffix))
            .map_err(|e| FetchError::RequestConstruction(e.to_string()))?;
        url.set_query(Some(&format!("opt_fields={}", fields.join(","))));

        tracing::debug!(target: "taskpull::client", url = %url, "GET");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.token)
            .send()
            .await
            .map_err(FetchError::Transport)?
            .error_for_status()
            .map_err(FetchError::Transport)?;

        let body = response.text().await.map_err(FetchError::Transport)?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }

    /// Fetches a `{"data": [...]}` collection endpoint, preserving remote
    /// order.
    pub async fn fetch_collection(
        &self,
        suffix: &str,
        fields: &[&str],
    ) -> Result<Vec<BasicRecord>, FetchError> {
        let envelope: CollectionEnvelope = self.get_json(suffix, fields).await?;
        Ok(envelope.data)
    }

    /// Convenience wrapper around [`crate::fetch::get_tasks`].
    pub async fn get_tasks(&self, max: usize) -> Result<Vec<NormalizedTask>, FetchError> {
        crate::fetch::get_tasks(self, max).await
    }
}
