use async_trait::async_trait;

use super::{OnCallProvider, ProviderError};
use crate::config::Config;
use crate::models::ScheduleResponse;

/// HTTP client for the OpsGenie schedule API
pub struct OpsGenieClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl OpsGenieClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    fn schedule_url(&self, schedule_id: &str) -> String {
        format!(
            "{}/v2/schedules/{}",
            self.base_url,
            urlencoding::encode(schedule_id)
        )
    }

    fn authorization(&self) -> String {
        format!("ApiKey {}", self.api_key)
    }
}

#[async_trait]
impl OnCallProvider for OpsGenieClient {
    fn provider_name(&self) -> &'static str {
        "opsgenie"
    }

    async fn fetch_schedule(&self, schedule_id: &str) -> Result<ScheduleResponse, ProviderError> {
        let url = self.schedule_url(schedule_id);
        log::debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .header("Authorization", self.authorization())
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus(status.as_u16()));
        }

        resp.json::<ScheduleResponse>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}
