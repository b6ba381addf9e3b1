use async_trait::async_trait;

use crate::models::ScheduleResponse;

pub mod opsgenie;

// Re-export providers
pub use opsgenie::OpsGenieClient;

/// Error types for provider operations
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    ConnectionError(String),
    HttpStatus(u16),
    InvalidResponse(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            ProviderError::HttpStatus(code) => write!(f, "Upstream returned HTTP {}", code),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of on-call schedules
#[async_trait]
pub trait OnCallProvider: Send + Sync {
    /// Unique identifier for this provider (e.g., "opsgenie")
    fn provider_name(&self) -> &'static str;

    /// Fetches the raw schedule document
    async fn fetch_schedule(&self, schedule_id: &str) -> Result<ScheduleResponse, ProviderError>;

    /// Name of the participant currently on call, or `None` when nobody is
    /// on call or the schedule could not be fetched.
    async fn current_on_call(&self, schedule_id: &str) -> Option<String> {
        let schedule = match self.fetch_schedule(schedule_id).await {
            Ok(schedule) => schedule,
            Err(e) => {
                log::error!("Error fetching on-call schedule details: {}", e);
                return None;
            }
        };

        let participant = schedule.current_on_call()?;
        match participant.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => {
                log::warn!(
                    "Schedule {} has an on-call participant without a name",
                    schedule_id
                );
                None
            }
        }
    }
}
