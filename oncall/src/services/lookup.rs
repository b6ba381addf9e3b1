use crate::integrations::OnCallProvider;
use crate::models::LookupBody;

pub const MISSING_SCHEDULE_ID: &str = "Missing schedule ID query parameter (scheduleid)";

/// Query parameter carrying the schedule id
pub const SCHEDULE_ID_PARAM: &str = "scheduleid";

/// Status code and JSON body, independent of the transport that serves it
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResponse {
    pub status: u16,
    pub body: LookupBody,
}

impl LookupResponse {
    pub fn found(name: String) -> Self {
        Self {
            status: 200,
            body: LookupBody::OnCall { name },
        }
    }

    pub fn missing_schedule_id() -> Self {
        Self {
            status: 400,
            body: LookupBody::Error {
                error: MISSING_SCHEDULE_ID.to_string(),
            },
        }
    }

    pub fn nobody_on_call(schedule_id: &str) -> Self {
        Self {
            status: 404,
            body: LookupBody::Error {
                error: format!("No user currently on call for schedule ID: {}", schedule_id),
            },
        }
    }

    pub fn body_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_default()
    }
}

/// Resolve who is on call for `schedule_id`.
///
/// An absent or empty id is a 400. Upstream failures are logged by the
/// provider and answered exactly like "nobody on call" (404).
pub async fn lookup_on_call(
    provider: &dyn OnCallProvider,
    schedule_id: Option<&str>,
) -> LookupResponse {
    let schedule_id = match schedule_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::info!("Rejected lookup without a schedule id");
            return LookupResponse::missing_schedule_id();
        }
    };

    log::info!(
        "Looking up on-call user for schedule {} via {}",
        schedule_id,
        provider.provider_name()
    );

    match provider.current_on_call(schedule_id).await {
        Some(name) => {
            log::info!("Schedule {}: {} is on call", schedule_id, name);
            LookupResponse::found(name)
        }
        None => {
            log::info!("Schedule {}: no user currently on call", schedule_id);
            LookupResponse::nobody_on_call(schedule_id)
        }
    }
}
