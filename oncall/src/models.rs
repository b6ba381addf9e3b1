use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// OpsGenie schedule payload
// ============================================================================

/// Body of `GET /v2/schedules/{id}`. Every field is optional; anything
/// missing or of the wrong type reads as absent rather than failing the lookup.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ScheduleResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<ScheduleData>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ScheduleData {
    #[serde(default, deserialize_with = "lenient_participants")]
    pub participants: Option<Vec<Participant>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub currently_on_call: Option<bool>,
}

/// Wrong-typed values become `None` instead of an error
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Entries that are not objects become empty participants, so one bad
/// entry cannot hide the others
fn lenient_participants<'de, D>(deserializer: D) -> Result<Option<Vec<Participant>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(None),
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect(),
    ))
}

impl Participant {
    pub fn is_on_call(&self) -> bool {
        self.currently_on_call.unwrap_or(false)
    }
}

impl ScheduleResponse {
    pub fn participants(&self) -> &[Participant] {
        self.data
            .as_ref()
            .and_then(|d| d.participants.as_deref())
            .unwrap_or(&[])
    }

    /// First participant flagged as currently on call, in list order
    pub fn current_on_call(&self) -> Option<&Participant> {
        self.participants().iter().find(|p| p.is_on_call())
    }
}

// ============================================================================
// Response bodies
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LookupBody {
    OnCall { name: String },
    Error { error: String },
}
