use crate::{
    integrations::OnCallProvider,
    services::lookup::{self, SCHEDULE_ID_PARAM},
};
use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};

// ============================================================================
// Request DTOs
// ============================================================================

/// Raw query pairs, in order. Repeated keys are kept so the first
/// `scheduleid` wins, as with API Gateway's query map.
pub type QueryPairs = Vec<(String, String)>;

pub fn schedule_id_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == SCHEDULE_ID_PARAM)
        .map(|(_, value)| value.as_str())
}

// ============================================================================
// Endpoints
// ============================================================================

/// Who is on call for `?scheduleid=`
#[get("/oncall")]
pub async fn get_on_call(
    provider: web::Data<dyn OnCallProvider>,
    query: web::Query<QueryPairs>,
) -> impl Responder {
    let result = lookup::lookup_on_call(provider.get_ref(), schedule_id_param(&query)).await;

    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(&result.body)
}

// ============================================================================
// Tests
// ============================================================================
