//! AWS Lambda entrypoint adapter (API Gateway REST/HTTP APIs and ALB)

use lambda_http::{Body, Error, Request, RequestExt, Response};

use crate::integrations::OnCallProvider;
use crate::services::lookup::{self, LookupResponse, SCHEDULE_ID_PARAM};

pub async fn function_handler(
    provider: &dyn OnCallProvider,
    event: Request,
) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let result = lookup::lookup_on_call(provider, params.first(SCHEDULE_ID_PARAM)).await;

    into_response(&result)
}

fn into_response(result: &LookupResponse) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(result.status)
        .header("Content-Type", "application/json")
        .body(Body::from(result.body_json()))
        .map_err(Box::new)?;

    Ok(resp)
}
