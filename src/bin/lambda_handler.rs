//! AWS Lambda handler for running the calculator
//!
//! Accepts a JSON financial profile (any section or field may be omitted) and
//! returns the full report. An optional `expectedReturns` list adds a return
//! sweep over the same profile.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use life_calculator::scenario::{check_scenario_count, ScenarioResult};
use life_calculator::{FinancialProfile, FinancialReport, ProfileError, ScenarioRunner};
use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(flatten)]
    pub profile: FinancialProfile,

    /// Expected returns (percent) to compare against the profile's own
    #[serde(default)]
    pub expected_returns: Option<Vec<f64>>,
}

/// Response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub report: FinancialReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<ScenarioResult>>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn calculate(body: &str) -> Result<CalculationResponse, ProfileError> {
    let start = std::time::Instant::now();

    let request: CalculationRequest = if body.trim().is_empty() {
        CalculationRequest::default()
    } else {
        serde_json::from_str(body)?
    };

    request.profile.retirement.check_horizon()?;
    if let Some(returns) = &request.expected_returns {
        check_scenario_count(returns.len())?;
    }

    let report = FinancialReport::from_profile(&request.profile);
    let scenarios = request
        .expected_returns
        .map(|returns| ScenarioRunner::new(request.profile).sweep_returns(&returns));

    Ok(CalculationResponse {
        report,
        scenarios,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

fn json_response(status_code: i64, body: String) -> LambdaFunctionUrlResponse {
    LambdaFunctionUrlResponse {
        status_code,
        headers: Default::default(),
        body: Some(body),
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status_code: i64, message: &str) -> Result<LambdaFunctionUrlResponse, Error> {
    let body = serde_json::to_string(&ErrorBody {
        error: message.to_string(),
    })?;
    Ok(json_response(status_code, body))
}

/// Map a request body to an HTTP response; bad input of any kind is a 400
fn respond(body: Option<String>, is_base64_encoded: bool) -> Result<LambdaFunctionUrlResponse, Error> {
    if is_base64_encoded {
        log::warn!("rejecting base64-encoded request body");
        return error_response(400, "Request body must be plain JSON");
    }

    let body = body.unwrap_or_default();
    match calculate(&body) {
        Ok(response) => {
            log::info!("calculation complete in {} ms", response.execution_time_ms);
            Ok(json_response(200, serde_json::to_string(&response)?))
        }
        Err(e) => {
            log::warn!("invalid request body: {}", e);
            error_response(400, &format!("Invalid request: {}", e))
        }
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<LambdaFunctionUrlResponse, Error> {
    let request = event.payload;
    respond(request.body, request.is_base64_encoded)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
