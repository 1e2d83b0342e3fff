use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use carauction_lib::{
    compute_fees, parse_amount, parse_budget, quote_budget, BudgetQuote, FeeBreakdown,
    ValidationError,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

/// Query string of `GET /api/calculate`.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateParams {
    pub budget: Option<String>,
}

/// Query string of `GET /api/fees`.
#[derive(Debug, Default, Deserialize)]
pub struct FeesParams {
    pub amount: Option<String>,
}

/// Rejected client input, answered with `422 Unprocessable Entity`.
#[derive(Debug)]
pub struct ApiError(ValidationError);

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let field: &str = self.0.field();
        let message: String = self.0.to_string();
        warn!(field, %message, "rejected request");
        let body = json!({
            "message": message.clone(),
            "errors": { field: [message] },
        });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Builds the HTTP routes of the calculator.
pub fn router() -> Router {
    Router::new()
        .route("/api/calculate", get(calculate))
        .route("/api/fees", get(fees))
}

/// Resolves the largest bid for a budget and returns it with all of its fees.
async fn calculate(
    Query(params): Query<CalculateParams>,
) -> Result<Json<BudgetQuote>, ApiError> {
    let budget = parse_budget(params.budget.as_deref())?;
    let quote: BudgetQuote = quote_budget(budget);
    info!(%budget, amount = %quote.breakdown.amount, "calculated budget quote");
    Ok(Json(quote))
}

async fn fees(Query(params): Query<FeesParams>) -> Result<Json<FeeBreakdown>, ApiError> {
    let amount = parse_amount(params.amount.as_deref())?;
    let breakdown: FeeBreakdown = compute_fees(amount);
    info!(%amount, total = %breakdown.total, "calculated fees");
    Ok(Json(breakdown))
}
