//! Conversational financial advisor HTTP handler.

use crate::{
    error::AppError,
    extractors::AppJson,
    models::advisor::{AdvisorResponse, FinancialQuestion},
    services::advisor_service,
};
use axum::Json;

/// Conversational financial advisor.
///
/// `POST /v1/ai/financial-advisor`
///
/// Takes a free-text question (plus optional context) and returns the
/// scripted advice, action items, follow-ups, and the standing disclaimer.
pub async fn financial_advisor(
    AppJson(request): AppJson<FinancialQuestion>,
) -> Result<Json<AdvisorResponse>, AppError> {
    Ok(Json(advisor_service::advise(&request)))
}
