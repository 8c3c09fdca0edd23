//! Portfolio optimization HTTP handler.

use crate::{
    error::AppError,
    extractors::AppJson,
    models::portfolio::{PortfolioOptimizationRequest, PortfolioOptimizationResponse},
    services::portfolio_service,
};
use axum::Json;

/// Portfolio optimization with behavioral constraints.
///
/// # Endpoint
///
/// `POST /v1/ai/optimize-portfolio`
///
/// # Request Body
///
/// ```json
/// {
///   "user_profile": {
///     "risk_tolerance": "moderate",
///     "investment_horizon": "long_term",
///     "behavioral_constraints": {
///       "loss_aversion_score": 2.5,
///       "max_volatility_comfort": 0.18
///     }
///   },
///   "current_portfolio": {
///     "US_STOCKS": 0.60,
///     "BONDS": 0.20,
///     "INTERNATIONAL_STOCKS": 0.15,
///     "CASH": 0.05
///   },
///   "optimization_objectives": ["maximize_risk_adjusted_returns"]
/// }
/// ```
///
/// # Response
///
/// 200 with the scripted optimization: `user_profile` and
/// `current_allocation` echo the request, `optimized_allocation` is the
/// fixed 55/25/15/5 target.
pub async fn optimize_portfolio(
    AppJson(request): AppJson<PortfolioOptimizationRequest>,
) -> Result<Json<PortfolioOptimizationResponse>, AppError> {
    Ok(Json(portfolio_service::optimize(&request)))
}
