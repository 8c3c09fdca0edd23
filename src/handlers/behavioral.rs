//! Behavioral analysis HTTP handler.

use crate::{
    error::AppError,
    extractors::AppJson,
    models::behavioral::{BehavioralAnalysisRequest, BehavioralAnalysisResponse},
    services::behavioral_service,
};
use axum::Json;

/// Analyze a user's behavioral patterns and identify cognitive biases.
///
/// # Endpoint
///
/// `POST /v1/ai/behavioral-analysis`
///
/// # Authentication
///
/// Requires a valid bearer token in the Authorization header.
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": "user_123",
///   "behavioral_features": {
///     "transaction_history": [
///       {
///         "date": "2025-03-14",
///         "action": "sell",
///         "asset": "VTI",
///         "amount": 12000.0,
///         "market_condition": "correction"
///       }
///     ],
///     "market_interactions": [
///       {
///         "date": "2025-04-02",
///         "action": "panic_check",
///         "market_decline": -8.5,
///         "user_reaction": "anxious"
///       }
///     ]
///   }
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: scripted analysis with `user_id` echoed, bias
///   scores, detected patterns, and coaching guidance
/// - **Error (401)**: invalid bearer token
/// - **Error (422)**: request body fails validation
pub async fn behavioral_analysis(
    AppJson(request): AppJson<BehavioralAnalysisRequest>,
) -> Result<Json<BehavioralAnalysisResponse>, AppError> {
    Ok(Json(behavioral_service::analyze(&request)))
}
