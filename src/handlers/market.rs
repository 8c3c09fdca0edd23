//! Market prediction HTTP handler.

use crate::{
    error::AppError,
    extractors::AppJson,
    models::market::{MarketPredictionRequest, MarketPredictionResponse},
    services::market_service,
};
use axum::Json;

/// Market prediction and forecasting.
///
/// `POST /v1/ai/market-prediction`
///
/// Accepts a market snapshot (timeframe, indicator map, economic factors)
/// and a `prediction_horizon`, which is echoed back alongside the scripted
/// forecast.
pub async fn market_prediction(
    AppJson(request): AppJson<MarketPredictionRequest>,
) -> Result<Json<MarketPredictionResponse>, AppError> {
    Ok(Json(market_service::predict(&request)))
}
