//! Market prediction request/response types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market snapshot supplied with a prediction request.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    /// Prediction timeframe
    pub timeframe: String,

    /// Current market indicators, keyed by indicator name
    pub market_indicators: HashMap<String, f64>,

    /// Economic factors to consider
    pub economic_factors: Vec<String>,
}

/// Request body for `POST /v1/ai/market-prediction`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPredictionRequest {
    pub user_id: String,
    pub market_data: MarketData,

    /// short_term/medium_term/long_term, echoed back in the response
    pub prediction_horizon: String,
}

/// Low/medium/high band of expected returns.
#[derive(Debug, Clone, Serialize)]
pub struct ExpectedReturnRange {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Probabilities across the three market regimes.
///
/// The three fields always sum to 1.0.
#[derive(Debug, Clone, Serialize)]
pub struct RegimeProbabilities {
    pub bear_market: f64,
    pub flat_market: f64,
    pub bull_market: f64,
}

/// Headline forecast block.
#[derive(Debug, Clone, Serialize)]
pub struct MarketForecast {
    pub overall_direction: String,

    /// Forecast confidence, in [0, 1]
    pub confidence_level: f64,

    pub expected_return_range: ExpectedReturnRange,
    pub probability_distribution: RegimeProbabilities,
}

/// Direction call for a single sector.
#[derive(Debug, Clone, Serialize)]
pub struct SectorOutlook {
    pub direction: String,
    pub confidence: f64,
}

/// Per-sector direction calls.
#[derive(Debug, Clone, Serialize)]
pub struct SectorPredictions {
    pub technology: SectorOutlook,
    pub healthcare: SectorOutlook,
    pub energy: SectorOutlook,
    pub financials: SectorOutlook,
}

/// A named risk with impact and probability.
#[derive(Debug, Clone, Serialize)]
pub struct MarketRiskFactor {
    pub factor: String,
    pub impact: String,
    pub probability: f64,
}

/// Narrative insight block attached to the forecast.
#[derive(Debug, Clone, Serialize)]
pub struct MarketInsights {
    pub key_drivers: Vec<String>,
    pub investment_themes: Vec<String>,
    pub timing_considerations: String,
}

/// Response body for `POST /v1/ai/market-prediction`.
#[derive(Debug, Clone, Serialize)]
pub struct MarketPredictionResponse {
    /// Echo of the request's user_id
    pub user_id: String,

    /// When the prediction was produced
    pub prediction_timestamp: DateTime<Utc>,

    /// Echo of the request's prediction_horizon
    pub prediction_horizon: String,

    pub market_forecast: MarketForecast,
    pub sector_predictions: SectorPredictions,
    pub risk_factors: Vec<MarketRiskFactor>,
    pub ai_insights: MarketInsights,
    pub actionable_recommendations: Vec<String>,

    /// Backtested model accuracy, in [0, 1]
    pub model_accuracy: f64,
}
