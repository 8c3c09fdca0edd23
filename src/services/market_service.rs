//! Market prediction response generator.
//!
//! Returns a scripted forecast regardless of the indicators supplied. Echoes
//! `user_id` and `prediction_horizon`.

use chrono::Utc;

use crate::models::market::{
    ExpectedReturnRange, MarketForecast, MarketInsights, MarketPredictionRequest,
    MarketPredictionResponse, MarketRiskFactor, RegimeProbabilities, SectorOutlook,
    SectorPredictions,
};

/// Build the scripted market forecast for a validated request.
pub fn predict(request: &MarketPredictionRequest) -> MarketPredictionResponse {
    MarketPredictionResponse {
        user_id: request.user_id.clone(),
        prediction_timestamp: Utc::now(),
        prediction_horizon: request.prediction_horizon.clone(),
        market_forecast: MarketForecast {
            overall_direction: "moderately_bullish".to_string(),
            confidence_level: 0.73,
            expected_return_range: ExpectedReturnRange {
                low: 0.042,
                medium: 0.078,
                high: 0.114,
            },
            // Regime probabilities sum to 1.0
            probability_distribution: RegimeProbabilities {
                bear_market: 0.15,
                flat_market: 0.25,
                bull_market: 0.60,
            },
        },
        sector_predictions: SectorPredictions {
            technology: SectorOutlook {
                direction: "bullish".to_string(),
                confidence: 0.81,
            },
            healthcare: SectorOutlook {
                direction: "moderately_bullish".to_string(),
                confidence: 0.72,
            },
            energy: SectorOutlook {
                direction: "neutral".to_string(),
                confidence: 0.65,
            },
            financials: SectorOutlook {
                direction: "moderately_bullish".to_string(),
                confidence: 0.69,
            },
        },
        risk_factors: vec![
            MarketRiskFactor {
                factor: "inflation_uncertainty".to_string(),
                impact: "medium".to_string(),
                probability: 0.68,
            },
            MarketRiskFactor {
                factor: "geopolitical_tensions".to_string(),
                impact: "high".to_string(),
                probability: 0.45,
            },
        ],
        ai_insights: MarketInsights {
            key_drivers: vec![
                "Corporate earnings growth".to_string(),
                "Federal Reserve policy normalization".to_string(),
                "Consumer spending patterns".to_string(),
            ],
            investment_themes: vec![
                "AI and automation adoption".to_string(),
                "Sustainable energy transition".to_string(),
                "Healthcare innovation".to_string(),
            ],
            timing_considerations: "Market appears to be in mid-cycle expansion phase".to_string(),
        },
        actionable_recommendations: vec![
            "Maintain diversified equity exposure".to_string(),
            "Consider technology sector overweight".to_string(),
            "Keep 6-12 months cash reserves".to_string(),
            "Monitor Federal Reserve communications closely".to_string(),
        ],
        model_accuracy: 0.78,
    }
}
