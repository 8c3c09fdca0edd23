//! Behavioral analysis request/response types.
//!
//! This module defines:
//! - `BehavioralAnalysisRequest`: Request body for the behavioral analysis endpoint
//! - `BehavioralAnalysisResponse`: Response body with scores, patterns, and coaching

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single historical transaction supplied by the client.
///
/// # JSON Example
///
/// ```json
/// {
///   "date": "2025-03-14",
///   "action": "sell",
///   "asset": "VTI",
///   "amount": 12000.0,
///   "market_condition": "correction"
/// }
/// ```
///
/// All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// Transaction date (YYYY-MM-DD)
    pub date: String,

    /// buy/sell/hold
    pub action: String,

    /// Asset symbol
    pub asset: String,

    /// Transaction amount
    pub amount: f64,

    /// Market condition during the transaction
    pub market_condition: String,
}

/// A recorded reaction to a market event.
///
/// `market_decline` is optional: interactions that did not happen during a
/// drawdown simply omit it.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketInteraction {
    /// Interaction date
    pub date: String,

    /// Type of market interaction
    pub action: String,

    /// Market decline percentage, if any
    pub market_decline: Option<f64>,

    /// User's emotional reaction
    pub user_reaction: String,
}

/// Behavioral input data grouped by kind.
#[derive(Debug, Clone, Deserialize)]
pub struct BehavioralFeatures {
    pub transaction_history: Vec<TransactionRecord>,
    pub market_interactions: Vec<MarketInteraction>,
}

/// Request body for `POST /v1/ai/behavioral-analysis`.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": "user_123",
///   "behavioral_features": {
///     "transaction_history": [...],
///     "market_interactions": [...]
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BehavioralAnalysisRequest {
    /// Unique user identifier, echoed back in the response
    pub user_id: String,

    /// Transaction history and market interactions to analyze
    pub behavioral_features: BehavioralFeatures,
}

/// Bias scores on a 1-5 scale.
#[derive(Debug, Clone, Serialize)]
pub struct BehavioralScores {
    pub loss_aversion: f64,
    pub overconfidence: f64,
    pub herding_tendency: f64,
    pub confirmation_bias: f64,
    pub anchoring_bias: f64,
}

/// Derived risk posture for the analyzed user.
#[derive(Debug, Clone, Serialize)]
pub struct RiskProfile {
    pub calculated_risk_tolerance: String,
    pub emotional_volatility: String,

    /// Consistency of past decisions, in [0, 1]
    pub decision_consistency: f64,
}

/// A single detected behavioral pattern.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedPattern {
    /// Pattern identifier (e.g. "loss_aversion")
    pub pattern: String,

    /// Detection confidence, in [0, 1]
    pub confidence: f64,

    /// Human-readable description of the pattern
    pub description: String,

    /// Suggested countermeasure
    pub recommendation: String,
}

/// Coaching guidance attached to the analysis.
#[derive(Debug, Clone, Serialize)]
pub struct CoachingPlan {
    pub primary_recommendation: String,
    pub coaching_areas: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Response body for `POST /v1/ai/behavioral-analysis`.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "user_id": "user_123",
///   "analysis_timestamp": "2026-08-07T10:00:00Z",
///   "behavioral_scores": { "loss_aversion": 2.3, ... },
///   "risk_profile": { "calculated_risk_tolerance": "moderate_aggressive", ... },
///   "detected_patterns": [...],
///   "ai_coaching": { "primary_recommendation": "...", ... },
///   "confidence_score": 0.82
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct BehavioralAnalysisResponse {
    /// Echo of the request's user_id
    pub user_id: String,

    /// When the analysis was produced
    pub analysis_timestamp: DateTime<Utc>,

    pub behavioral_scores: BehavioralScores,
    pub risk_profile: RiskProfile,
    pub detected_patterns: Vec<DetectedPattern>,
    pub ai_coaching: CoachingPlan,

    /// Overall analysis confidence, in [0, 1]
    pub confidence_score: f64,
}
