//! Portfolio optimization request/response types.
//!
//! The allocation struct (`Portfolio`) is both a request and a response
//! shape: the optimizer echoes the client's current allocation and returns
//! the target allocation and per-class deltas in the same four-bucket form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Behavioral limits a user has declared for themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralConstraints {
    /// Loss aversion score (1-5)
    pub loss_aversion_score: f64,

    /// Maximum volatility tolerance
    pub max_volatility_comfort: f64,
}

/// Investor profile supplied with an optimization request.
///
/// Echoed verbatim in the response so clients can correlate results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// conservative/moderate/aggressive
    pub risk_tolerance: String,

    /// short_term/medium_term/long_term
    pub investment_horizon: String,

    pub behavioral_constraints: BehavioralConstraints,
}

/// A four-bucket asset allocation.
///
/// # Wire Format
///
/// Field names are upper snake case on the wire:
///
/// ```json
/// {
///   "US_STOCKS": 0.60,
///   "BONDS": 0.20,
///   "INTERNATIONAL_STOCKS": 0.15,
///   "CASH": 0.05
/// }
/// ```
///
/// Weights are plain floats. No sum-to-1 constraint is enforced on input;
/// the values are passed through as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Portfolio {
    pub us_stocks: f64,
    pub bonds: f64,
    pub international_stocks: f64,
    pub cash: f64,
}

/// Request body for `POST /v1/ai/optimize-portfolio`.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioOptimizationRequest {
    pub user_profile: UserProfile,

    /// The allocation the user holds today
    pub current_portfolio: Portfolio,

    /// Optimization goal labels (e.g. "maximize_risk_adjusted_returns")
    pub optimization_objectives: Vec<String>,
}

/// Projected risk statistics for the optimized allocation.
#[derive(Debug, Clone, Serialize)]
pub struct RiskMetrics {
    pub expected_annual_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub value_at_risk_95: f64,
}

/// How the optimizer accommodated the user's behavioral constraints.
#[derive(Debug, Clone, Serialize)]
pub struct BehavioralAdjustments {
    pub loss_aversion_accommodation: String,
    pub volatility_buffer: String,
    pub rebalancing_frequency: String,
}

/// Explanation of the optimization result.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationRationale {
    pub optimization_method: String,
    pub key_factors: Vec<String>,
    pub trade_offs: String,
}

/// Concrete steps for moving to the optimized allocation.
#[derive(Debug, Clone, Serialize)]
pub struct ImplementationPlan {
    pub immediate_actions: Vec<String>,
    pub timeline: String,
    pub monitoring: String,
}

/// Response body for `POST /v1/ai/optimize-portfolio`.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioOptimizationResponse {
    /// When the optimization was produced
    pub optimization_timestamp: DateTime<Utc>,

    /// Echo of the request's user_profile
    pub user_profile: UserProfile,

    /// Echo of the request's current_portfolio
    pub current_allocation: Portfolio,

    /// Target allocation (weights sum to 1.0)
    pub optimized_allocation: Portfolio,

    /// Per-bucket delta between target and current allocation
    pub allocation_changes: Portfolio,

    pub risk_metrics: RiskMetrics,
    pub behavioral_adjustments: BehavioralAdjustments,
    pub rationale: OptimizationRationale,
    pub implementation_plan: ImplementationPlan,

    /// Overall optimization confidence, in [0, 1]
    pub confidence_score: f64,
}
