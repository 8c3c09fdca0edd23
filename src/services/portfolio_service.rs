//! Portfolio optimization response generator.
//!
//! Returns a scripted "optimized" allocation. The user profile and current
//! allocation are echoed back verbatim; the target allocation, deltas, and
//! risk metrics are fixed demo values.

use chrono::Utc;

use crate::models::portfolio::{
    BehavioralAdjustments, ImplementationPlan, OptimizationRationale, Portfolio,
    PortfolioOptimizationRequest, PortfolioOptimizationResponse, RiskMetrics,
};

/// Build the scripted optimization result for a validated request.
///
/// The optimized allocation always sums to 1.0 (0.55 + 0.25 + 0.15 + 0.05);
/// the deltas are the scripted difference against a nominal 60/20/15/5
/// starting portfolio, not against the caller's actual allocation.
pub fn optimize(request: &PortfolioOptimizationRequest) -> PortfolioOptimizationResponse {
    PortfolioOptimizationResponse {
        optimization_timestamp: Utc::now(),
        user_profile: request.user_profile.clone(),
        current_allocation: request.current_portfolio.clone(),
        optimized_allocation: Portfolio {
            us_stocks: 0.55,
            bonds: 0.25,
            international_stocks: 0.15,
            cash: 0.05,
        },
        allocation_changes: Portfolio {
            us_stocks: -0.05,
            bonds: 0.05,
            international_stocks: 0.00,
            cash: 0.00,
        },
        risk_metrics: RiskMetrics {
            expected_annual_return: 0.087,
            volatility: 0.162,
            sharpe_ratio: 1.34,
            max_drawdown: 0.245,
            value_at_risk_95: 0.032,
        },
        behavioral_adjustments: BehavioralAdjustments {
            loss_aversion_accommodation: "Increased bond allocation for emotional comfort"
                .to_string(),
            volatility_buffer: "Maintained cash position for peace of mind".to_string(),
            rebalancing_frequency: "quarterly".to_string(),
        },
        rationale: OptimizationRationale {
            optimization_method: "Mean-Variance Optimization with Behavioral Constraints"
                .to_string(),
            key_factors: vec![
                "Risk-adjusted returns maximization".to_string(),
                "Behavioral comfort zone maintenance".to_string(),
                "Market correlation diversification".to_string(),
            ],
            trade_offs: "Slightly lower expected return for significantly reduced emotional stress"
                .to_string(),
        },
        implementation_plan: ImplementationPlan {
            immediate_actions: vec![
                "Reduce US stock exposure by 5%".to_string(),
                "Increase bond allocation by 5%".to_string(),
            ],
            timeline: "Implement changes over 2-3 weeks to avoid market timing issues".to_string(),
            monitoring: "Review allocation monthly, rebalance quarterly".to_string(),
        },
        confidence_score: 0.91,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{BehavioralConstraints, UserProfile};

    fn request() -> PortfolioOptimizationRequest {
        PortfolioOptimizationRequest {
            user_profile: UserProfile {
                risk_tolerance: "moderate".to_string(),
                investment_horizon: "long_term".to_string(),
                behavioral_constraints: BehavioralConstraints {
                    loss_aversion_score: 2.5,
                    max_volatility_comfort: 0.18,
                },
            },
            current_portfolio: Portfolio {
                us_stocks: 0.70,
                bonds: 0.10,
                international_stocks: 0.12,
                cash: 0.08,
            },
            optimization_objectives: vec!["maximize_risk_adjusted_returns".to_string()],
        }
    }

    #[test]
    fn echoes_current_portfolio_verbatim() {
        let request = request();
        let response = optimize(&request);

        assert_eq!(response.current_allocation.us_stocks, 0.70);
        assert_eq!(response.current_allocation.bonds, 0.10);
        assert_eq!(response.current_allocation.international_stocks, 0.12);
        assert_eq!(response.current_allocation.cash, 0.08);
        assert_eq!(
            response.user_profile.risk_tolerance,
            request.user_profile.risk_tolerance
        );
    }

    #[test]
    fn optimized_allocation_sums_to_one() {
        let response = optimize(&request());
        let allocation = &response.optimized_allocation;

        let total =
            allocation.us_stocks + allocation.bonds + allocation.international_stocks + allocation.cash;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn confidence_is_a_probability() {
        let response = optimize(&request());
        assert!((0.0..=1.0).contains(&response.confidence_score));
    }
}
