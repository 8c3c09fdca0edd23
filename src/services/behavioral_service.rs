//! Behavioral analysis response generator.
//!
//! This is a demo service: the "analysis" is a scripted result. The only
//! request-dependent parts of the output are the echoed `user_id` and the
//! timestamp; the scores and patterns are fixed.

use chrono::Utc;

use crate::models::behavioral::{
    BehavioralAnalysisRequest, BehavioralAnalysisResponse, BehavioralScores, CoachingPlan,
    DetectedPattern, RiskProfile,
};

/// Build the scripted behavioral analysis for a validated request.
pub fn analyze(request: &BehavioralAnalysisRequest) -> BehavioralAnalysisResponse {
    BehavioralAnalysisResponse {
        user_id: request.user_id.clone(),
        analysis_timestamp: Utc::now(),
        behavioral_scores: BehavioralScores {
            loss_aversion: 2.3,
            overconfidence: 1.8,
            herding_tendency: 2.1,
            confirmation_bias: 2.7,
            anchoring_bias: 1.9,
        },
        risk_profile: RiskProfile {
            calculated_risk_tolerance: "moderate_aggressive".to_string(),
            emotional_volatility: "medium".to_string(),
            decision_consistency: 0.76,
        },
        detected_patterns: vec![
            DetectedPattern {
                pattern: "loss_aversion".to_string(),
                confidence: 0.85,
                description: "User shows tendency to hold losing positions too long".to_string(),
                recommendation: "Set automatic stop-loss orders to reduce emotional decision-making"
                    .to_string(),
            },
            DetectedPattern {
                pattern: "market_timing_attempts".to_string(),
                confidence: 0.72,
                description: "Frequent trading during volatile periods".to_string(),
                recommendation: "Consider dollar-cost averaging strategy".to_string(),
            },
        ],
        ai_coaching: CoachingPlan {
            primary_recommendation:
                "Focus on long-term investment strategy and reduce emotional trading".to_string(),
            coaching_areas: vec![
                "emotional_regulation".to_string(),
                "systematic_approach".to_string(),
                "risk_management".to_string(),
            ],
            next_steps: vec![
                "Review portfolio allocation quarterly instead of daily".to_string(),
                "Set up automatic investments to reduce timing decisions".to_string(),
                "Practice mindfulness techniques before making large trades".to_string(),
            ],
        },
        confidence_score: 0.82,
    }
}
