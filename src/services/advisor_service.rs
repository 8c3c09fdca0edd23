//! Conversational advisor response generator.
//!
//! Returns the same scripted answer for every question; only `user_id`,
//! the question text, and the timestamp vary.

use chrono::Utc;

use crate::models::advisor::{AdvisorAnswer, AdvisorResponse, FinancialQuestion};

/// Build the scripted advisor answer for a validated question.
pub fn advise(request: &FinancialQuestion) -> AdvisorResponse {
    AdvisorResponse {
        user_id: request.user_id.clone(),
        response_timestamp: Utc::now(),
        question: request.question.clone(),
        ai_response: AdvisorAnswer {
            analysis: "Based on your question, I can see you're concerned about market \
                       volatility and its impact on your retirement planning. This is a very \
                       common and legitimate concern."
                .to_string(),
            personalized_advice: "Given your investment timeline and risk profile, here's my \
                                  recommendation: maintain a diversified portfolio with 60% \
                                  stocks and 40% bonds. The current market volatility is normal \
                                  and shouldn't derail your long-term strategy."
                .to_string(),
            action_items: vec![
                "Review your asset allocation quarterly".to_string(),
                "Consider increasing your 401(k) contribution by 1-2%".to_string(),
                "Set up automatic rebalancing to maintain target allocation".to_string(),
            ],
            educational_insight: "Market volatility is actually an opportunity for long-term \
                                  investors. Dollar-cost averaging helps you buy more shares \
                                  when prices are low and fewer when prices are high."
                .to_string(),
            risk_assessment: "Your current strategy aligns well with your goals, but consider \
                              stress-testing your portfolio against a 20-30% market decline."
                .to_string(),
        },
        follow_up_questions: vec![
            "Would you like me to analyze your specific risk tolerance?".to_string(),
            "Should we discuss tax-efficient investment strategies?".to_string(),
            "Are you interested in exploring ESG investment options?".to_string(),
        ],
        related_topics: vec![
            "retirement_planning".to_string(),
            "risk_management".to_string(),
            "portfolio_diversification".to_string(),
            "tax_optimization".to_string(),
        ],
        confidence_score: 0.87,
        disclaimer: "This is educational information only and not personalized financial \
                     advice. Please consult with a qualified financial advisor for decisions \
                     specific to your situation."
            .to_string(),
    }
}
