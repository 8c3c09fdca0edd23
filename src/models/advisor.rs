//! Conversational advisor request/response types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/ai/financial-advisor`.
///
/// `context` carries arbitrary extra JSON the client wants to attach
/// (age, goals, account balances). It defaults to empty when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialQuestion {
    pub user_id: String,

    /// Financial question or concern, free text
    pub question: String,

    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
}

/// The advisor's structured answer.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorAnswer {
    pub analysis: String,
    pub personalized_advice: String,
    pub action_items: Vec<String>,
    pub educational_insight: String,
    pub risk_assessment: String,
}

/// Response body for `POST /v1/ai/financial-advisor`.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorResponse {
    /// Echo of the request's user_id
    pub user_id: String,

    /// When the answer was produced
    pub response_timestamp: DateTime<Utc>,

    /// Echo of the request's question
    pub question: String,

    pub ai_response: AdvisorAnswer,
    pub follow_up_questions: Vec<String>,
    pub related_topics: Vec<String>,

    /// Answer confidence, in [0, 1]
    pub confidence_score: f64,

    /// Always present; the demo never gives real financial advice
    pub disclaimer: String,
}
