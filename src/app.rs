//! Router construction.
//!
//! Factored out of `main` so tests can drive the full HTTP surface
//! in-process, middleware included.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
///
/// Route groups:
/// - `/v1/health`: public
/// - `/v1/ai/*`: behind the bearer token middleware
///
/// CORS is wide open (any origin/method/header, credentials allowed): this
/// is a demo API meant to be called straight from a browser frontend.
pub fn create_app(state: AppState) -> Router {
    // Authenticated routes (AI endpoints)
    let ai_routes = Router::new()
        .route(
            "/v1/ai/behavioral-analysis",
            post(handlers::behavioral::behavioral_analysis),
        )
        .route(
            "/v1/ai/optimize-portfolio",
            post(handlers::portfolio::optimize_portfolio),
        )
        .route(
            "/v1/ai/market-prediction",
            post(handlers::market::market_prediction),
        )
        .route(
            "/v1/ai/financial-advisor",
            post(handlers::advisor::financial_advisor),
        )
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine authenticated routes with public routes
    Router::new()
        // Public routes (no authentication required)
        .route("/v1/health", get(handlers::health::health_check))
        .merge(ai_routes)
        // Tracing + permissive CORS for browser clients
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::auth::hash_key;

    const TEST_KEY: &str = "demo_key_12345";

    fn app() -> Router {
        create_app(AppState {
            api_key_hash: hash_key(TEST_KEY),
        })
    }

    async fn post_json(path: &str, token: Option<&str>, body: Value) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        app()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn behavioral_request() -> Value {
        json!({
            "user_id": "user_123",
            "behavioral_features": {
                "transaction_history": [{
                    "date": "2025-03-14",
                    "action": "sell",
                    "asset": "VTI",
                    "amount": 12000.0,
                    "market_condition": "correction"
                }],
                "market_interactions": [{
                    "date": "2025-04-02",
                    "action": "panic_check",
                    "market_decline": -8.5,
                    "user_reaction": "anxious"
                }]
            }
        })
    }

    fn portfolio_request() -> Value {
        json!({
            "user_profile": {
                "risk_tolerance": "moderate",
                "investment_horizon": "long_term",
                "behavioral_constraints": {
                    "loss_aversion_score": 2.5,
                    "max_volatility_comfort": 0.18
                }
            },
            "current_portfolio": {
                "US_STOCKS": 0.70,
                "BONDS": 0.10,
                "INTERNATIONAL_STOCKS": 0.12,
                "CASH": 0.08
            },
            "optimization_objectives": ["maximize_risk_adjusted_returns"]
        })
    }

    fn market_request() -> Value {
        json!({
            "user_id": "user_9",
            "market_data": {
                "timeframe": "3_months",
                "market_indicators": { "vix": 18.4, "sp500_pe": 24.1 },
                "economic_factors": ["inflation", "fed_policy"]
            },
            "prediction_horizon": "medium_term"
        })
    }

    #[tokio::test]
    async fn health_returns_healthy_without_auth() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        // Timestamp must be a valid RFC 3339 instant
        chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn health_ignores_auth_headers() {
        // Health must answer even with a garbage Authorization header.
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .header(header::AUTHORIZATION, "Bearer not-the-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_endpoints_require_a_token() {
        for path in [
            "/v1/ai/behavioral-analysis",
            "/v1/ai/optimize-portfolio",
            "/v1/ai/market-prediction",
            "/v1/ai/financial-advisor",
        ] {
            let response = post_json(path, None, json!({})).await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
                "Bearer",
                "{path}"
            );
        }
    }

    #[tokio::test]
    async fn wrong_token_is_rejected() {
        let response = post_json(
            "/v1/ai/behavioral-analysis",
            Some("not-the-key"),
            behavioral_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_api_key");
    }

    #[tokio::test]
    async fn behavioral_analysis_echoes_user_and_scores() {
        let response = post_json(
            "/v1/ai/behavioral-analysis",
            Some(TEST_KEY),
            behavioral_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["user_id"], "user_123");
        assert_eq!(body["behavioral_scores"]["loss_aversion"], 2.3);

        let confidence = body["confidence_score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&confidence));

        let patterns = body["detected_patterns"].as_array().unwrap();
        assert!(!patterns.is_empty());
        for pattern in patterns {
            let confidence = pattern["confidence"].as_f64().unwrap();
            assert!((0.0..=1.0).contains(&confidence));
        }
    }

    #[tokio::test]
    async fn optimize_portfolio_echoes_current_allocation() {
        let response =
            post_json("/v1/ai/optimize-portfolio", Some(TEST_KEY), portfolio_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        // current_allocation must equal the request's current_portfolio verbatim
        assert_eq!(body["current_allocation"], portfolio_request()["current_portfolio"]);
        assert_eq!(body["user_profile"], portfolio_request()["user_profile"]);

        let optimized = &body["optimized_allocation"];
        let total = optimized["US_STOCKS"].as_f64().unwrap()
            + optimized["BONDS"].as_f64().unwrap()
            + optimized["INTERNATIONAL_STOCKS"].as_f64().unwrap()
            + optimized["CASH"].as_f64().unwrap();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn market_prediction_echoes_horizon() {
        let response =
            post_json("/v1/ai/market-prediction", Some(TEST_KEY), market_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["prediction_horizon"], "medium_term");
        assert_eq!(body["user_id"], "user_9");

        let distribution = &body["market_forecast"]["probability_distribution"];
        let total = distribution["bear_market"].as_f64().unwrap()
            + distribution["flat_market"].as_f64().unwrap()
            + distribution["bull_market"].as_f64().unwrap();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn financial_advisor_answers_without_context() {
        // `context` is optional and omitted here
        let response = post_json(
            "/v1/ai/financial-advisor",
            Some(TEST_KEY),
            json!({
                "user_id": "user_42",
                "question": "Should I worry about market volatility?"
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["question"], "Should I worry about market volatility?");
        assert!(!body["ai_response"]["action_items"].as_array().unwrap().is_empty());
        assert!(!body["follow_up_questions"].as_array().unwrap().is_empty());
        assert!(body["disclaimer"].as_str().unwrap().contains("educational"));
    }

    #[tokio::test]
    async fn missing_required_field_yields_422_not_500() {
        // user_id missing
        let response = post_json(
            "/v1/ai/market-prediction",
            Some(TEST_KEY),
            json!({
                "market_data": {
                    "timeframe": "3_months",
                    "market_indicators": {},
                    "economic_factors": []
                },
                "prediction_horizon": "short_term"
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_request");
        assert!(body["error"]["message"].as_str().unwrap().contains("user_id"));
    }

    #[tokio::test]
    async fn malformed_json_body_yields_client_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/ai/financial-advisor")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, format!("Bearer {TEST_KEY}"))
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_request");
    }
}
