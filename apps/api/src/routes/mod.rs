pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::finance::handlers as finance;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Idea-driven generation (model-backed)
        .route(
            "/api/generate",
            post(generation::handle_generate_landing_page),
        )
        .route("/analyze", post(generation::handle_analyze))
        .route("/charts", post(generation::handle_charts))
        .route("/mvp", post(generation::handle_mvp))
        // Financial projection (local)
        .route(
            "/financial_analysis",
            post(finance::handle_financial_analysis),
        )
        .with_state(state)
}

/// Single allowed origin with credentials. Methods and headers are mirrored from the
/// preflight, since wildcards are not permitted alongside credentials.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("CORS_ORIGIN '{origin}' is not a valid header value"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::generation::service::GatewayService;
    use crate::llm_client::scripted::ScriptedModel;

    const FRONTEND_ORIGIN: &str = "http://localhost:5173";

    fn app(model: &Arc<ScriptedModel>) -> Router {
        let state = AppState {
            gateway: GatewayService::new(model.clone(), Duration::from_secs(30)),
        };
        build_router(state).layer(cors_layer(FRONTEND_ORIGIN).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn read_body(resp: axum::http::Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let model = Arc::new(ScriptedModel::new());
        let resp = app(&model)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn generate_blank_idea_returns_400_without_model_call() {
        let model = Arc::new(ScriptedModel::with_texts(&["{}"]));
        let resp = app(&model)
            .oneshot(post_json("/api/generate", json!({"idea": ""})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_body(resp).await;
        assert_eq!(body["detail"], "Idea is required");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn generate_returns_landing_page() {
        let page = json!({
            "navigation": {"logo": "Brew", "links": ["Home"]},
            "hero": {"headline": "Coffee", "subheadline": "Daily", "cta": "Start"},
            "features": [],
            "testimonials": [{"text": "Yum", "author": "Kim"}],
            "pricing": [],
            "contact": {"email": "a@b.test", "phone": "1"},
            "footer": "©"
        });
        let fenced = format!("```json\n{page}\n```");
        let model = Arc::new(ScriptedModel::with_texts(&[&fenced]));

        let resp = app(&model)
            .oneshot(post_json("/api/generate", json!({"idea": "coffee"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await, page);
    }

    #[tokio::test]
    async fn analyze_invalid_json_returns_500_with_payload() {
        let model = Arc::new(ScriptedModel::with_texts(&["Sorry, I cannot help."]));
        let resp = app(&model)
            .oneshot(post_json("/analyze", json!({"idea": "coffee"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body(resp).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Failed to analyze idea"));
        assert!(detail.contains("Sorry, I cannot help."));
        assert_eq!(body["error"]["code"], "GENERATION_ERROR");
    }

    #[tokio::test]
    async fn analyze_empty_model_reply_returns_500() {
        let model = Arc::new(ScriptedModel::new());
        let resp = app(&model)
            .oneshot(post_json("/analyze", json!({"idea": "coffee"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("No response from model"));
    }

    #[tokio::test]
    async fn charts_wraps_market_analysis() {
        let reply = json!({"market_analysis": {"regional_analysis": {"regions": []}}});
        let model = Arc::new(ScriptedModel::with_texts(&[&reply.to_string()]));
        let resp = app(&model)
            .oneshot(post_json("/charts", json!({"idea": "coffee"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await, reply);
    }

    #[tokio::test]
    async fn mvp_returns_model_json() {
        let roadmap = json!({"mvpSummary": "Beans", "timeline": {"milestones": ["M1"]}});
        let model = Arc::new(ScriptedModel::with_texts(&[&roadmap.to_string()]));
        let resp = app(&model)
            .oneshot(post_json("/mvp", json!({"idea": "coffee"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await, roadmap);
    }

    #[tokio::test]
    async fn financial_analysis_returns_projection() {
        let model = Arc::new(ScriptedModel::new());
        let resp = app(&model)
            .oneshot(post_json(
                "/financial_analysis",
                json!({
                    "idea": "coffee",
                    "initial_revenue": 1000,
                    "revenue_growth_rate": 0,
                    "cogs_percentage": 40,
                    "operating_expenses": 0,
                    "initial_capital": 0,
                    "customer_acquisition_cost": 50,
                    "lifetime_value": 300
                }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["monthlyBurnRate"], 0.0);
        assert_eq!(body["runway"], 0.0);
        assert_eq!(body["profitabilityMetrics"]["returnOnEquity"], 0.0);
        assert_eq!(
            body["incomeStatementProjection"]["revenue"],
            json!([1000.0, 1000.0, 1000.0])
        );
        assert_eq!(body["customerMetrics"], json!({"cac": 50.0, "ltv": 300.0}));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn financial_analysis_missing_field_is_rejected() {
        let model = Arc::new(ScriptedModel::new());
        let resp = app(&model)
            .oneshot(post_json(
                "/financial_analysis",
                json!({"initial_revenue": 1000}),
            ))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn cors_preflight_allows_frontend_origin_only() {
        let model = Arc::new(ScriptedModel::new());
        let preflight = |origin: &str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/analyze")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap()
        };

        let resp = app(&model).oneshot(preflight(FRONTEND_ORIGIN)).await.unwrap();
        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            FRONTEND_ORIGIN
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "POST"
        );

        let resp = app(&model)
            .oneshot(preflight("http://evil.test"))
            .await
            .unwrap();
        // Exact-origin mode always advertises the configured origin; the browser blocks
        // any other caller because the header does not match it.
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            FRONTEND_ORIGIN
        );
    }

    #[test]
    fn cors_layer_rejects_invalid_origin() {
        assert!(cors_layer("bad\norigin").is_err());
    }
}
