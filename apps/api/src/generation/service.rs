//! Gateway service — one orchestrator for every endpoint.
//!
//! Flow per model-backed operation:
//!   build_prompt → model (fresh single-turn call, bounded by timeout) →
//!   extract_payload → parse / validate → typed result.
//!
//! The financial projection runs locally and never touches the model.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::finance::projection::{self, FinancialAnalysisRequest, FinancialProjectionResult};
use crate::generation::models::LandingPageContent;
use crate::generation::prompts::{build_missing_metrics_prompt, build_prompt, PromptKind};
use crate::llm_client::{LanguageModel, LlmError};
use crate::response::{self, extract_payload, parse_landing_page, ResponseError};

/// Metric values the model uses when it has no figure.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidArgument(String),

    /// `context` names the failed operation; the cause's message follows it.
    #[error("{context}: {source}")]
    Failed {
        context: &'static str,
        #[source]
        source: FailureCause,
    },
}

#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Model(#[from] LlmError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("{0}")]
    Internal(String),
}

trait FailureContext<T> {
    fn context(self, context: &'static str) -> Result<T, GatewayError>;
}

impl<T> FailureContext<T> for Result<T, FailureCause> {
    fn context(self, context: &'static str) -> Result<T, GatewayError> {
        self.map_err(|source| GatewayError::Failed { context, source })
    }
}

#[derive(Clone)]
pub struct GatewayService {
    model: Arc<dyn LanguageModel>,
    model_timeout: Duration,
}

impl GatewayService {
    pub fn new(model: Arc<dyn LanguageModel>, model_timeout: Duration) -> Self {
        Self {
            model,
            model_timeout,
        }
    }

    /// POST /api/generate — landing page copy with the full seven-field check.
    pub async fn generate_landing_page(
        &self,
        idea: &str,
    ) -> Result<LandingPageContent, GatewayError> {
        require_idea(idea)?;
        info!("Generating landing page via {}", self.model.name());

        let prompt = build_prompt(
            PromptKind::Content,
            idea,
            PromptKind::Content.default_template(),
        );
        self.landing_page(&prompt)
            .await
            .context("Content generation failed")
    }

    /// POST /analyze — market research analysis as loosely-shaped JSON.
    pub async fn analyze_idea(&self, idea: &str) -> Result<Value, GatewayError> {
        require_idea(idea)?;
        info!("Analyzing idea via {}", self.model.name());

        let prompt = build_prompt(
            PromptKind::Analysis,
            idea,
            PromptKind::Analysis.default_template(),
        );
        self.ask_json(&prompt)
            .await
            .context("Failed to analyze idea")
    }

    /// POST /charts — the `market_analysis` object only, `{}` when the model omits it.
    ///
    /// If any metric's `"value"` is "N/A", one follow-up prompt asks for those metrics
    /// by name and its result replaces the first. There is no second follow-up.
    pub async fn analyze_market_data(&self, idea: &str) -> Result<Value, GatewayError> {
        require_idea(idea)?;
        info!("Fetching market chart data via {}", self.model.name());

        self.market_data(idea)
            .await
            .context("Market analysis failed")
    }

    /// POST /mvp — MVP roadmap returned verbatim.
    pub async fn generate_mvp_roadmap(&self, idea: &str) -> Result<Value, GatewayError> {
        require_idea(idea)?;
        info!("Generating MVP roadmap via {}", self.model.name());

        let prompt = build_prompt(PromptKind::Mvp, idea, PromptKind::Mvp.default_template());
        self.ask_json(&prompt)
            .await
            .context("Failed to generate MVP roadmap")
    }

    /// POST /financial_analysis — local projection, no model call.
    pub fn compute_financial_analysis(
        &self,
        request: &FinancialAnalysisRequest,
    ) -> Result<FinancialProjectionResult, GatewayError> {
        panic::catch_unwind(AssertUnwindSafe(|| projection::project(request)))
            .map_err(|_| FailureCause::Internal("projection aborted unexpectedly".to_string()))
            .context("Financial analysis failed")
    }

    // ────────────────────────────────────────────────────────────────────────
    // Internals
    // ────────────────────────────────────────────────────────────────────────

    /// One fresh single-turn model call; all returned text parts are concatenated.
    async fn ask(&self, prompt: &str) -> Result<String, LlmError> {
        let reply = tokio::time::timeout(self.model_timeout, self.model.send_prompt(prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.model_timeout))??;
        Ok(reply.text())
    }

    async fn ask_json(&self, prompt: &str) -> Result<Value, FailureCause> {
        let text = self.ask(prompt).await?;
        Ok(response::extract_json(&text)?)
    }

    async fn landing_page(&self, prompt: &str) -> Result<LandingPageContent, FailureCause> {
        let text = self.ask(prompt).await?;
        let value = parse_landing_page(extract_payload(&text)?)?;
        debug!(
            "Generated content: {}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
        let content = serde_json::from_value(value).map_err(ResponseError::InvalidShape)?;
        Ok(content)
    }

    async fn market_data(&self, idea: &str) -> Result<Value, FailureCause> {
        let prompt = build_prompt(
            PromptKind::MarketChart,
            idea,
            PromptKind::MarketChart.default_template(),
        );
        let analysis = market_analysis_of(self.ask_json(&prompt).await?);

        let missing = find_missing_metrics(&analysis);
        if missing.is_empty() {
            return Ok(analysis);
        }

        warn!(
            "{} market metric(s) reported as {NOT_AVAILABLE}, requesting them once more: {}",
            missing.len(),
            missing.join(", ")
        );
        let follow_up = build_missing_metrics_prompt(idea, &missing);
        let analysis = market_analysis_of(self.ask_json(&follow_up).await?);

        let still_missing = find_missing_metrics(&analysis);
        if !still_missing.is_empty() {
            warn!(
                "Follow-up still reported {NOT_AVAILABLE} for: {}",
                still_missing.join(", ")
            );
        }
        Ok(analysis)
    }
}

fn require_idea(idea: &str) -> Result<(), GatewayError> {
    if idea.trim().is_empty() {
        return Err(GatewayError::InvalidArgument("Idea is required".to_string()));
    }
    Ok(())
}

fn market_analysis_of(parsed: Value) -> Value {
    match parsed {
        Value::Object(mut map) => map
            .remove("market_analysis")
            .unwrap_or_else(|| Value::Object(Map::new())),
        _ => Value::Object(Map::new()),
    }
}

/// Dotted paths of every object whose `"value"` is exactly "N/A", in key order.
fn find_missing_metrics(analysis: &Value) -> Vec<String> {
    let mut path = Vec::new();
    let mut missing = Vec::new();
    collect_missing(analysis, &mut path, &mut missing);
    missing
}

fn collect_missing(value: &Value, path: &mut Vec<String>, missing: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if map.get("value").and_then(Value::as_str) == Some(NOT_AVAILABLE) {
                missing.push(metric_name(path));
            }
            for (key, child) in map.iter().filter(|(key, _)| key.as_str() != "value") {
                path.push(key.clone());
                collect_missing(child, path, missing);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(format!("[{index}]"));
                collect_missing(item, path, missing);
                path.pop();
            }
        }
        _ => {}
    }
}

fn metric_name(path: &[String]) -> String {
    let mut name = String::new();
    for segment in path {
        if !name.is_empty() && !segment.starts_with('[') {
            name.push('.');
        }
        name.push_str(segment);
    }
    if name.is_empty() {
        name.push_str("market_analysis");
    }
    name
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
