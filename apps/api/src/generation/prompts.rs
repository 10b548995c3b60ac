// All LLM prompt templates for the gateway endpoints.
// Each template embeds an illustrative JSON shape that the model is asked to mimic.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Which of the four fixed instructional templates to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Content,
    Analysis,
    MarketChart,
    Mvp,
}

impl PromptKind {
    /// The illustrative JSON shape used for this kind when the caller has no override.
    pub fn default_template(self) -> &'static str {
        match self {
            PromptKind::Content => CONTENT_TEMPLATE,
            PromptKind::Analysis => ANALYSIS_TEMPLATE,
            PromptKind::MarketChart => MARKET_CHART_TEMPLATE,
            PromptKind::Mvp => MVP_TEMPLATE,
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            PromptKind::Content => CONTENT_PROMPT,
            PromptKind::Analysis => ANALYSIS_PROMPT,
            PromptKind::MarketChart => MARKET_CHART_PROMPT,
            PromptKind::Mvp => MVP_PROMPT,
        }
    }
}

/// Renders the prompt for `kind`. `idea` is interpolated as-is and `template` verbatim.
pub fn build_prompt(kind: PromptKind, idea: &str, template: &str) -> String {
    fill_placeholders(
        kind.instructions(),
        &[
            ("idea", idea),
            ("template", template),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Follow-up for the market chart path when some metric values came back as "N/A".
pub fn build_missing_metrics_prompt(idea: &str, missing_metrics: &[String]) -> String {
    let metrics = missing_metrics.join(", ");
    fill_placeholders(
        MISSING_METRICS_PROMPT,
        &[
            ("idea", idea),
            ("metrics", metrics.as_str()),
            ("template", MARKET_CHART_TEMPLATE),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Single pass over `instructions`: each `{name}` with a known value is replaced, and
/// substituted text is never scanned again.
fn fill_placeholders(instructions: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(instructions.len());
    let mut rest = instructions;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Instruction templates. Placeholders: {idea}, {template}, {json_only}, {metrics}.
// ────────────────────────────────────────────────────────────────────────────

const CONTENT_PROMPT: &str = r#"Generate content for a professional landing page about {idea}.
Include:
1. Navigation links (Home, Features, Pricing, Contact)
2. Hero section with headline, subheadline, and CTA
3. Features section with 3 features (title, description, icon name - use FontAwesome icon names)
4. Testimonials section with 2 testimonials (text and author)
5. Pricing section with 3 plans
6. Contact section
7. Footer content

Format the response as JSON:
{template}

{json_only}"#;

const ANALYSIS_PROMPT: &str = r#"You are a market research expert. Analyze this business idea and provide a detailed response in valid JSON format.

Input Idea: {idea}

Format your entire response as this JSON:
{template}

{json_only}"#;

const MARKET_CHART_PROMPT: &str = r#"You are a market research expert. Fetch numerical values for "{idea}".
Use your best published estimates. Every "value", "segment_size", "market_share" and "market_size" must be a number.

Return the data in exactly this JSON shape:
{template}

{json_only}"#;

const MVP_PROMPT: &str = r#"You are a startup product strategist. Plan a minimum viable product for this business idea.

Input Idea: {idea}

Generate MVP JSON in exactly this shape:
{template}

{json_only}"#;

const MISSING_METRICS_PROMPT: &str = r#"You are a market research expert. Your previous answer for "{idea}" reported "N/A" for these metrics: {metrics}.
Provide your best numerical estimate for each of them instead of "N/A", and return the complete data again.

Return the data in exactly this JSON shape:
{template}

{json_only}"#;

// ────────────────────────────────────────────────────────────────────────────
// Illustrative JSON shapes
// ────────────────────────────────────────────────────────────────────────────

pub const CONTENT_TEMPLATE: &str = r#"{
    "navigation": {
        "logo": "BrandName",
        "links": ["Home", "Features", "Pricing", "Contact"]
    },
    "hero": {
        "headline": "...",
        "subheadline": "...",
        "cta": "Get Started"
    },
    "features": [
        {
            "title": "...",
            "description": "...",
            "icon": "rocket"
        }
    ],
    "testimonials": [
        {
            "text": "...",
            "author": "..."
        }
    ],
    "pricing": [
        {
            "name": "Basic",
            "price": "29",
            "features": ["Feature 1", "Feature 2"]
        }
    ],
    "contact": {
        "email": "contact@example.com",
        "phone": "+1 234 567 890"
    },
    "footer": "© 2024 BrandName. All rights reserved."
}"#;

pub const ANALYSIS_TEMPLATE: &str = r#"{
    "summary": "string",
    "keyInsights": ["string"],
    "actionableSteps": ["string"],
    "dataHighlights": {
        "metric": "string",
        "context": "string"
    },
    "marketLandscape": {
        "overview": "string",
        "marketSize": "string",
        "growthTrends": "string",
        "keyDrivers": ["string"],
        "challenges": ["string"]
    },
    "competitorInsights": {
        "directCompetitors": ["string"],
        "indirectCompetitors": ["string"],
        "gapsInSolutions": "string",
        "competitiveMatrix": {
            "featureSets": {},
            "pricingModels": {},
            "userBase": {}
        }
    },
    "potentialBusinessModels": {
        "revenueModels": ["string"],
        "monetizationOpportunities": ["string"]
    },
    "feasibility": {
        "feasibilityScore": "number - a score from 1 to 100 (1 is bad, 100 is good, try to be definitive)",
        "feasibilityRecommendations": ["string"]
    },
    "financial_analysis": {
        "equipment": "number",
        "raw_materials": "number",
        "marketing": "number",
        "manufacturing_costs": "number",
        "total": "number",
        "unit": "string (USD, EUR, etc.)"
    }
}"#;

pub const MARKET_CHART_TEMPLATE: &str = r#"{
    "market_analysis": {
        "market_overview": {
            "total_market_size": {"value": "number", "unit": "USD Billion", "year": "number"},
            "total_market_size_projected": {"value": "number", "unit": "USD Billion", "year": "number"},
            "cagr": {"value": "number", "unit": "%"},
            "market_segments": [
                {"segment_name": "string", "segment_size": "number"}
            ]
        },
        "competitive_landscape": {
            "market_share_distribution": [
                {"competitor_name": "string", "market_share": "number"}
            ]
        },
        "regional_analysis": {
            "regions": [
                {"region": "string", "market_size": "number"}
            ]
        }
    }
}"#;

pub const MVP_TEMPLATE: &str = r#"{
    "mvpSummary": "Brief summary",
    "keyFeatures": ["Feature 1"],
    "targetAudience": "Audience",
    "developmentSteps": ["Step 1"],
    "technicalStack": ["Tech 1"],
    "systemDesign": "Architecture",
    "timeline": {
        "milestones": ["M1"],
        "estimatedCompletion": "Date"
    },
    "thirdPartyIntegrations": ["Integration"],
    "launchPlan": {
        "launchGoals": "Goals",
        "marketingStrategies": ["Strategy"],
        "successMetrics": ["Metric"]
    }
}"#;
