use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body shared by every idea-driven endpoint.
///
/// A missing `idea` deserializes to "" so the gateway's blank-idea check answers with 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeaRequest {
    #[serde(default)]
    pub idea: String,
    // Financial seed numbers are accepted from the frontend alongside the idea.
    // They do not influence generation; /financial_analysis has its own request type.
    #[allow(dead_code)]
    pub initial_revenue: Option<f64>,
    #[allow(dead_code)]
    pub revenue_growth_rate: Option<f64>,
    #[allow(dead_code)]
    pub cogs_percentage: Option<f64>,
    #[allow(dead_code)]
    pub operating_expenses: Option<f64>,
    #[allow(dead_code)]
    pub initial_capital: Option<f64>,
    #[allow(dead_code)]
    pub monthly_burn_rate: Option<f64>,
    #[allow(dead_code)]
    pub customer_acquisition_cost: Option<f64>,
    #[allow(dead_code)]
    pub lifetime_value: Option<f64>,
}

/// Landing page copy produced by the content path.
///
/// All seven top-level keys are required. Sections other than testimonials are loosely
/// shaped and passed through exactly as the model wrote them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPageContent {
    pub navigation: Map<String, Value>,
    pub hero: Map<String, Value>,
    pub features: Vec<Value>,
    pub testimonials: Vec<Testimonial>,
    /// Plan objects by convention carry `name`, `price`, `features`.
    pub pricing: Vec<Value>,
    pub contact: Map<String, Value>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of `POST /charts`.
#[derive(Debug, Clone, Serialize)]
pub struct MarketChartResponse {
    pub market_analysis: Value,
}
