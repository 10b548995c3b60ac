//! Three-year financial projection — pure, deterministic, no model call.
//!
//! Algorithm (year y = 1..=3):
//! - revenue[1] = initial revenue; revenue[y] = revenue[y-1] × (1 + growth rate)
//! - cogs[y] = revenue[y] × cogs% / 100
//! - gross profit[y] = revenue[y] − cogs[y]
//! - net profit[y] = gross profit[y] − operating expenses (flat every year)
//! - margins are percentages of revenue, 0 when revenue is 0
//! - monthly burn rate = operating expenses; runway = capital / burn, 0 when burn is 0
//! - return on equity = net profit[1] / capital × 100, 0 when capital is 0
//!
//! Zero denominators yield 0 instead of an error, so the function is total.

use serde::{Deserialize, Serialize};

pub const PROJECTION_YEARS: usize = 3;

/// Request body for `POST /financial_analysis`. Unknown fields (e.g. `idea`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialAnalysisRequest {
    pub initial_revenue: f64,
    /// Fractional, e.g. 0.1 for 10% growth per year.
    pub revenue_growth_rate: f64,
    /// Percentage of revenue, e.g. 40 for 40%.
    pub cogs_percentage: f64,
    pub operating_expenses: f64,
    pub initial_capital: f64,
    pub customer_acquisition_cost: f64,
    pub lifetime_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjectionResult {
    pub monthly_burn_rate: f64,
    pub runway: f64,
    pub customer_metrics: CustomerMetrics,
    pub income_statement_projection: IncomeStatementProjection,
    pub profitability_metrics: ProfitabilityMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerMetrics {
    pub cac: f64,
    pub ltv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementProjection {
    pub revenue: [f64; PROJECTION_YEARS],
    pub cogs: [f64; PROJECTION_YEARS],
    pub gross_profit: [f64; PROJECTION_YEARS],
    pub net_profit: [f64; PROJECTION_YEARS],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityMetrics {
    pub return_on_equity: f64,
    pub gross_margin: [f64; PROJECTION_YEARS],
    pub net_profit_margin: [f64; PROJECTION_YEARS],
}

/// Computes the projection. Inputs are passed through without range checks.
pub fn project(request: &FinancialAnalysisRequest) -> FinancialProjectionResult {
    let mut revenue = [0.0; PROJECTION_YEARS];
    let mut cogs = [0.0; PROJECTION_YEARS];
    let mut gross_profit = [0.0; PROJECTION_YEARS];
    let mut net_profit = [0.0; PROJECTION_YEARS];

    let mut year_revenue = request.initial_revenue;
    for year in 0..PROJECTION_YEARS {
        if year > 0 {
            year_revenue *= 1.0 + request.revenue_growth_rate;
        }
        revenue[year] = year_revenue;
        cogs[year] = year_revenue * (request.cogs_percentage / 100.0);
        gross_profit[year] = year_revenue - cogs[year];
        net_profit[year] = gross_profit[year] - request.operating_expenses;
    }

    let gross_margin: [f64; PROJECTION_YEARS] =
        std::array::from_fn(|y| percent_of(gross_profit[y], revenue[y]));
    let net_profit_margin: [f64; PROJECTION_YEARS] =
        std::array::from_fn(|y| percent_of(net_profit[y], revenue[y]));

    // Carried through unchanged: operating expenses double as the monthly burn figure.
    let monthly_burn_rate = request.operating_expenses;
    let runway = ratio_or_zero(request.initial_capital, monthly_burn_rate);
    let return_on_equity = percent_of(net_profit[0], request.initial_capital);

    FinancialProjectionResult {
        monthly_burn_rate,
        runway,
        customer_metrics: CustomerMetrics {
            cac: request.customer_acquisition_cost,
            ltv: request.lifetime_value,
        },
        income_statement_projection: IncomeStatementProjection {
            revenue,
            cogs,
            gross_profit,
            net_profit,
        },
        profitability_metrics: ProfitabilityMetrics {
            return_on_equity,
            gross_margin,
            net_profit_margin,
        },
    }
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    ratio_or_zero(part, whole) * 100.0
}
