// src/analysis/prompt.rs
use crate::utils::error::PromptError;
use serde::Serialize;

/// Size of the businesses the analysis should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BusinessSize {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessSize::Small => "Small (Startups/SMEs)",
            BusinessSize::Medium => "Medium (Regional Players)",
            BusinessSize::Large => "Large (Enterprises)",
        }
    }
}

/// How much detail to ask the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    Basic,
    Moderate,
    #[default]
    Detailed,
}

impl AnalysisDepth {
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisDepth::Basic => "short and concise",
            AnalysisDepth::Moderate => "balanced with key details and some market statistics",
            AnalysisDepth::Detailed => {
                "extensive with tabular data, detailed market structure, SWOT analysis, \
                 customer personas, TAM/SAM/SOM, competitor analysis, and numerical insights"
            }
        }
    }
}

/// User-supplied parameters for one market gap analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub industry: String,
    pub region: Option<String>,
    pub business_size: BusinessSize,
    pub depth: AnalysisDepth,
}

impl AnalysisRequest {
    /// Validates and normalizes the request. A blank region means "global".
    pub fn new(
        industry: &str,
        region: Option<&str>,
        business_size: BusinessSize,
        depth: AnalysisDepth,
    ) -> Result<Self, PromptError> {
        let industry = industry.trim();
        if industry.is_empty() {
            return Err(PromptError::MissingIndustry);
        }

        let region = region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Ok(Self {
            industry: industry.to_string(),
            region,
            business_size,
            depth,
        })
    }

    /// Renders the market analyst prompt sent to the completion service.
    pub fn build_prompt(&self) -> String {
        let region_text = match &self.region {
            Some(region) => format!(" in {}", region),
            None => " globally".to_string(),
        };
        let size = self.business_size.label();

        format!(
            "You are a professional market analyst. Perform a detailed market gap analysis for the '{industry}' industry{region_text} for {size_lower} businesses.

Include:
1. Market Overview
2. TAM/SAM/SOM Table:
   | Metric | Value | Description |
3. Market Gap should be explained in 1000 words according to {size}
4. Suggested Product/Service
5. Customer Persona
6. Competitor Weakness Table:
   | Competitor | Weakness | How We Can Exploit |
7. Revenue Projection Table:
   | Year | Est. Users | ARPU | Revenue |
8. SWOT Analysis
9. Growth Forecast

Use markdown formatting for all tables.
Format all monetary values with $ or ₹ based on region.
Depth: {depth}
",
            industry = self.industry,
            region_text = region_text,
            size_lower = size.to_lowercase(),
            size = size,
            depth = self.depth.description(),
        )
    }
}
