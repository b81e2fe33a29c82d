// src/analysis/report.rs
use crate::analysis::prompt::AnalysisRequest;
use crate::extractors::{extract_section, extract_table, ExtractedTable};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tables the prompt asks the model to produce, in prompt order.
pub const KNOWN_TABLES: &[&str] = &[
    "TAM/SAM/SOM Table",
    "Competitor Weakness Table",
    "Revenue Projection Table",
];

/// Free-text sections the prompt asks for, in prompt order.
pub const KNOWN_SECTIONS: &[&str] = &[
    "Market Overview",
    "Market Gap",
    "Suggested Product/Service",
    "Customer Persona",
    "SWOT Analysis",
    "Growth Forecast",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTable {
    pub name: String,
    pub table: ExtractedTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSection {
    pub name: String,
    pub content: String,
}

/// A model response together with everything we could pull out of it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub request: AnalysisRequest,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub markdown: String,
    pub tables: Vec<NamedTable>,
    pub sections: Vec<NamedSection>,
}

impl AnalysisReport {
    /// Runs the extractors for every known table and section over `markdown`.
    /// Anything the model left out is simply missing from the report.
    pub fn from_response(request: AnalysisRequest, model: &str, markdown: String) -> Self {
        let tables = KNOWN_TABLES
            .iter()
            .filter_map(|name| match extract_table(&markdown, name) {
                Some(table) => Some(NamedTable { name: name.to_string(), table }),
                None => {
                    tracing::debug!("No '{}' found in response", name);
                    None
                }
            })
            .collect();

        let sections = KNOWN_SECTIONS
            .iter()
            .filter_map(|name| match extract_section(&markdown, name) {
                Some(content) => Some(NamedSection { name: name.to_string(), content }),
                None => {
                    tracing::debug!("No '{}' section found in response", name);
                    None
                }
            })
            .collect();

        let report = Self {
            request,
            model: model.to_string(),
            generated_at: Utc::now(),
            markdown,
            tables,
            sections,
        };
        tracing::info!(
            "Extracted {} tables and {} sections from response ({} bytes)",
            report.tables.len(),
            report.sections.len(),
            report.markdown.len()
        );
        report
    }

    pub fn table(&self, name: &str) -> Option<&ExtractedTable> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| &t.table)
    }

    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.content.as_str())
    }
}
