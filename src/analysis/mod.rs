// src/analysis/mod.rs
pub mod prompt;
pub mod report;

pub use prompt::{AnalysisDepth, AnalysisRequest, BusinessSize};
pub use report::{AnalysisReport, NamedSection, NamedTable};
