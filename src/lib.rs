// src/lib.rs
//! Market gap analysis: prompt an LLM for a market report, then pull the
//! markdown tables and named sections back out of its free-text answer.
pub mod analysis;
pub mod extractors;
pub mod groq;
pub mod render;
pub mod storage;
pub mod utils;

pub use extractors::{extract_section, extract_table, ExtractedTable};
