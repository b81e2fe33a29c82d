// src/extractors/mod.rs
pub mod section;
pub mod table;

// Re-export key extraction types for convenience
pub use section::extract_section;
pub use table::{extract_table, ExtractedTable};
