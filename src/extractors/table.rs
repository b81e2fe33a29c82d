// src/extractors/table.rs

// --- Imports ---
use regex::RegexBuilder;
use serde::Serialize;

// --- Data Structures ---
/// A markdown table pulled out of free text.
///
/// Every row holds exactly `headers.len()` cells. Rows with a different
/// cell count are dropped during parsing, never padded or truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True when the table has a header line but no accepted data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table back to pipe-delimited markdown with a `---` divider.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&markdown_row(&self.headers));
        out.push('\n');
        let divider: Vec<String> = self.headers.iter().map(|_| "---".to_string()).collect();
        out.push_str(&markdown_row(&divider));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&markdown_row(row));
        }
        out
    }
}

fn markdown_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

// --- Extraction ---
/// Finds the first markdown table that follows `keyword` and parses it.
///
/// The keyword is matched literally and case-insensitively, and may be
/// separated from the table by any amount of text. Returns `None` when the
/// keyword is missing, when no pipe-prefixed line follows it, or when the
/// first block after it has fewer than two table lines. A later table under
/// another heading is never used in its place.
///
/// The second table line is always treated as the `---` divider and skipped.
/// A table written without a divider therefore loses its first data row.
pub fn extract_table(text: &str, keyword: &str) -> Option<ExtractedTable> {
    let block = find_table_block(text, keyword)?;
    parse_table_block(block)
}

/// Locates the block of consecutive `|`-prefixed lines after `keyword`.
fn find_table_block<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    // Lazy gap up to the first newline that opens a run of table lines.
    let pattern = format!(
        r"{}.*?\n(\|[^\n]*(?:\n\|[^\n]*)*)",
        regex::escape(keyword)
    );
    let re = match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!("Could not build table pattern for keyword '{}': {}", keyword, e);
            return None;
        }
    };

    let block = re.captures(text)?.get(1)?.as_str();
    tracing::trace!("Found candidate table block for '{}' ({} bytes)", keyword, block.len());
    Some(block)
}

/// Header line, divider line, then data lines.
fn parse_table_block(block: &str) -> Option<ExtractedTable> {
    let lines: Vec<&str> = block
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|'))
        .collect();

    if lines.len() < 2 {
        return None;
    }

    let headers = split_cells(lines[0]);
    let rows: Vec<Vec<String>> = lines[2..]
        .iter()
        .map(|line| split_cells(line))
        .filter(|row| {
            let keep = row.len() == headers.len();
            if !keep {
                tracing::trace!("Dropping table row with {} cells (expected {})", row.len(), headers.len());
            }
            keep
        })
        .collect();

    Some(ExtractedTable { headers, rows })
}

/// Splits a table line on `|`, drops the outer fields, trims the rest.
fn split_cells(line: &str) -> Vec<String> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 2 {
        return Vec::new();
    }
    fields[1..fields.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const COMPETITOR_TABLE: &str = "Competitor Weakness Table:\n\
        | Competitor | Weakness | How We Can Exploit |\n\
        | --- | --- | --- |\n\
        | Acme | Slow support | Faster SLAs |";

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_competitor_table() {
        let table = extract_table(COMPETITOR_TABLE, "Competitor Weakness Table")
            .expect("table should be found");

        assert_eq!(table.headers(), strings(&["Competitor", "Weakness", "How We Can Exploit"]).as_slice());
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0], strings(&["Acme", "Slow support", "Faster SLAs"]));
    }

    #[test]
    fn test_keyword_missing() {
        assert!(extract_table(COMPETITOR_TABLE, "Revenue Projection Table").is_none());
        assert!(extract_table("", "Anything").is_none());
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let table = extract_table(COMPETITOR_TABLE, "competitor WEAKNESS table");
        assert!(table.is_some(), "Keyword in different case should still match");
    }

    #[test]
    fn test_keyword_without_table() {
        let text = "Competitor Weakness Table:\nWe could not find any competitors.\n\nThe end.";
        assert!(extract_table(text, "Competitor Weakness Table").is_none());
    }

    #[test]
    fn test_single_table_line_is_absent() {
        let text = "Revenue Projection Table:\n| Year | Revenue |\nno more table here";
        assert!(extract_table(text, "Revenue Projection Table").is_none());
    }

    #[test]
    fn test_short_block_does_not_borrow_later_table() {
        let text = "Revenue Projection Table:\n\
            | Year | Revenue |\n\
            no more table here\n\
            \n\
            Other:\n\
            | a | b |\n\
            | --- | --- |\n\
            | 1 | 2 |";

        assert!(extract_table(text, "Revenue Projection Table").is_none());
        assert!(extract_table(text, "Other").is_some());
    }

    #[test]
    fn test_dimensions_and_order() {
        let text = "## 7. Revenue Projection Table\n\
            Here are the numbers.\n\
            | Year | Est. Users | ARPU | Revenue |\n\
            |------|-----------:|:----:|---------|\n\
            |  2025 | 1,000 | $10 | $10,000 |\n\
            | 2026 | 5,000 | $12 |   $60,000   |\n\
            | 2027 | 20,000 | $15 | $300,000 |\n\
            \n\
            ## 8. SWOT Analysis";

        let table = extract_table(text, "Revenue Projection Table").expect("table should be found");
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.rows().len(), 3);
        assert!(table.rows().iter().all(|row| row.len() == 4));
        assert_eq!(table.rows()[0][0], "2025");
        assert_eq!(table.rows()[1][3], "$60,000");
        assert_eq!(table.rows()[2], strings(&["2027", "20,000", "$15", "$300,000"]));
    }

    #[test]
    fn test_malformed_rows_dropped_without_shifting() {
        let text = "TAM/SAM/SOM Table:\n\
            | Metric | Value | Description |\n\
            | --- | --- | --- |\n\
            | TAM | $10B | Total market |\n\
            | SAM | $2B |\n\
            | SOM | $200M | Obtainable share | extra |\n\
            | Growth | 12% | Annual |";

        let table = extract_table(text, "TAM/SAM/SOM Table").expect("table should be found");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], strings(&["TAM", "$10B", "Total market"]));
        assert_eq!(table.rows()[1], strings(&["Growth", "12%", "Annual"]));
    }

    #[test]
    fn test_missing_divider_loses_first_row() {
        let text = "Competitor Weakness Table:\n\
            | Competitor | Weakness | How We Can Exploit |\n\
            | Acme | Slow support | Faster SLAs |\n\
            | Globex | High prices | Cheaper tier |";

        let table = extract_table(text, "Competitor Weakness Table").expect("table should be found");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0][0], "Globex");
    }

    #[test]
    fn test_first_table_after_keyword() {
        let text = "| Stray | Table |\n| --- | --- |\n| a | b |\n\n\
            Competitor Weakness Table - see below\n\n\
            | Competitor | Weakness | How We Can Exploit |\n\
            | --- | --- | --- |\n\
            | Initech | Legacy stack | Modern API |\n\n\
            Revenue Projection Table:\n\
            | Year | Revenue |\n| --- | --- |\n| 2025 | $1M |";

        let table = extract_table(text, "Competitor Weakness Table").expect("table should be found");
        assert_eq!(table.headers()[0], "Competitor");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0][0], "Initech");
    }

    #[test]
    fn test_keyword_with_regex_metacharacters() {
        let text = "Growth (5y) Table?\n| Year | Rate |\n| --- | --- |\n| 2025 | 10% |";
        let table = extract_table(text, "Growth (5y) Table?").expect("keyword should match literally");
        assert_eq!(table.rows()[0], strings(&["2025", "10%"]));
    }

    #[test]
    fn test_header_only_table() {
        let text = "SWOT Table:\n| Strengths | Weaknesses |\n| --- | --- |\n\nNothing else.";
        let table = extract_table(text, "SWOT Table").expect("header and divider are enough");
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_headers_kept() {
        let text = "Table:\n| Value | Value |\n| --- | --- |\n| 1 | 2 |";
        let table = extract_table(text, "Table").expect("table should be found");
        assert_eq!(table.headers(), strings(&["Value", "Value"]).as_slice());
    }

    #[test]
    fn test_crlf_lines() {
        let text = "Competitor Weakness Table:\r\n| A | B |\r\n| --- | --- |\r\n| x | y |\r\n";
        let table = extract_table(text, "Competitor Weakness Table").expect("table should be found");
        assert_eq!(table.headers(), strings(&["A", "B"]).as_slice());
        assert_eq!(table.rows()[0], strings(&["x", "y"]));
    }

    #[test]
    fn test_idempotent() {
        let first = extract_table(COMPETITOR_TABLE, "Competitor Weakness Table");
        let second = extract_table(COMPETITOR_TABLE, "Competitor Weakness Table");
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_markdown_reparses() {
        let table = extract_table(COMPETITOR_TABLE, "Competitor Weakness Table").unwrap();
        let rendered = format!("Competitor Weakness Table\n{}", table.to_markdown());
        assert_eq!(extract_table(&rendered, "Competitor Weakness Table"), Some(table));
    }
}
