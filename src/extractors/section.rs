// src/extractors/section.rs

// --- Imports ---
use regex::RegexBuilder;

// --- Extraction ---
/// Returns the trimmed text that follows `title` up to the next blank line.
///
/// The title is matched literally and case-insensitively and may be followed
/// by a `:` or `-` separator. The capture runs to the first `\n\n` or the
/// end of the text. A title with nothing after it yields `Some("")`, which is
/// distinct from the `None` returned when the title does not occur at all.
pub fn extract_section(text: &str, title: &str) -> Option<String> {
    let pattern = format!(r"{}\s*[:\-]?\s*(.*?)(?:\n\n|\z)", regex::escape(title));
    let re = match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!("Could not build section pattern for title '{}': {}", title, e);
            return None;
        }
    };

    let captured = re.captures(text)?.get(1)?.as_str().trim();
    tracing::trace!("Extracted section '{}' ({} bytes)", title, captured.len());
    Some(captured.to_string())
}
