// src/render/mod.rs
use crate::analysis::report::AnalysisReport;
use pulldown_cmark::{html as cmark_html, Event, Options, Parser};
use std::fs;
use std::path::Path;

const PANEL_STYLE: &str = "\
.main-title { text-align: center; color: #0288D1; font-size: 42px; font-weight: bold; margin-bottom: 10px; }
.sub-title { text-align: center; font-size: 18px; color: #455A64; margin-bottom: 30px; }
.section-box { background-color: #FFFFFF; padding: 25px; border-radius: 12px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); margin-top: 20px; }
.insights-output { background-color: #E1F5FE; padding: 20px; border-left: 5px solid #0288D1; border-radius: 8px; font-family: 'Arial', sans-serif; }
.insights-output table { border-collapse: collapse; margin: 12px 0; }
.insights-output th, .insights-output td { border: 1px solid #B0BEC5; padding: 6px 10px; text-align: left; }
.insights-output th { background-color: #FFFFFF; }
";

/// Escapes text for safe inclusion in HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a standalone HTML page with the response in the styled insights panel.
pub fn render_html(report: &AnalysisReport) -> String {
    let request = &report.request;
    let region = request.region.as_deref().unwrap_or("Global");

    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Market Gap Analysis: {}</title>\n",
        escape_html(&request.industry)
    ));
    html.push_str("<style>\n");
    html.push_str(PANEL_STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1 class='main-title'>Market Gap Analyzer</h1>\n");
    html.push_str(&format!(
        "<p class='sub-title'>{} &middot; {} &middot; {} &middot; generated {} with {}</p>\n",
        escape_html(&request.industry),
        escape_html(region),
        escape_html(request.business_size.label()),
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        escape_html(&report.model),
    ));

    html.push_str("<div class='section-box'><div class='insights-output'>\n");
    html.push_str(&markdown_to_html(&report.markdown));
    html.push_str("</div></div>\n</body>\n</html>\n");
    html
}

/// Renders model markdown (with tables) to HTML. Raw HTML in the input is
/// emitted as escaped text.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    cmark_html::push_html(&mut out, parser);
    out
}

/// Writes the rendered page to `path`.
pub fn save_html(report: &AnalysisReport, path: &Path) -> std::io::Result<()> {
    fs::write(path, render_html(report))?;
    tracing::info!("Saved rendered analysis to {}", path.display());
    Ok(())
}
