//! Plain-text and JSON rendering of a pipeline report.

use crate::engine::pipeline::Report;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    section(&mut out, "Grammar Correction");
    out.push_str(&format!("Original:                {}\n", report.original));
    out.push_str(&format!("Corrected (grammar only): {}\n", report.grammar_corrected));
    if !report.matches.is_empty() {
        out.push_str("\nCorrections made:\n");
        for m in &report.matches {
            out.push_str(&format!(
                "  - {} \u{2192} {}\n",
                m.message,
                m.best_replacement().unwrap_or("None")
            ));
        }
    }

    section(&mut out, "Final Corrected Sentence (Grammar + POS Fixes)");
    out.push_str(&report.corrected);
    out.push('\n');

    section(&mut out, "POS Analysis");
    let rows: Vec<(String, String)> = report.analysis.pos_tags.clone();
    out.push_str(&table(("Word", "POS Tag"), &rows));

    out.push_str("\nPOS Frequency\n");
    let rows: Vec<(String, String)> = report
        .analysis
        .pos_frequency
        .iter()
        .map(|(tag, count)| (tag.to_string(), count.to_string()))
        .collect();
    out.push_str(&table(("POS Tag", "Count"), &rows));

    section(&mut out, "Rephrasing Suggestions");
    for (i, rephrasing) in report.rephrasings.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, rephrasing));
    }

    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.width()));
    out.push('\n');
}

/// Two-column table, first column padded to its widest cell.
fn table(header: (&str, &str), rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(left, _)| left.width())
        .chain(std::iter::once(header.0.width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut line = |left: &str, right: &str| {
        out.push_str(left);
        out.push_str(&" ".repeat(width - left.width() + 2));
        out.push_str(right);
        out.push('\n');
    };

    line(header.0, header.1);
    line(&"-".repeat(header.0.width()), &"-".repeat(header.1.width()));
    for (left, right) in rows {
        line(left, right);
    }
    out
}
