//! Diff report rendering.
//!
//! Wraps the core's `StructuralDiff` with the compared file names and
//! renders it for humans: numbered changes with `-`/`+` prefixed source
//! lines and a closing summary, or JSON via the output framework. This
//! is pure presentation; the core result is consumed as-is.

use astdelta_core::{Change, SourceSpan, StructuralDiff};
use colored::Colorize;
use serde::Serialize;

use crate::output::{OutputConfig, Outputter};

/// One comparison run, ready for rendering.
#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub original_file: String,
    pub modified_file: String,
    pub language: String,
    #[serde(flatten)]
    pub diff: StructuralDiff,
}

impl DiffReport {
    pub fn new(
        original_file: String,
        modified_file: String,
        language: String,
        diff: StructuralDiff,
    ) -> Self {
        Self {
            original_file,
            modified_file,
            language,
            diff,
        }
    }
}

impl Outputter for DiffReport {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut out = String::new();

        if self.diff.is_identical() {
            out.push_str(&format!(
                "{} No differences found. Files are structurally identical.\n",
                "OK".green().bold()
            ));
            return out;
        }

        let rule = "=".repeat(70);
        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!(
            "{} {} (ORIGINAL) -> {} (MODIFIED)\n",
            "Comparing:".cyan().bold(),
            self.original_file.yellow(),
            self.modified_file.green()
        ));
        out.push_str(&format!("{}\n\n", rule));

        for (i, change) in self.diff.changes.iter().enumerate() {
            render_change(&mut out, i + 1, change);
            out.push('\n');
        }

        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!(
            "{} {}\n",
            "Summary:".cyan().bold(),
            self.diff.summary.text()
        ));
        out.push_str(&format!("{}\n", rule));
        out
    }
}

fn render_change(out: &mut String, index: usize, change: &Change) {
    match change {
        Change::Deleted {
            original_span,
            original_text,
            kind,
            ..
        } => {
            out.push_str(&format!(
                "[{}] {} {}\n",
                index,
                "DELETED".red().bold(),
                format!("[{}]", kind).dimmed()
            ));
            out.push_str(&format!("    Original Line: {}\n", line_of(original_span)));
            out.push_str("    Code:\n");
            push_removed(out, original_text);
        }
        Change::Added {
            modified_span,
            modified_text,
            kind,
            ..
        } => {
            out.push_str(&format!(
                "[{}] {} {}\n",
                index,
                "ADDED".green().bold(),
                format!("[{}]", kind).dimmed()
            ));
            out.push_str(&format!("    Modified Line: {}\n", line_of(modified_span)));
            out.push_str("    Code:\n");
            push_added(out, modified_text);
        }
        Change::Modified {
            original_span,
            modified_span,
            original_text,
            modified_text,
            kind_transition,
            ..
        } => {
            let kind_tag = if kind_transition.from == kind_transition.to {
                format!("[{}]", kind_transition.from)
            } else {
                format!("[{} -> {}]", kind_transition.from, kind_transition.to)
            };
            out.push_str(&format!(
                "[{}] {} {}\n",
                index,
                "MODIFIED".yellow().bold(),
                kind_tag.dimmed()
            ));
            out.push_str(&format!(
                "    Line: {} -> {}\n",
                line_of(original_span),
                line_of(modified_span)
            ));
            out.push_str("    Original Code:\n");
            push_removed(out, original_text);
            out.push_str("    Modified Code:\n");
            push_added(out, modified_text);
        }
    }
}

fn line_of(span: &Option<SourceSpan>) -> String {
    match span {
        Some(span) => span.start_line.to_string(),
        None => "?".to_string(),
    }
}

fn push_removed(out: &mut String, text: &Option<String>) {
    match text {
        Some(text) => {
            for line in text.split('\n') {
                out.push_str(&format!("      {}\n", format!("- {}", line).red()));
            }
        }
        None => out.push_str(&format!("      {}\n", "(source unavailable)".dimmed())),
    }
}

fn push_added(out: &mut String, text: &Option<String>) {
    match text {
        Some(text) => {
            for line in text.split('\n') {
                out.push_str(&format!("      {}\n", format!("+ {}", line).green()));
            }
        }
        None => out.push_str(&format!("      {}\n", "(source unavailable)".dimmed())),
    }
}
