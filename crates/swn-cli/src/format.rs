//! Rendering generated records for the terminal.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;
use swn_tables::Record;

/// How records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Title line, then `label<TAB>:<TAB>value` lines.
    #[default]
    Text,
    /// A two-column markdown table.
    Markdown,
    /// A boxed terminal table.
    Table,
    /// A JSON object with a title and a list of fields.
    Json,
}

/// Render `record` in `mode`. `color` only affects text mode.
pub fn render(record: &dyn Record, mode: OutputMode, color: bool) -> Result<String, String> {
    let title = record.title();
    let fields = record.fields();
    match mode {
        OutputMode::Text => {
            let mut out = if color {
                format!("{}\n", title.bold())
            } else {
                format!("{title}\n")
            };
            for field in &fields {
                out.push_str(&format!("{}\t:\t{}\n", field.label, field.value));
            }
            Ok(out)
        }
        OutputMode::Markdown => {
            let mut out = format!("| {title} | |\n| --- | --- |\n");
            for field in &fields {
                out.push_str(&format!("| {} | {} |\n", field.label, field.value));
            }
            Ok(out)
        }
        OutputMode::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![title.as_str(), ""]);
            for field in &fields {
                table.add_row(vec![field.label.as_str(), field.value.as_str()]);
            }
            Ok(format!("{table}\n"))
        }
        OutputMode::Json => {
            let value = json!({ "title": title, "fields": fields });
            serde_json::to_string_pretty(&value)
                .map(|s| s + "\n")
                .map_err(|e| format!("failed to serialize {title}: {e}"))
        }
    }
}

/// Render several records, separated by a blank line.
pub fn render_all(records: &[&dyn Record], mode: OutputMode, color: bool) -> Result<String, String> {
    let mut parts = Vec::with_capacity(records.len());
    for record in records {
        parts.push(render(*record, mode, color)?);
    }
    Ok(parts.join("\n"))
}
