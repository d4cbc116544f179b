//! Output rendering for list views and select controls.
//!
//! Three formats: an aligned text table for terminals, and JSON or YAML
//! dumps of the same view structures for scripting.

use std::fmt::Write as _;

use console::style;
use planboard_select::SelectView;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::model::ListItem;
use crate::views::{ListViewResult, Message};

const COLUMN_GAP: &str = "  ";

/// Output format for command results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table with styled headers
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Renders a list view.
pub fn render_list<R: ListItem>(view: &ListViewResult<R>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(list_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
    }
}

/// Renders the visible state of a select control.
pub fn render_select(view: &SelectView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(select_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
    }
}

fn list_text<R: ListItem>(view: &ListViewResult<R>) -> String {
    let mut out = String::new();
    if let Some(intro) = &view.intro {
        let _ = writeln!(out, "{intro}");
    }
    if let Some(summary) = &view.filter_summary {
        let _ = writeln!(out, "{}", style(format!("Filtered by: {summary}")).dim());
    }
    if !view.items.is_empty() {
        let rows: Vec<Vec<String>> = view.items.iter().map(R::cells).collect();
        out.push_str(&table(R::columns(), &rows));
    }
    if let Some(ending) = &view.ending {
        let _ = writeln!(out, "{ending}");
    }
    for message in &view.messages {
        let _ = writeln!(out, "{}", message_line(message));
    }
    out
}

fn message_line(message: &Message) -> String {
    message
        .level
        .style()
        .apply_to(format!("[{}] {}", message.level, message.text))
        .to_string()
}

/// Column widths in terminal cells, wide enough for header and every row.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let mut out = String::new();

    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| style(pad(h, *w)).bold().to_string())
        .collect();
    let _ = writeln!(out, "{}", header.join(COLUMN_GAP).trim_end());

    for row in rows {
        let line: Vec<String> = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
        let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
    }
    out
}

fn select_text(view: &SelectView) -> String {
    let mut out = String::new();
    let label = if view.is_placeholder {
        style(&view.label).dim().to_string()
    } else {
        view.label.clone()
    };
    let _ = writeln!(out, "{label}");
    if view.show_search && !view.search_term.is_empty() {
        let _ = writeln!(out, "Search: {}", view.search_term);
    }
    if !view.is_open {
        return out;
    }
    if view.options.is_empty() {
        let _ = writeln!(out, "{}", style("No options match").dim());
        return out;
    }

    let width = view.options.iter().map(|o| o.label.width()).max().unwrap_or(0);
    for option in &view.options {
        let mark = if option.selected { "[x]" } else { "[ ]" };
        let mut line = format!("{mark} {}", pad(&option.label, width));
        if let Some(description) = &option.description {
            line.push_str(COLUMN_GAP);
            line.push_str(description);
        }
        if option.disabled {
            line = format!("{} (unavailable)", style(line.trim_end()).dim());
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::forms;
    use crate::model::Project;
    use crate::views::list_view;
    use planboard_query::{query, QueryDescriptor};

    fn project_view(descriptor: &QueryDescriptor) -> ListViewResult<Project> {
        let projects = fixtures::projects();
        let result = query(&projects, descriptor);
        ListViewResult::from_query(&result, descriptor, None)
    }

    #[test]
    fn widths_count_terminal_cells() {
        let rows = vec![vec!["日本".to_string(), "x".to_string()]];
        assert_eq!(column_widths(&["A", "Long"], &rows), vec![4, 4]);
        assert_eq!(pad("日本", 6), "日本  ");
    }

    #[test]
    fn text_table_aligns_columns() {
        console::set_colors_enabled(false);
        let rows = vec![
            vec!["1".to_string(), "Short".to_string()],
            vec!["22".to_string(), "A longer name".to_string()],
        ];
        let text = table(&["ID", "Name"], &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["ID  Name", "1   Short", "22  A longer name"]);
    }

    #[test]
    fn text_list_includes_rows_and_messages() {
        let view = project_view(&QueryDescriptor::new().with_search("mobile"));
        let text = render_list(&view, OutputFormat::Text).unwrap();
        assert!(text.contains("Showing 1-1 of 1 projects"));
        assert!(text.contains("Mobile App Development"));
        assert!(!text.contains("Website Redesign"));
        assert!(text.contains("search \"mobile\""));

        let empty = project_view(&QueryDescriptor::new().with_search("zzz"));
        let text = render_list(&empty, OutputFormat::Text).unwrap();
        assert!(text.contains("[info] No projects match"));
    }

    #[test]
    fn json_list_is_structured() {
        let view = project_view(&QueryDescriptor::new().with_filter("status", "completed"));
        let json = render_list(&view, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_count"], 2);
        assert_eq!(value["items"][0]["status"], "completed");
        assert_eq!(value["pagination"]["page_size"], 12);
    }

    #[test]
    fn yaml_list_round_trips_items() {
        let view = list_view(fixtures::projects().into_iter().take(1)).build();
        let yaml = render_list(&view, OutputFormat::Yaml).unwrap();
        let back: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back["items"][0]["name"], "Website Redesign");
        assert_eq!(back["items"][0]["due_date"], "2024-03-15");
    }

    #[test]
    fn select_text_marks_selected_and_disabled() {
        console::set_colors_enabled(false);
        let mut select = forms::project_select(&fixtures::projects(), Some("Website Redesign"));
        select.activate();
        let text = render_select(&select.view(), OutputFormat::Text).unwrap();
        assert!(text.lines().next().unwrap().starts_with("Website Redesign"));
        assert!(text.contains("[x] Website Redesign"));
        assert!(text.contains("Data Analytics Dashboard"));
        assert!(text.contains("(unavailable)"));
    }

    #[test]
    fn closed_select_shows_label_only() {
        let select = forms::status_select(None);
        let text = render_select(&select.view(), OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
