use std::io::IsTerminal;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::Value;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

pub mod table;

/// Narrower `COLUMNS` values are ignored.
const MIN_TABLE_WIDTH: usize = 40;

static TABLE_OPTIONS: OnceLock<table::TableOptions> = OnceLock::new();

/// Columns shown first, in this order, when rendering result rows.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "timestamp",
    "verdict",
    "confidence",
    "sentiment",
    "sentimentScore",
    "aiScore",
    "text",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Resolve table styling once from the global flags and the terminal.
pub fn init(flags: &GlobalFlags) {
    let options = table_options_for(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    let _ = TABLE_OPTIONS.set(options);
}

fn table_options_for(
    flags: &GlobalFlags,
    stdout_is_terminal: bool,
    no_color: bool,
    columns: Option<&str>,
) -> table::TableOptions {
    let color = flags.format == OutputFormat::Table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_terminal && !no_color,
        };
    let max_width = columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TABLE_WIDTH);

    table::TableOptions { max_width, color }
}

fn table_options() -> table::TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(table::TableOptions {
        max_width: None,
        color: false,
    })
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| column_rank(&a.0).cmp(&column_rank(&b.0)).then(a.0.cmp(&b.0)));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&headers, &rows, table_options()))
        }
        scalar => {
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_table(&["value"], &rows, table_options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    headers.sort_by(|a, b| column_rank(a).cmp(&column_rank(b)).then(a.cmp(b)));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

fn column_rank(key: &str) -> usize {
    LEADING_COLUMNS
        .iter()
        .position(|column| *column == key)
        .unwrap_or(LEADING_COLUMNS.len())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table_options_for};
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
        }
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        text: &'static str,
        id: &'static str,
        ai_insights: Vec<&'static str>,
    }

    fn row() -> Row {
        Row {
            text: "Maybe",
            id: "1718000000000",
            ai_insights: vec!["Text too short for full analysis", "Text contains subjective assessments"],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&row(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "1718000000000");
        assert_eq!(parsed["aiInsights"][1], "Text contains subjective assessments");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&row(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["text"], "Maybe");
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&row(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(lines[2].starts_with("id"));
        assert!(out.contains("Text too short for full analysis; Text contains"));
    }

    #[test]
    fn table_render_for_rows_puts_id_first() {
        let out = render(&vec![row(), row()], OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let id_at = header.find("id").expect("id column");
        let text_at = header.find("text").expect("text column");
        assert!(id_at < text_at);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rows: Vec<u8> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn auto_color_needs_terminal_and_no_no_color() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(table_options_for(&table, true, false, None).color);
        assert!(!table_options_for(&table, false, false, None).color);
        assert!(!table_options_for(&table, true, true, None).color);
    }

    #[test]
    fn color_applies_only_to_tables() {
        let json = flags(OutputFormat::Json, ColorMode::Always);
        assert!(!table_options_for(&json, true, false, None).color);
        let never = flags(OutputFormat::Table, ColorMode::Never);
        assert!(!table_options_for(&never, true, false, None).color);
        let always = flags(OutputFormat::Table, ColorMode::Always);
        assert!(table_options_for(&always, false, true, None).color);
    }

    #[test]
    fn columns_sets_width_unless_too_narrow() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        assert_eq!(table_options_for(&table, false, false, Some("120")).max_width, Some(120));
        assert_eq!(table_options_for(&table, false, false, Some("20")).max_width, None);
        assert_eq!(table_options_for(&table, false, false, Some("wide")).max_width, None);
    }
}
