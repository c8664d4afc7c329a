use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

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

fn table_options() -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|cols| cols.trim().parse().ok()),
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            // A response wrapping exactly one list of records renders as that list.
            if let Some(items) = single_array_field(&map) {
                return Ok(render_array_table(items, options));
            }
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

/// The lone array-of-objects field of a list envelope, if there is exactly one.
/// Arrays of scalars (tags, ids) stay inline as cells.
fn single_array_field(map: &serde_json::Map<String, Value>) -> Option<&Vec<Value>> {
    let mut lists = map
        .values()
        .filter_map(Value::as_array)
        .filter(|items| items.iter().all(Value::is_object));
    let first = lists.next()?;
    lists.next().is_none().then_some(first)
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    // Column order follows the first appearance of each key.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pmhub_core::entities::CaseStudy;
    use pmhub_core::enums::{Market, Objective};
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{render, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        likes: u32,
    }

    #[derive(Serialize)]
    struct Listing {
        items: Vec<Example>,
        total: usize,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", likes: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["likes"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", likes: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert_eq!(out, r#"{"id":"x","likes":7}"#);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example { id: "x", likes: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("likes"));
    }

    #[test]
    fn table_render_unwraps_single_list_field() {
        let value = Listing {
            items: vec![Example { id: "a", likes: 1 }, Example { id: "b", likes: 2 }],
            total: 2,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        assert!(header.contains("id") && header.contains("likes"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn table_render_keeps_every_field_of_a_single_case_study() {
        let study = CaseStudy {
            id: "42".into(),
            title: "Streaks and habit loops".into(),
            is_new: false,
            likes: 640,
            category: "EdTech".into(),
            company: "Duolingo".into(),
            creator: None,
            market: Market::B2c,
            objective: vec![Objective::Growth, Objective::Retention],
            description: "Daily streaks as a retention mechanic.".into(),
            image: "/images/42.png".into(),
        };
        let out = render(&study, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        for expected in ["Duolingo", "Streaks and habit loops", "EdTech", "B2C", "Growth, Retention"] {
            assert!(out.contains(expected), "missing {expected} in:\n{out}");
        }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty: Vec<Example> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn string_arrays_render_comma_separated() {
        assert_eq!(
            value_to_cell(&json!(["Growth", "User Experience"])),
            "Growth, User Experience"
        );
        assert_eq!(value_to_cell(&json!(null)), "-");
    }
}
