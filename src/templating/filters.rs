//! Custom Tera filters available to page, menu and partial templates.
//!
//! # Filters
//!
//! - `relative_url(depth=N)`: prefix that climbs `N` directories, e.g. `../../`.
//!   Pages nested under `modules/` or `components/` use it to link back to
//!   site-level assets.
//! - `break_lines`: HTML-escapes its input, then turns newlines into `<br>`
//!   and preserves leading spaces.
//! - `clean_paragraph`: strips `<p>` wrappers emitted by markdown rendering so
//!   a description can be embedded inline.
//!
//! All three return HTML, so templates mark their output `| safe` when it
//! must not be escaped a second time.

use std::collections::HashMap;
use tera::{Tera, Value, escape_html, to_value, try_get_value};

/// Registers every custom filter on `tera`.
pub fn register(tera: &mut Tera) {
    tera.register_filter("relative_url", relative_url);
    tera.register_filter("break_lines", break_lines);
    tera.register_filter("clean_paragraph", clean_paragraph);
}

fn relative_url(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let base = try_get_value!("relative_url", "value", String, value);
    let depth = match args.get("depth") {
        Some(depth) => try_get_value!("relative_url", "depth", u64, depth),
        None => 0,
    };
    let prefix = if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth as usize)
    };
    Ok(to_value(format!("{prefix}{base}"))?)
}

fn break_lines(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = try_get_value!("break_lines", "value", String, value);
    let html = text
        .lines()
        .map(|line| {
            let trimmed = line.trim_start_matches(' ');
            let indent = line.len() - trimmed.len();
            format!("{}{}", "&nbsp;".repeat(indent), escape_html(trimmed))
        })
        .collect::<Vec<_>>()
        .join("<br>");
    Ok(to_value(html)?)
}

fn clean_paragraph(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = try_get_value!("clean_paragraph", "value", String, value);
    Ok(to_value(text.replace("<p>", "").replace("</p>", ""))?)
}
