//! House Style
//!
//! Cosmetic normalization applied to generated text: single quotes, no
//! statement-terminating semicolons, no trailing whitespace, at most one
//! blank line in a row and none just inside braces. Template literal
//! content is never touched.

use std::ops::Range;

use crate::syntax::SyntaxFacts;

/// Normalizes a generated module. Text that does not parse is returned
/// as is, apart from the trailing newline.
pub fn normalize(text: &str, indent_width: usize) -> String {
    let Some(facts) = SyntaxFacts::of_module(text) else {
        tracing::warn!("generated module does not parse; house style skipped");
        return format!("{}\n", text.trim_end_matches('\n'));
    };
    // edits never add or remove line breaks, so the flags stay aligned
    let template_lines = facts.template_lines(text);

    let mut edits = quote_edits(text, &facts);
    edits.extend(semicolon_edits(text, &facts));
    edits.sort_by_key(|(range, _)| range.start);

    let text = apply(text, &edits);
    let text = expand_tabs(&text, &template_lines, indent_width);
    tidy_lines(&text, &template_lines)
}

type Edit = (Range<usize>, String);

fn apply(text: &str, edits: &[Edit]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for (range, replacement) in edits {
        result.push_str(&text[last..range.start]);
        result.push_str(replacement);
        last = range.end;
    }
    result.push_str(&text[last..]);
    result
}

/// `"x"` becomes `'x'` unless the literal holds a single quote.
fn quote_edits(text: &str, facts: &SyntaxFacts) -> Vec<Edit> {
    facts
        .string_literals()
        .iter()
        .filter(|range| text[range.start..].starts_with('"'))
        .filter_map(|range| {
            let inner = &text[range.start + 1..range.end - 1];
            if inner.contains('\'') {
                return None;
            }
            Some((range.clone(), format!("'{}'", inner.replace("\\\"", "\""))))
        })
        .collect()
}

/// Removes a terminating `;` that ends its line, unless the next line
/// starts with a token that would join the two statements.
fn semicolon_edits(text: &str, facts: &SyntaxFacts) -> Vec<Edit> {
    facts
        .terminators()
        .iter()
        .filter(|&&offset| {
            let rest = &text[offset + 1..];
            let (line_rest, following) = rest.split_once('\n').unwrap_or((rest, ""));
            let line_rest = line_rest.trim();
            if !(line_rest.is_empty() || line_rest.starts_with("//")) {
                return false;
            }
            let next = following.lines().map(str::trim_start).find(|l| !l.is_empty());
            !next.is_some_and(|l| l.starts_with(['(', '[', '`', '+', '-', '/']))
        })
        .map(|&offset| (offset..offset + 1, String::new()))
        .collect()
}

/// Leading tabs become `indent_width` spaces.
fn expand_tabs(text: &str, template_lines: &[bool], indent_width: usize) -> String {
    let indent = " ".repeat(indent_width);
    text.split('\n')
        .zip(template_lines)
        .map(|(line, &in_template)| {
            if in_template {
                return line.to_string();
            }
            let tabs = line.chars().take_while(|c| *c == '\t').count();
            format!("{}{}", indent.repeat(tabs), &line[tabs..])
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tidy_lines(text: &str, template_lines: &[bool]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (i, line) in text.split('\n').enumerate() {
        if template_lines.get(i).copied().unwrap_or(false) {
            lines.push(line.to_string());
            continue;
        }
        let ends_in_template = template_lines.get(i + 1).copied().unwrap_or(false);
        let line = if ends_in_template { line } else { line.trim_end() };

        if line.is_empty() {
            let after_blank_or_open = lines
                .last()
                .map_or(true, |prev| prev.is_empty() || prev.ends_with('{'));
            if after_blank_or_open {
                continue;
            }
        } else if line.trim_start().starts_with('}') {
            while lines.last().is_some_and(|prev| prev.is_empty()) {
                lines.pop();
            }
        }
        lines.push(line.to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let mut result = lines.join("\n");
    result.push('\n');
    result
}
