//! Single-File Components
//!
//! Splits a `.vue` file into its top-level blocks and puts it back
//! together. Block contents are kept byte-for-byte; only the script is
//! ever replaced.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([A-Za-z][\w-]*)((?:\s+[^\s=/>]+(?:\s*=\s*(?:\x22[^\x22]*\x22|'[^']*'|[^\s>]+))?)*)\s*(/?)>").unwrap());
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([^\s=/>]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+)))?"#).unwrap());
static TEMPLATE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(/?)template(?:[\s>/])").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SfcBlock {
    /// Tag name: `template`, `script`, `style` or a custom block name.
    pub kind: String,
    pub content: String,
    /// Attributes in source order; bare attributes map to an empty string.
    pub attrs: IndexMap<String, String>,
    pub lang: Option<String>,
}

impl SfcBlock {
    pub fn new(kind: &str, content: &str) -> Self {
        SfcBlock {
            kind: kind.to_string(),
            content: content.to_string(),
            attrs: IndexMap::new(),
            lang: None,
        }
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.attrs.insert("lang".to_string(), lang.to_string());
        self.lang = Some(lang.to_string());
    }

    fn to_source(&self) -> String {
        let attrs: String = self
            .attrs
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    format!(" {}", key)
                } else {
                    format!(" {}={}", key, quote_attribute(value))
                }
            })
            .collect();
        format!("<{kind}{attrs}>{content}</{kind}>\n", kind = self.kind, attrs = attrs, content = self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SfcDescriptor {
    pub template: Option<SfcBlock>,
    pub script: Option<SfcBlock>,
    pub styles: Vec<SfcBlock>,
    pub custom_blocks: Vec<SfcBlock>,
}

impl SfcDescriptor {
    /// Template, script, styles, then custom blocks, separated by blank lines.
    pub fn to_source(&self) -> String {
        self.template
            .iter()
            .chain(self.script.iter())
            .chain(self.styles.iter())
            .chain(self.custom_blocks.iter())
            .map(SfcBlock::to_source)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn parse_sfc(text: &str) -> SfcDescriptor {
    let mut descriptor = SfcDescriptor::default();
    let mut position = 0;

    while let Some(lt) = text[position..].find('<') {
        position += lt;
        let rest = &text[position..];
        if rest.starts_with("<!--") {
            position += rest.find("-->").map_or(rest.len(), |end| end + 3);
            continue;
        }
        let Some(captures) = OPEN_TAG.captures(rest) else {
            position += 1;
            continue;
        };

        let (Some(whole), Some(kind)) = (captures.get(0), captures.get(1)) else {
            break;
        };
        let kind = kind.as_str();
        let content_start = position + whole.end();
        position = content_start;
        if captures.get(3).is_some_and(|m| !m.as_str().is_empty()) {
            continue;
        }

        let Some((content_end, close_end)) = find_close(text, content_start, kind) else {
            tracing::warn!(block = kind, "unclosed block ignored");
            break;
        };
        position = close_end;

        let mut block = SfcBlock::new(kind, &text[content_start..content_end]);
        if let Some(attrs) = captures.get(2) {
            block.attrs = parse_attributes(attrs.as_str());
        }
        block.lang = block.attrs.get("lang").cloned();

        match kind {
            "template" if descriptor.template.is_none() => descriptor.template = Some(block),
            "script" if descriptor.script.is_none() => descriptor.script = Some(block),
            "style" => descriptor.styles.push(block),
            _ => descriptor.custom_blocks.push(block),
        }
    }
    descriptor
}

/// Returns the offsets of the closing tag's start and end. Templates nest;
/// any other block ends at its first closing tag.
fn find_close(text: &str, from: usize, kind: &str) -> Option<(usize, usize)> {
    if kind != "template" {
        let close = format!("</{}>", kind);
        return text[from..]
            .find(&close)
            .map(|start| (from + start, from + start + close.len()));
    }

    let mut depth = 1usize;
    for tag in TEMPLATE_TAG.captures_iter(&text[from..]) {
        let whole = tag.get(0)?;
        if tag.get(1).is_some_and(|slash| !slash.as_str().is_empty()) {
            depth -= 1;
            if depth == 0 {
                let start = from + whole.start();
                let end = text[start..].find('>').map_or(text.len(), |gt| start + gt + 1);
                return Some((start, end));
            }
        } else {
            depth += 1;
        }
    }
    None
}

/// Double quotes unless the value holds one; then single quotes, or
/// `&quot;` when it holds both.
fn quote_attribute(value: &str) -> String {
    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{}\"", value),
        (true, false) => format!("'{}'", value),
        (true, true) => format!("\"{}\"", value.replace('"', "&quot;")),
    }
}

fn parse_attributes(text: &str) -> IndexMap<String, String> {
    ATTRIBUTE
        .captures_iter(text)
        .filter_map(|attr| {
            let key = attr.get(1)?.as_str().to_string();
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map_or_else(String::new, |v| v.as_str().to_string());
            Some((key, value))
        })
        .collect()
}
