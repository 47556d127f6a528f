//! Getter accessors, rendered into the `computed` map.

use oxc_ast::ast::MethodDefinition;
use serde::Serialize;

use crate::ast_util::{property_key_name, statement_texts, type_text};
use crate::writer::CodeWriter;

use super::method::render_function;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computed {
    pub name: String,
    pub return_type: Option<String>,
    pub statements: Vec<String>,
}

pub fn extract(getter: &MethodDefinition<'_>, source: &str) -> Computed {
    let function = &getter.value;
    Computed {
        name: property_key_name(&getter.key, source),
        return_type: type_text(function.return_type.as_deref(), source),
        statements: function
            .body
            .as_ref()
            .map(|body| statement_texts(body, source))
            .unwrap_or_default(),
    }
}

pub fn render(computed: &Computed, writer: &mut CodeWriter) {
    let head = match &computed.return_type {
        Some(return_type) => format!("{}(): {} ", computed.name, return_type),
        None => format!("{}() ", computed.name),
    };
    render_function(writer, &head, &computed.statements);
}
