//! `@Ref` fields, rendered as computed accessors over `this.$refs`.

use oxc_ast::ast::PropertyDefinition;
use serde::Serialize;

use crate::ast_util::{property_key_name, type_text};
use crate::writer::CodeWriter;

use super::method::render_function;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ref {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Not used when rendering.
    pub is_readonly: bool,
}

pub fn extract(field: &PropertyDefinition<'_>, source: &str) -> Ref {
    Ref {
        name: property_key_name(&field.key, source),
        type_: type_text(field.type_annotation.as_deref(), source),
        is_readonly: field.readonly,
    }
}

pub fn render(reference: &Ref, writer: &mut CodeWriter) {
    let (head, lookup) = match &reference.type_ {
        Some(type_) => (
            format!("{} (): {} ", reference.name, type_),
            format!("return this.$refs.{} as {}", reference.name, type_),
        ),
        None => (
            format!("{} () ", reference.name),
            format!("return this.$refs.{}", reference.name),
        ),
    };
    render_function(writer, &head, &[lookup]);
}
