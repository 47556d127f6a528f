//! The component header: class name and the decorator's `components` map.

use oxc_ast::ast::{Class, Expression, ObjectPropertyKind};
use oxc_span::GetSpan;
use serde::Serialize;

use crate::ast_util::{object_entries, single_quoted, DecoratorCall};
use crate::source_file::span_text;
use crate::writer::CodeWriter;

/// Name given to an anonymous `export default class`.
pub const ANONYMOUS_COMPONENT_NAME: &str = "AnonymousComponent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub name: String,
    /// Entries of the `components` map, as written (`Foo` or `Foo: Bar`).
    pub imported_components: Vec<String>,
}

pub fn class_name(class: &Class<'_>) -> String {
    class
        .id
        .as_ref()
        .map(|id| id.name.to_string())
        .unwrap_or_else(|| ANONYMOUS_COMPONENT_NAME.to_string())
}

pub fn extract(class: &Class<'_>, decorator: &DecoratorCall<'_, '_>, source: &str) -> Component {
    let mut imported_components = Vec::new();

    if let Some(Expression::ObjectExpression(options)) = decorator.arguments.first().copied() {
        let components = object_entries(options, source)
            .into_iter()
            .find(|(key, _)| key == "components");
        if let Some((_, Expression::ObjectExpression(map))) = components {
            imported_components = map
                .properties
                .iter()
                .map(|property| match property {
                    ObjectPropertyKind::ObjectProperty(p) => span_text(source, p.span()),
                    ObjectPropertyKind::SpreadProperty(s) => span_text(source, s.span()),
                })
                .map(str::to_string)
                .collect();
        }
    }

    Component {
        name: class_name(class),
        imported_components,
    }
}

pub fn render(component: &Component, writer: &mut CodeWriter) {
    writer.write_line(&format!("name: {},", single_quoted(&component.name)));

    if !component.imported_components.is_empty() {
        writer
            .blank_line()
            .write("components: ")
            .inline_block(|w| {
                for imported in &component.imported_components {
                    w.write_line(&format!("{},", imported));
                }
            })
            .write(",")
            .new_line();
    }
}
